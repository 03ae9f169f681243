//! Location Provider Port

use crate::domain::GeoLocation;

/// Source of the device's current position
pub trait LocationProvider: Send + Sync {
    /// Latest fix, or `None` when no position is available
    fn current_location(&self) -> Option<GeoLocation>;
}
