//! Location sources

use std::sync::RwLock;

use sahayak::{GeoLocation, LocationProvider};

/// A location fix set by hand (from configuration or a prompt) and
/// changeable at runtime
#[derive(Debug, Default)]
pub struct ManualLocation {
    fix: RwLock<Option<GeoLocation>>,
}

impl ManualLocation {
    pub fn new(fix: Option<GeoLocation>) -> Self {
        Self {
            fix: RwLock::new(fix),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn set(&self, fix: Option<GeoLocation>) {
        let mut guard = self.fix.write().unwrap_or_else(|e| e.into_inner());
        *guard = fix;
    }
}

impl LocationProvider for ManualLocation {
    fn current_location(&self) -> Option<GeoLocation> {
        *self.fix.read().unwrap_or_else(|e| e.into_inner())
    }
}
