//! Service Ports
//!
//! Abstract interfaces for external services.

mod location;
mod speech;
mod translator;

pub use location::*;
pub use speech::*;
pub use translator::*;
