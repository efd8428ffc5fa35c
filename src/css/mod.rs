//! CSS naming helpers used while serializing style objects.

mod names;
mod unitless;

pub use names::dashify;
pub use unitless::is_unitless;
