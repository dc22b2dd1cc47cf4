//! Report normalization
//!
//! Turns gathered facts into the stable, display-ready report shapes: field
//! renaming, unit suffixes, percentages and localized text. Pure and
//! synchronous; the only outside input is the `now` passed in for the status
//! report.

pub mod hardware;
pub mod status;
pub mod units;

pub use hardware::{normalize_hardware, BatterySection, HardwareReport};
pub use status::{normalize_status, SystemStatusReport};
