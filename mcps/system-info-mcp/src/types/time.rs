//! Clock fact types

use serde::{Deserialize, Serialize};

/// Uptime and local timezone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeFacts {
    /// Seconds since boot
    pub uptime_secs: u64,
    /// Local timezone name or UTC offset
    pub timezone: String,
}
