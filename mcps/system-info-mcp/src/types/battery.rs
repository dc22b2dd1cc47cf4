//! Battery fact types

use serde::{Deserialize, Serialize};

/// Battery state of the primary battery
///
/// When `has_battery` is false the remaining fields carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryFacts {
    pub has_battery: bool,
    pub is_charging: bool,
    /// Charge level, 0-100
    pub percent: f64,
    /// Estimated seconds until empty, `None` when not discharging or unknown
    pub time_remaining_secs: Option<u64>,
    pub cycle_count: u32,
    /// Full-charge capacity as a percentage of design capacity
    pub max_capacity_percent: f64,
}
