//! Network fact types

use serde::{Deserialize, Serialize};

/// A network interface as seen by the OS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceFacts {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub iface: String,
    pub mac: String,
    /// First IPv4 address, empty if none
    pub ip4: String,
    /// First IPv6 address, empty if none
    pub ip6: String,
    /// "wired", "wireless" or "virtual"
    pub kind: String,
    /// Link speed in Mbps, `None` when unknown
    pub speed_mbps: Option<f64>,
    /// Operational state (e.g., "up", "down", "unknown")
    pub operstate: String,
    /// Loopback or otherwise host-internal interface
    pub internal: bool,
}
