//! Block device fact types

use serde::{Deserialize, Serialize};

/// A block device (whole disk, not a partition)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockDevice {
    /// Kernel device name (e.g., "nvme0n1", "sda")
    pub name: String,
    /// Device kind (e.g., "disk", "SSD", "HDD")
    pub kind: String,
    /// Capacity in bytes
    pub size: u64,
    pub vendor: String,
    pub model: String,
    pub serial: String,
    pub removable: bool,
}
