//! Graphics fact types

use serde::{Deserialize, Serialize};

/// All graphics controllers, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicsFacts {
    pub controllers: Vec<GpuController>,
}

/// A single graphics controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuController {
    pub vendor: String,
    pub model: String,
    /// Dedicated video memory in MB, `None` when the driver does not expose it
    pub vram_mb: Option<u64>,
    pub driver_version: String,
}
