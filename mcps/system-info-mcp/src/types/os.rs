//! OS fact types

use serde::{Deserialize, Serialize};

/// Operating system identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsFacts {
    /// Platform family (e.g., "linux", "darwin", "win32")
    pub platform: String,
    /// Distribution or product name
    pub distro: String,
    /// Distribution/OS release version
    pub release: String,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub arch: String,
    pub hostname: String,
    pub kernel: String,
}
