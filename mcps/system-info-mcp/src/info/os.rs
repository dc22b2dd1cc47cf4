//! OS information collection

use sysinfo::System;

use crate::error::ProviderError;
use crate::types::OsFacts;

/// Get operating system identity
pub fn get_os_facts() -> Result<OsFacts, ProviderError> {
    Ok(OsFacts {
        platform: platform_name(std::env::consts::OS).to_string(),
        distro: System::name().unwrap_or_default(),
        release: System::os_version().unwrap_or_default(),
        arch: std::env::consts::ARCH.to_string(),
        hostname: System::host_name().unwrap_or_default(),
        kernel: System::kernel_version().unwrap_or_default(),
    })
}

/// Conventional platform family names
fn platform_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
