//! System information collection
//!
//! [`CapabilityProvider`] is the seam between report generation and the
//! platform. Every query is independent and may fail on its own.
//! [`SysinfoProvider`] answers them with the `sysinfo` crate, plus procfs and
//! sysfs reads for facts sysinfo does not expose. Where those files are absent
//! (non-Linux hosts, containers) the probes fall back to sysinfo or to empty
//! values.

pub mod battery;
pub mod cpu;
pub mod graphics;
pub mod load;
pub mod memory;
pub mod network;
pub mod os;
pub mod storage;
pub mod system;
pub mod time;

use std::path::Path;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{
    BatteryFacts, BlockDevice, CpuFacts, GraphicsFacts, LoadFacts, MemoryFacts,
    NetworkInterfaceFacts, OsFacts, SystemIdentity, TimeFacts,
};

/// Source of raw system facts, one async query per fact category
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    async fn cpu(&self) -> Result<CpuFacts, ProviderError>;

    async fn memory(&self) -> Result<MemoryFacts, ProviderError>;

    async fn graphics(&self) -> Result<GraphicsFacts, ProviderError>;

    async fn block_devices(&self) -> Result<Vec<BlockDevice>, ProviderError>;

    async fn system(&self) -> Result<SystemIdentity, ProviderError>;

    async fn battery(&self) -> Result<BatteryFacts, ProviderError>;

    async fn os_info(&self) -> Result<OsFacts, ProviderError>;

    async fn time(&self) -> Result<TimeFacts, ProviderError>;

    /// CPU load over a short sampling window
    async fn current_load(&self) -> Result<LoadFacts, ProviderError>;

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterfaceFacts>, ProviderError>;
}

/// Production provider backed by `sysinfo` and the Linux pseudo filesystems
///
/// Stateless: every query builds what it needs, so concurrent calls never
/// contend on a shared `System`.
#[derive(Debug, Clone, Default)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CapabilityProvider for SysinfoProvider {
    async fn cpu(&self) -> Result<CpuFacts, ProviderError> {
        blocking(cpu::get_cpu_facts).await
    }

    async fn memory(&self) -> Result<MemoryFacts, ProviderError> {
        blocking(memory::get_memory_facts).await
    }

    async fn graphics(&self) -> Result<GraphicsFacts, ProviderError> {
        blocking(graphics::get_graphics_facts).await
    }

    async fn block_devices(&self) -> Result<Vec<BlockDevice>, ProviderError> {
        blocking(storage::get_block_devices).await
    }

    async fn system(&self) -> Result<SystemIdentity, ProviderError> {
        blocking(system::get_system_identity).await
    }

    async fn battery(&self) -> Result<BatteryFacts, ProviderError> {
        blocking(battery::get_battery_facts).await
    }

    async fn os_info(&self) -> Result<OsFacts, ProviderError> {
        blocking(os::get_os_facts).await
    }

    async fn time(&self) -> Result<TimeFacts, ProviderError> {
        Ok(time::get_time_facts())
    }

    async fn current_load(&self) -> Result<LoadFacts, ProviderError> {
        load::get_load_facts().await
    }

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterfaceFacts>, ProviderError> {
        blocking(network::get_network_interfaces).await
    }
}

/// Run a synchronous probe on the blocking pool
async fn blocking<T, F>(probe: F) -> Result<T, ProviderError>
where
    F: FnOnce() -> Result<T, ProviderError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(probe).await?
}

/// Read a pseudo-file and trim it; `None` when missing, unreadable or empty
pub(crate) fn read_trimmed(path: impl AsRef<Path>) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let value = raw.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Read and parse a numeric pseudo-file
pub(crate) fn read_number<N: std::str::FromStr>(path: impl AsRef<Path>) -> Option<N> {
    read_trimmed(path)?.parse().ok()
}

/// Name of a PCI vendor ID such as `0x10de`; other values pass through
pub(crate) fn pci_vendor_name(vendor: &str) -> &str {
    match vendor.to_ascii_lowercase().as_str() {
        "0x10de" => "NVIDIA",
        "0x1002" | "0x1022" => "AMD",
        "0x8086" => "Intel",
        "0x1af4" => "Red Hat (virtio)",
        "0x15ad" => "VMware",
        "0x1234" => "QEMU",
        "0x13b5" => "ARM",
        "0x5143" => "Qualcomm",
        "0x144d" => "Samsung",
        "0x15b7" => "SanDisk",
        "0x1c5c" => "SK hynix",
        "0x1e0f" => "KIOXIA",
        "0x1344" => "Micron",
        "0x2646" => "Kingston",
        "0x1987" => "Phison",
        "0x126f" => "Silicon Motion",
        "0x1b4b" => "Marvell",
        "0x106b" => "Apple",
        _ => vendor,
    }
}
