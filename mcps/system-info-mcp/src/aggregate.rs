//! Concurrent fact gathering
//!
//! Each report type has a fixed batch of provider queries. The batch runs
//! concurrently under one deadline and is all-or-nothing: the first failure
//! (or the deadline) ends the batch, and the queries still in flight are
//! dropped. Results are matched to report fields by position, never by
//! completion order.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{ProviderError, ReportError};
use crate::info::CapabilityProvider;
use crate::types::{
    BatteryFacts, BlockDevice, CpuFacts, GraphicsFacts, LoadFacts, MemoryFacts,
    NetworkInterfaceFacts, OsFacts, SystemIdentity, TimeFacts,
};

/// Everything the hardware report is built from
#[derive(Debug, Clone, Default)]
pub struct HardwareFacts {
    pub cpu: CpuFacts,
    pub memory: MemoryFacts,
    pub graphics: GraphicsFacts,
    pub storage: Vec<BlockDevice>,
    pub system: SystemIdentity,
    pub battery: BatteryFacts,
}

/// Everything the system status report is built from
#[derive(Debug, Clone, Default)]
pub struct StatusFacts {
    pub os: OsFacts,
    pub time: TimeFacts,
    pub memory: MemoryFacts,
    pub load: LoadFacts,
    pub network: Vec<NetworkInterfaceFacts>,
}

/// Run the six hardware queries concurrently
pub async fn gather_hardware(
    provider: &dyn CapabilityProvider,
    limit: Duration,
) -> Result<HardwareFacts, ReportError> {
    let (cpu, memory, graphics, storage, system, battery) = bounded(limit, async {
        tokio::try_join!(
            query("cpu", provider.cpu()),
            query("memory", provider.memory()),
            query("graphics", provider.graphics()),
            query("blockDevices", provider.block_devices()),
            query("system", provider.system()),
            query("battery", provider.battery()),
        )
    })
    .await?;

    Ok(HardwareFacts {
        cpu,
        memory,
        graphics,
        storage,
        system,
        battery,
    })
}

/// Run the five status queries concurrently
pub async fn gather_status(
    provider: &dyn CapabilityProvider,
    limit: Duration,
) -> Result<StatusFacts, ReportError> {
    let (os, time, memory, load, network) = bounded(limit, async {
        tokio::try_join!(
            query("osInfo", provider.os_info()),
            query("time", provider.time()),
            query("memory", provider.memory()),
            query("currentLoad", provider.current_load()),
            query("networkInterfaces", provider.network_interfaces()),
        )
    })
    .await?;

    Ok(StatusFacts {
        os,
        time,
        memory,
        load,
        network,
    })
}

/// Tag a provider failure with the query it came from
async fn query<T>(
    name: &'static str,
    fut: impl Future<Output = Result<T, ProviderError>>,
) -> Result<T, ReportError> {
    fut.await.map_err(|source| {
        debug!(query = name, error = %source, "Provider query failed");
        ReportError::ProviderQueryFailed {
            query: name,
            source,
        }
    })
}

async fn bounded<T>(
    limit: Duration,
    batch: impl Future<Output = Result<T, ReportError>>,
) -> Result<T, ReportError> {
    tokio::time::timeout(limit, batch)
        .await
        .map_err(|_| ReportError::ProviderTimeout { after: limit })?
}
