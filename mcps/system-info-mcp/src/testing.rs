//! Stub capability provider for unit tests

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::info::CapabilityProvider;
use crate::types::*;

pub(crate) const GIB: u64 = 1 << 30;

/// Answers every query from fixed facts, optionally slow, hung or failing
#[derive(Debug, Clone, Default)]
pub(crate) struct StubProvider {
    pub cpu: CpuFacts,
    pub memory: MemoryFacts,
    pub graphics: GraphicsFacts,
    pub block_devices: Vec<BlockDevice>,
    pub system: SystemIdentity,
    pub battery: BatteryFacts,
    pub os: OsFacts,
    pub time: TimeFacts,
    pub load: LoadFacts,
    pub network: Vec<NetworkInterfaceFacts>,
    failing: Option<&'static str>,
    hanging: Option<&'static str>,
    delay: Duration,
}

impl StubProvider {
    /// A laptop-like machine with one GPU, one disk, a battery and three interfaces
    pub fn typical() -> Self {
        Self {
            cpu: CpuFacts {
                manufacturer: "Intel".to_string(),
                brand: "Core™ i7-10750H".to_string(),
                model: "165".to_string(),
                physical_cores: 6,
                logical_cores: 12,
                speed_ghz: 2.6,
                speed_max_ghz: 5.0,
                cache: CpuCache {
                    l1d: 192 * 1024,
                    l1i: 192 * 1024,
                    l2: 1536 * 1024,
                    l3: 12 * 1024 * 1024,
                },
            },
            memory: MemoryFacts {
                total: 8 * GIB,
                used: 4 * GIB,
                available: 4 * GIB,
                swap_total: 2 * GIB,
                swap_used: GIB / 2,
            },
            graphics: GraphicsFacts {
                controllers: vec![
                    GpuController {
                        vendor: "NVIDIA".to_string(),
                        model: "GeForce GTX 1650 Ti".to_string(),
                        vram_mb: Some(4096),
                        driver_version: "535.54.03".to_string(),
                    },
                    GpuController {
                        vendor: "Intel".to_string(),
                        model: "UHD Graphics".to_string(),
                        vram_mb: None,
                        driver_version: "i915".to_string(),
                    },
                ],
            },
            block_devices: vec![BlockDevice {
                name: "nvme0n1".to_string(),
                kind: "disk".to_string(),
                size: 512_110_190_592,
                vendor: "Samsung".to_string(),
                model: "PM981a".to_string(),
                serial: "S4GXNF0N123456".to_string(),
                removable: false,
            }],
            system: SystemIdentity {
                manufacturer: "Dell Inc.".to_string(),
                model: "XPS 15 9500".to_string(),
                version: "1.0".to_string(),
                serial: "ABC1234".to_string(),
                uuid: "4c4c4544-0042-3510-8050-b4c04f4e4b32".to_string(),
            },
            battery: BatteryFacts {
                has_battery: true,
                is_charging: false,
                percent: 87.0,
                time_remaining_secs: Some(125),
                cycle_count: 42,
                max_capacity_percent: 95.0,
            },
            os: OsFacts {
                platform: "linux".to_string(),
                distro: "Ubuntu".to_string(),
                release: "24.04".to_string(),
                arch: "x86_64".to_string(),
                hostname: "workstation".to_string(),
                kernel: "6.8.0-45-generic".to_string(),
            },
            time: TimeFacts {
                uptime_secs: 3661,
                timezone: "GMT+0000".to_string(),
            },
            load: LoadFacts {
                current: 12.34,
                user: 8.0,
                system: 4.34,
                idle: 87.66,
            },
            network: vec![
                NetworkInterfaceFacts {
                    iface: "eth0".to_string(),
                    mac: "00:1a:2b:3c:4d:5e".to_string(),
                    ip4: "192.168.1.20".to_string(),
                    ip6: "fe80::21a:2bff:fe3c:4d5e".to_string(),
                    kind: "wired".to_string(),
                    speed_mbps: Some(1000.0),
                    operstate: "up".to_string(),
                    internal: false,
                },
                NetworkInterfaceFacts {
                    iface: "lo".to_string(),
                    mac: "00:00:00:00:00:00".to_string(),
                    ip4: "127.0.0.1".to_string(),
                    ip6: "::1".to_string(),
                    kind: "virtual".to_string(),
                    speed_mbps: None,
                    operstate: "unknown".to_string(),
                    internal: true,
                },
                NetworkInterfaceFacts {
                    iface: "wlan0".to_string(),
                    mac: "a4:c3:f0:11:22:33".to_string(),
                    ip4: "10.0.0.7".to_string(),
                    ip6: String::new(),
                    kind: "wireless".to_string(),
                    speed_mbps: None,
                    operstate: "up".to_string(),
                    internal: false,
                },
            ],
            ..Default::default()
        }
    }

    /// Make the named query fail
    pub fn failing(mut self, query: &'static str) -> Self {
        self.failing = Some(query);
        self
    }

    /// Make the named query never answer
    pub fn hanging(mut self, query: &'static str) -> Self {
        self.hanging = Some(query);
        self
    }

    /// Delay every query
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn answer<T: Clone>(&self, query: &'static str, value: &T) -> Result<T, ProviderError> {
        if self.hanging == Some(query) {
            std::future::pending::<()>().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing == Some(query) {
            return Err(ProviderError::Other(format!("{} probe exploded", query)));
        }
        Ok(value.clone())
    }
}

#[async_trait]
impl CapabilityProvider for StubProvider {
    async fn cpu(&self) -> Result<CpuFacts, ProviderError> {
        self.answer("cpu", &self.cpu).await
    }

    async fn memory(&self) -> Result<MemoryFacts, ProviderError> {
        self.answer("memory", &self.memory).await
    }

    async fn graphics(&self) -> Result<GraphicsFacts, ProviderError> {
        self.answer("graphics", &self.graphics).await
    }

    async fn block_devices(&self) -> Result<Vec<BlockDevice>, ProviderError> {
        self.answer("blockDevices", &self.block_devices).await
    }

    async fn system(&self) -> Result<SystemIdentity, ProviderError> {
        self.answer("system", &self.system).await
    }

    async fn battery(&self) -> Result<BatteryFacts, ProviderError> {
        self.answer("battery", &self.battery).await
    }

    async fn os_info(&self) -> Result<OsFacts, ProviderError> {
        self.answer("osInfo", &self.os).await
    }

    async fn time(&self) -> Result<TimeFacts, ProviderError> {
        self.answer("time", &self.time).await
    }

    async fn current_load(&self) -> Result<LoadFacts, ProviderError> {
        self.answer("currentLoad", &self.load).await
    }

    async fn network_interfaces(&self) -> Result<Vec<NetworkInterfaceFacts>, ProviderError> {
        self.answer("networkInterfaces", &self.network).await
    }
}
