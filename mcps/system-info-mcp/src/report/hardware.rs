//! Hardware inventory report

use serde::{Deserialize, Serialize};

use super::units::{ghz, gib_fixed, gib_rounded, ratio_percent};
use crate::aggregate::HardwareFacts;
use crate::locale::Labels;
use crate::types::{
    BatteryFacts, BlockDevice, CpuFacts, GpuController, MemoryFacts, SystemIdentity,
};

/// Normalized hardware inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareReport {
    #[serde(rename = "CPU")]
    pub cpu: CpuSection,
    pub memory: MemorySection,
    pub graphics: Vec<GraphicsSection>,
    pub storage_devices: Vec<StorageSection>,
    pub system_info: SystemInfoSection,
    pub battery: BatterySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSection {
    pub manufacturer: String,
    pub brand: String,
    pub model: String,
    /// Physical cores
    pub cores: usize,
    /// Logical processors
    pub threads: usize,
    pub base_frequency: String,
    pub max_frequency: String,
    pub cache: CacheSection,
}

/// Cache sizes in bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSection {
    pub l1_data: u64,
    pub l1_instruction: u64,
    pub l2: u64,
    pub l3: u64,
}

/// Memory totals in whole gigabytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySection {
    pub total_capacity: String,
    pub available_capacity: String,
    pub used_capacity: String,
    pub usage_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsSection {
    pub vendor: String,
    pub model: String,
    pub vram: String,
    pub driver_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSection {
    pub device_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub vendor: String,
    pub model: String,
    pub serial_number: String,
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoSection {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub serial_number: String,
    pub uuid: String,
}

/// Battery record, or the locale's "no battery" string on machines without one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatterySection {
    Present(BatteryStatus),
    Absent(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryStatus {
    pub is_charging: bool,
    pub battery_level: String,
    pub remaining_time: String,
    pub cycle_count: u32,
    pub health_status: String,
}

/// Build the hardware report from gathered facts
pub fn normalize_hardware(facts: &HardwareFacts, labels: &Labels) -> HardwareReport {
    HardwareReport {
        cpu: cpu_section(&facts.cpu),
        memory: memory_section(&facts.memory),
        graphics: facts
            .graphics
            .controllers
            .iter()
            .map(|gpu| graphics_section(gpu, labels))
            .collect(),
        storage_devices: facts.storage.iter().map(storage_section).collect(),
        system_info: system_info_section(&facts.system),
        battery: battery_section(&facts.battery, labels),
    }
}

fn cpu_section(cpu: &CpuFacts) -> CpuSection {
    CpuSection {
        manufacturer: cpu.manufacturer.clone(),
        brand: cpu.brand.clone(),
        model: cpu.model.clone(),
        cores: cpu.physical_cores,
        threads: cpu.logical_cores,
        base_frequency: ghz(cpu.speed_ghz),
        max_frequency: ghz(cpu.speed_max_ghz),
        cache: CacheSection {
            l1_data: cpu.cache.l1d,
            l1_instruction: cpu.cache.l1i,
            l2: cpu.cache.l2,
            l3: cpu.cache.l3,
        },
    }
}

fn memory_section(mem: &MemoryFacts) -> MemorySection {
    MemorySection {
        total_capacity: gib_rounded(mem.total),
        available_capacity: gib_rounded(mem.available),
        used_capacity: gib_rounded(mem.used),
        usage_rate: ratio_percent(mem.used, mem.total),
    }
}

fn graphics_section(gpu: &GpuController, labels: &Labels) -> GraphicsSection {
    GraphicsSection {
        vendor: gpu.vendor.clone(),
        model: gpu.model.clone(),
        vram: match gpu.vram_mb {
            Some(mb) if mb > 0 => format!("{}MB", mb),
            _ => labels.unknown.to_string(),
        },
        driver_version: gpu.driver_version.clone(),
    }
}

fn storage_section(device: &BlockDevice) -> StorageSection {
    StorageSection {
        device_name: device.name.clone(),
        kind: device.kind.clone(),
        size: gib_fixed(device.size),
        vendor: device.vendor.clone(),
        model: device.model.clone(),
        serial_number: device.serial.clone(),
        removable: device.removable,
    }
}

fn system_info_section(system: &SystemIdentity) -> SystemInfoSection {
    SystemInfoSection {
        manufacturer: system.manufacturer.clone(),
        model: system.model.clone(),
        version: system.version.clone(),
        serial_number: system.serial.clone(),
        uuid: system.uuid.clone(),
    }
}

fn battery_section(battery: &BatteryFacts, labels: &Labels) -> BatterySection {
    if !battery.has_battery {
        return BatterySection::Absent(labels.no_battery.to_string());
    }

    BatterySection::Present(BatteryStatus {
        is_charging: battery.is_charging,
        battery_level: format!("{}%", battery.percent),
        remaining_time: match battery.time_remaining_secs {
            Some(secs) if secs > 0 => labels.minutes(secs / 60),
            _ => labels.unknown.to_string(),
        },
        cycle_count: battery.cycle_count,
        health_status: format!("{}%", battery.max_capacity_percent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::testing::{StubProvider, GIB};

    fn typical_facts() -> HardwareFacts {
        let stub = StubProvider::typical();
        HardwareFacts {
            cpu: stub.cpu,
            memory: stub.memory,
            graphics: stub.graphics,
            storage: stub.block_devices,
            system: stub.system,
            battery: stub.battery,
        }
    }

    fn en() -> &'static Labels {
        Locale::En.labels()
    }

    #[test]
    fn test_memory_uses_whole_gigabytes() {
        let report = normalize_hardware(&typical_facts(), en());
        assert_eq!(report.memory.total_capacity, "8GB");
        assert_eq!(report.memory.used_capacity, "4GB");
        assert_eq!(report.memory.available_capacity, "4GB");
        assert_eq!(report.memory.usage_rate, "50.0%");
    }

    #[test]
    fn test_zero_memory_total_is_guarded() {
        let mut facts = typical_facts();
        facts.memory = MemoryFacts::default();
        let report = normalize_hardware(&facts, en());
        assert_eq!(report.memory.usage_rate, "0%");
        assert_eq!(report.memory.total_capacity, "0GB");
    }

    #[test]
    fn test_cpu_section() {
        let report = normalize_hardware(&typical_facts(), en());
        assert_eq!(report.cpu.manufacturer, "Intel");
        assert_eq!(report.cpu.cores, 6);
        assert_eq!(report.cpu.threads, 12);
        assert_eq!(report.cpu.base_frequency, "2.6GHz");
        assert_eq!(report.cpu.max_frequency, "5GHz");
        assert_eq!(report.cpu.cache.l3, 12 * 1024 * 1024);
    }

    #[test]
    fn test_graphics_vram() {
        let report = normalize_hardware(&typical_facts(), en());
        assert_eq!(report.graphics.len(), 2);
        assert_eq!(report.graphics[0].vram, "4096MB");
        assert_eq!(report.graphics[1].vram, "Unknown");

        let mut facts = typical_facts();
        facts.graphics.controllers[0].vram_mb = Some(0);
        let report = normalize_hardware(&facts, Locale::Zh.labels());
        assert_eq!(report.graphics[0].vram, "未知");
    }

    #[test]
    fn test_storage_uses_two_decimal_gigabytes() {
        let mut facts = typical_facts();
        facts.storage[0].size = 256 * GIB;
        let report = normalize_hardware(&facts, en());
        let disk = &report.storage_devices[0];
        assert_eq!(disk.size, "256.00GB");
        assert_eq!(disk.device_name, "nvme0n1");
        assert_eq!(disk.kind, "disk");
        assert_eq!(disk.serial_number, "S4GXNF0N123456");
        assert!(!disk.removable);
    }

    #[test]
    fn test_battery_remaining_minutes() {
        let report = normalize_hardware(&typical_facts(), en());
        match report.battery {
            BatterySection::Present(status) => {
                assert_eq!(status.remaining_time, "2 minutes");
                assert_eq!(status.battery_level, "87%");
                assert_eq!(status.health_status, "95%");
                assert_eq!(status.cycle_count, 42);
                assert!(!status.is_charging);
            }
            BatterySection::Absent(s) => panic!("battery reported absent: {}", s),
        }
    }

    #[test]
    fn test_battery_unknown_remaining_time() {
        for remaining in [None, Some(0)] {
            let mut facts = typical_facts();
            facts.battery.time_remaining_secs = remaining;
            let report = normalize_hardware(&facts, en());
            let BatterySection::Present(status) = report.battery else {
                panic!("battery reported absent");
            };
            assert_eq!(status.remaining_time, "Unknown");
        }
    }

    #[test]
    fn test_absent_battery_is_sentinel_only() {
        let mut facts = typical_facts();
        facts.battery.has_battery = false;

        let report = normalize_hardware(&facts, en());
        assert_eq!(
            report.battery,
            BatterySection::Absent("No battery".to_string())
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["battery"], serde_json::json!("No battery"));
    }

    #[test]
    fn test_formatted_fields_carry_units() {
        let json = serde_json::to_value(normalize_hardware(&typical_facts(), en())).unwrap();

        for field in ["totalCapacity", "availableCapacity", "usedCapacity"] {
            assert!(json["memory"][field].as_str().unwrap().ends_with("GB"));
        }
        assert!(json["memory"]["usageRate"].as_str().unwrap().ends_with('%'));
        for field in ["baseFrequency", "maxFrequency"] {
            assert!(json["CPU"][field].as_str().unwrap().ends_with("GHz"));
        }
        for disk in json["storageDevices"].as_array().unwrap() {
            assert!(disk["size"].as_str().unwrap().ends_with("GB"));
        }
        for gpu in json["graphics"].as_array().unwrap() {
            let vram = gpu["vram"].as_str().unwrap();
            assert!(vram.ends_with("MB") || vram == "Unknown");
        }
    }

    #[test]
    fn test_field_order_and_names() {
        let json = serde_json::to_value(normalize_hardware(&typical_facts(), en())).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        let expected = [
            "CPU",
            "memory",
            "graphics",
            "storageDevices",
            "systemInfo",
            "battery",
        ];
        assert_eq!(keys, expected);

        let cache: Vec<&String> = json["CPU"]["cache"].as_object().unwrap().keys().collect();
        assert_eq!(cache, ["l1Data", "l1Instruction", "l2", "l3"]);
    }
}
