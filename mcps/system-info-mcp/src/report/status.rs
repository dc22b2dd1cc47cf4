//! Live system status report

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use super::units::{gib_fixed, percent, ratio_percent};
use crate::aggregate::StatusFacts;
use crate::locale::Labels;
use crate::types::{LoadFacts, MemoryFacts, NetworkInterfaceFacts};

/// Normalized point-in-time system status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusReport {
    pub operating_system: OperatingSystemSection,
    pub cpu_usage: CpuUsageSection,
    pub memory_usage: MemoryUsageSection,
    pub network_interfaces: Vec<NetworkInterfaceSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystemSection {
    pub platform: String,
    pub distribution: String,
    pub release: String,
    pub architecture: String,
    pub hostname: String,
    pub kernel: String,
    pub boot_time: String,
    pub uptime: String,
    pub current_time: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuUsageSection {
    pub total_usage: String,
    pub user_processes: String,
    pub system_processes: String,
    pub idle: String,
}

/// Memory usage in gigabytes with two decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsageSection {
    pub total_capacity: String,
    pub used_capacity: String,
    pub available_capacity: String,
    pub usage_rate: String,
    pub swap_memory: SwapSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSection {
    pub total_capacity: String,
    pub used_capacity: String,
    pub usage_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceSection {
    pub interface_name: String,
    pub mac_address: String,
    pub ipv4_address: String,
    pub ipv6_address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub speed: String,
    pub status: String,
}

/// Build the status report from gathered facts
///
/// `now` is the moment the report describes; boot time is derived from it
/// and the uptime.
pub fn normalize_status<Tz>(
    facts: &StatusFacts,
    labels: &Labels,
    now: &DateTime<Tz>,
) -> SystemStatusReport
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let uptime = facts.time.uptime_secs;
    let boot_time = i64::try_from(uptime)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|up| now.clone().checked_sub_signed(up))
        .unwrap_or_else(|| now.clone());

    SystemStatusReport {
        operating_system: OperatingSystemSection {
            platform: facts.os.platform.clone(),
            distribution: facts.os.distro.clone(),
            release: facts.os.release.clone(),
            architecture: facts.os.arch.clone(),
            hostname: facts.os.hostname.clone(),
            kernel: facts.os.kernel.clone(),
            boot_time: labels.datetime(&boot_time),
            uptime: labels.uptime(uptime / 3600, (uptime % 3600) / 60),
            current_time: labels.datetime(now),
            timezone: facts.time.timezone.clone(),
        },
        cpu_usage: cpu_usage_section(&facts.load),
        memory_usage: memory_usage_section(&facts.memory),
        network_interfaces: facts
            .network
            .iter()
            .filter(|iface| !iface.internal)
            .map(|iface| network_section(iface, labels))
            .collect(),
    }
}

fn cpu_usage_section(load: &LoadFacts) -> CpuUsageSection {
    CpuUsageSection {
        total_usage: percent(load.current),
        user_processes: percent(load.user),
        system_processes: percent(load.system),
        idle: percent(load.idle),
    }
}

fn memory_usage_section(mem: &MemoryFacts) -> MemoryUsageSection {
    MemoryUsageSection {
        total_capacity: gib_fixed(mem.total),
        used_capacity: gib_fixed(mem.used),
        available_capacity: gib_fixed(mem.available),
        usage_rate: ratio_percent(mem.used, mem.total),
        swap_memory: SwapSection {
            total_capacity: gib_fixed(mem.swap_total),
            used_capacity: gib_fixed(mem.swap_used),
            usage_rate: ratio_percent(mem.swap_used, mem.swap_total),
        },
    }
}

fn network_section(iface: &NetworkInterfaceFacts, labels: &Labels) -> NetworkInterfaceSection {
    NetworkInterfaceSection {
        interface_name: iface.iface.clone(),
        mac_address: iface.mac.clone(),
        ipv4_address: iface.ip4.clone(),
        ipv6_address: iface.ip6.clone(),
        kind: iface.kind.clone(),
        speed: match iface.speed_mbps {
            Some(mbps) if mbps > 0.0 => format!("{}Mbps", mbps),
            _ => labels.unknown.to_string(),
        },
        status: iface.operstate.clone(),
    }
}
