//! CPU information collection

use std::path::Path;

use sysinfo::System;

use crate::error::ProviderError;
use crate::info::{read_number, read_trimmed};
use crate::types::{CpuCache, CpuFacts};

const CPU0_SYSFS: &str = "/sys/devices/system/cpu/cpu0";

/// Get CPU identity, topology, clocks and cache sizes
pub fn get_cpu_facts() -> Result<CpuFacts, ProviderError> {
    let mut sys = System::new();
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    let first_cpu = cpus
        .first()
        .ok_or_else(|| ProviderError::Unsupported("no CPUs reported".to_string()))?;

    let vendor_id = first_cpu.vendor_id().to_string();
    let brand = first_cpu.brand().trim().to_string();
    let speed_ghz = mhz_to_ghz(first_cpu.frequency());

    let cpufreq = Path::new(CPU0_SYSFS).join("cpufreq");
    let speed_max_ghz = read_number::<u64>(cpufreq.join("cpuinfo_max_freq"))
        .map(|khz| mhz_to_ghz(khz / 1000))
        .unwrap_or(speed_ghz);

    Ok(CpuFacts {
        manufacturer: manufacturer_from_vendor(&vendor_id, &brand),
        model: cpuinfo_model().unwrap_or_else(|| brand.clone()),
        brand,
        physical_cores: sys.physical_core_count().unwrap_or(cpus.len()),
        logical_cores: cpus.len(),
        speed_ghz,
        speed_max_ghz,
        cache: read_cache_sizes(&Path::new(CPU0_SYSFS).join("cache")),
    })
}

/// MHz to GHz, kept to two decimals
fn mhz_to_ghz(mhz: u64) -> f64 {
    (mhz as f64 / 10.0).round() / 100.0
}

fn manufacturer_from_vendor(vendor_id: &str, brand: &str) -> String {
    match vendor_id {
        "GenuineIntel" => "Intel".to_string(),
        "AuthenticAMD" => "AMD".to_string(),
        "CentaurHauls" => "VIA".to_string(),
        "HygonGenuine" => "Hygon".to_string(),
        "" => brand
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        other => other.to_string(),
    }
}

/// The `model` number from /proc/cpuinfo (x86 family model)
fn cpuinfo_model() -> Option<String> {
    let cpuinfo = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    cpuinfo
        .lines()
        .find(|l| l.starts_with("model") && !l.starts_with("model name"))
        .and_then(|l| l.split(':').nth(1))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Walk `cache/index*` under a CPU's sysfs directory
fn read_cache_sizes(cache_dir: &Path) -> CpuCache {
    let mut cache = CpuCache::default();
    let Ok(entries) = std::fs::read_dir(cache_dir) else {
        return cache;
    };

    for entry in entries.flatten() {
        let dir = entry.path();
        let is_index = dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("index"));
        if !is_index {
            continue;
        }

        let level = read_number::<u8>(dir.join("level"));
        let kind = read_trimmed(dir.join("type")).unwrap_or_default();
        let Some(size) = read_trimmed(dir.join("size")).and_then(|s| parse_cache_size(&s)) else {
            continue;
        };

        match (level, kind.as_str()) {
            (Some(1), "Data") => cache.l1d = size,
            (Some(1), "Instruction") => cache.l1i = size,
            (Some(2), _) => cache.l2 = size,
            (Some(3), _) => cache.l3 = size,
            _ => {}
        }
    }

    cache
}

/// Parse sysfs cache sizes such as "32K", "1024K" or "8M" into bytes
fn parse_cache_size(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.chars().last()? {
        'K' | 'k' => (&raw[..raw.len() - 1], 1024),
        'M' | 'm' => (&raw[..raw.len() - 1], 1024 * 1024),
        'G' | 'g' => (&raw[..raw.len() - 1], 1024 * 1024 * 1024),
        _ => (raw, 1),
    };
    digits.trim().parse::<u64>().ok().map(|n| n * multiplier)
}
