//! CPU load collection
//!
//! Load is a rate, so it needs two samples. On Linux the aggregate `cpu` line
//! of `/proc/stat` gives the user/system/idle split; elsewhere sysinfo's
//! global usage is used and attributed to user time.

use std::time::Duration;

use sysinfo::System;

use crate::error::ProviderError;
use crate::types::LoadFacts;

const PROC_STAT: &str = "/proc/stat";
const SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

/// Cumulative CPU time counters from one `/proc/stat` sample
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CpuTimes {
    user: u64,
    system: u64,
    idle: u64,
    total: u64,
}

/// Sample CPU load over a short window
pub async fn get_load_facts() -> Result<LoadFacts, ProviderError> {
    if let Some(first) = read_proc_stat() {
        tokio::time::sleep(SAMPLE_INTERVAL).await;
        let second = read_proc_stat().ok_or_else(|| {
            ProviderError::Other(format!("{} disappeared between samples", PROC_STAT))
        })?;
        return Ok(load_between(first, second));
    }

    let mut sys = System::new();
    sys.refresh_cpu_usage();
    tokio::time::sleep(SAMPLE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)).await;
    sys.refresh_cpu_usage();

    let usage = f64::from(sys.global_cpu_usage()).clamp(0.0, 100.0);
    Ok(LoadFacts {
        current: usage,
        user: usage,
        system: 0.0,
        idle: 100.0 - usage,
    })
}

fn read_proc_stat() -> Option<CpuTimes> {
    let stat = std::fs::read_to_string(PROC_STAT).ok()?;
    stat.lines().next().and_then(parse_cpu_line)
}

/// Parse the aggregate line: `cpu user nice system idle iowait irq softirq steal ...`
fn parse_cpu_line(line: &str) -> Option<CpuTimes> {
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }

    let values: Vec<u64> = fields.map(|f| f.parse().ok()).collect::<Option<_>>()?;
    if values.len() < 4 {
        return None;
    }

    let at = |i: usize| values.get(i).copied().unwrap_or(0);
    // guest and guest_nice (8, 9) are already counted in user and nice
    let total: u64 = values.iter().take(8).sum();

    Some(CpuTimes {
        user: at(0) + at(1),
        system: at(2) + at(5) + at(6),
        idle: at(3) + at(4),
        total,
    })
}

fn load_between(first: CpuTimes, second: CpuTimes) -> LoadFacts {
    let total = second.total.saturating_sub(first.total);
    if total == 0 {
        return LoadFacts {
            current: 0.0,
            user: 0.0,
            system: 0.0,
            idle: 100.0,
        };
    }

    let share = |a: u64, b: u64| b.saturating_sub(a) as f64 / total as f64 * 100.0;
    let idle = share(first.idle, second.idle);

    LoadFacts {
        current: 100.0 - idle,
        user: share(first.user, second.user),
        system: share(first.system, second.system),
        idle,
    }
}
