//! Battery collection from `/sys/class/power_supply`

use std::path::{Path, PathBuf};

use crate::error::ProviderError;
use crate::info::{read_number, read_trimmed};
use crate::types::BatteryFacts;

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Get the state of the first system battery
///
/// Machines without one report `has_battery: false`; that is not an error.
pub fn get_battery_facts() -> Result<BatteryFacts, ProviderError> {
    Ok(find_system_battery(Path::new(POWER_SUPPLY_ROOT))
        .map(|dir| read_battery(&dir))
        .unwrap_or_default())
}

/// First supply of type `Battery` that powers the system (not a mouse or headset)
fn find_system_battery(root: &Path) -> Option<PathBuf> {
    let mut supplies: Vec<PathBuf> = std::fs::read_dir(root)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| read_trimmed(p.join("type")).as_deref() == Some("Battery"))
        .filter(|p| read_trimmed(p.join("scope")).as_deref() != Some("Device"))
        .collect();
    supplies.sort();
    supplies.into_iter().next()
}

fn read_battery(dir: &Path) -> BatteryFacts {
    let status = read_trimmed(dir.join("status")).unwrap_or_default();
    let number = |name: &str| read_number::<f64>(dir.join(name));

    // Some drivers report energy (µWh/µW), others charge (µAh/µA)
    let (now, full, design, rate) = match number("energy_now") {
        Some(energy_now) => (
            Some(energy_now),
            number("energy_full"),
            number("energy_full_design"),
            number("power_now"),
        ),
        None => (
            number("charge_now"),
            number("charge_full"),
            number("charge_full_design"),
            number("current_now"),
        ),
    };

    let percent = number("capacity")
        .or_else(|| match (now, full) {
            (Some(now), Some(full)) if full > 0.0 => Some((now / full * 100.0).round()),
            _ => None,
        })
        .unwrap_or(0.0);

    let max_capacity_percent = match (full, design) {
        (Some(full), Some(design)) if design > 0.0 => (full / design * 100.0).round(),
        _ => 100.0,
    };

    let time_remaining_secs = if status == "Discharging" {
        match (now, rate) {
            (Some(now), Some(rate)) if rate > 0.0 => Some((now / rate * 3600.0).round() as u64),
            _ => None,
        }
    } else {
        None
    };

    BatteryFacts {
        has_battery: true,
        is_charging: status == "Charging",
        percent,
        time_remaining_secs,
        cycle_count: read_number::<u32>(dir.join("cycle_count")).unwrap_or(0),
        max_capacity_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_supply(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for (file, value) in files {
            std::fs::write(dir.join(file), format!("{}\n", value)).unwrap();
        }
    }

    #[test]
    fn test_no_battery_when_only_mains() {
        let root = std::env::temp_dir().join(format!("psu-mains-{}", std::process::id()));
        write_supply(&root, "AC", &[("type", "Mains"), ("online", "1")]);

        assert!(find_system_battery(&root).is_none());
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_discharging_energy_battery() {
        let root = std::env::temp_dir().join(format!("psu-bat-{}", std::process::id()));
        write_supply(&root, "AC", &[("type", "Mains")]);
        write_supply(
            &root,
            "hid-mouse-battery",
            &[("type", "Battery"), ("scope", "Device"), ("capacity", "40")],
        );
        write_supply(
            &root,
            "BAT0",
            &[
                ("type", "Battery"),
                ("status", "Discharging"),
                ("capacity", "75"),
                ("energy_now", "30000000"),
                ("energy_full", "40000000"),
                ("energy_full_design", "50000000"),
                ("power_now", "10000000"),
                ("cycle_count", "123"),
            ],
        );

        let dir = find_system_battery(&root).unwrap();
        assert!(dir.ends_with("BAT0"));

        let battery = read_battery(&dir);
        assert!(battery.has_battery);
        assert!(!battery.is_charging);
        assert_eq!(battery.percent, 75.0);
        assert_eq!(battery.max_capacity_percent, 80.0);
        assert_eq!(battery.time_remaining_secs, Some(3 * 3600));
        assert_eq!(battery.cycle_count, 123);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_charging_battery_has_no_remaining_time() {
        let root = std::env::temp_dir().join(format!("psu-chg-{}", std::process::id()));
        write_supply(
            &root,
            "BAT1",
            &[
                ("type", "Battery"),
                ("status", "Charging"),
                ("charge_now", "2000000"),
                ("charge_full", "4000000"),
                ("current_now", "1000000"),
            ],
        );

        let battery = read_battery(&root.join("BAT1"));
        assert!(battery.is_charging);
        assert_eq!(battery.percent, 50.0);
        assert_eq!(battery.time_remaining_secs, None);
        assert_eq!(battery.max_capacity_percent, 100.0);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
