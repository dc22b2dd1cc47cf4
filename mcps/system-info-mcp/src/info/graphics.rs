//! Graphics controller collection
//!
//! Reads DRM cards from `/sys/class/drm`. Hosts without DRM (containers,
//! non-Linux) report an empty controller list.

use std::path::Path;

use crate::error::ProviderError;
use crate::info::{pci_vendor_name, read_number, read_trimmed};
use crate::types::{GpuController, GraphicsFacts};

const DRM_ROOT: &str = "/sys/class/drm";

/// Get all graphics controllers
pub fn get_graphics_facts() -> Result<GraphicsFacts, ProviderError> {
    Ok(GraphicsFacts {
        controllers: scan_drm(Path::new(DRM_ROOT)),
    })
}

fn scan_drm(root: &Path) -> Vec<GpuController> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut cards: Vec<_> = entries
        .flatten()
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            is_card_node(&name).then(|| (name, e.path()))
        })
        .collect();
    cards.sort_by(|a, b| a.0.cmp(&b.0));

    cards
        .into_iter()
        .filter_map(|(_, path)| read_controller(&path.join("device")))
        .collect()
}

/// `card0`, `card1`, ... but not connectors such as `card0-HDMI-A-1`
fn is_card_node(name: &str) -> bool {
    name.strip_prefix("card")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

fn read_controller(device: &Path) -> Option<GpuController> {
    let vendor_id = read_trimmed(device.join("vendor"))?;
    let device_id = read_trimmed(device.join("device")).unwrap_or_default();
    let driver = uevent_value(device, "DRIVER");

    let driver_version = driver
        .as_deref()
        .and_then(|d| read_trimmed(Path::new("/sys/module").join(d).join("version")))
        .or(driver)
        .unwrap_or_default();

    let vram_mb = read_number::<u64>(device.join("mem_info_vram_total"))
        .map(|bytes| bytes / (1024 * 1024))
        .filter(|mb| *mb > 0);

    Some(GpuController {
        vendor: pci_vendor_name(&vendor_id).to_string(),
        model: read_trimmed(device.join("label"))
            .unwrap_or_else(|| format!("PCI device {}", device_id)),
        vram_mb,
        driver_version,
    })
}

/// Look up `KEY=value` in the device's uevent file
fn uevent_value(device: &Path, key: &str) -> Option<String> {
    let uevent = std::fs::read_to_string(device.join("uevent")).ok()?;
    uevent.lines().find_map(|line| {
        line.split_once('=')
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.trim().to_string())
    })
}
