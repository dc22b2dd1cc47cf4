//! Block device collection
//!
//! Whole disks come from `/sys/block`; when that is unavailable, mounted
//! disks reported by sysinfo are used instead.

use std::path::Path;

use sysinfo::{DiskKind, Disks};

use crate::error::ProviderError;
use crate::info::{pci_vendor_name, read_number, read_trimmed};
use crate::types::BlockDevice;

const SYS_BLOCK: &str = "/sys/block";

/// Sector unit of `/sys/block/*/size`, independent of the device's real sector size
const SYSFS_SECTOR_BYTES: u64 = 512;

/// Get block devices, sorted by name
pub fn get_block_devices() -> Result<Vec<BlockDevice>, ProviderError> {
    let root = Path::new(SYS_BLOCK);
    if root.is_dir() {
        return scan_sys_block(root);
    }
    Ok(from_sysinfo_disks())
}

fn scan_sys_block(root: &Path) -> Result<Vec<BlockDevice>, ProviderError> {
    let entries =
        std::fs::read_dir(root).map_err(|e| ProviderError::io(root.display().to_string(), e))?;

    let mut devices: Vec<BlockDevice> = entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if is_virtual_device(&name) {
                return None;
            }
            Some(read_block_device(&entry.path(), name))
        })
        .filter(|device| device.size > 0)
        .collect();

    devices.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(devices)
}

/// Loop, RAM and compressed-RAM devices are not storage hardware
fn is_virtual_device(name: &str) -> bool {
    ["loop", "ram", "zram", "nbd"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

fn read_block_device(dir: &Path, name: String) -> BlockDevice {
    let device = dir.join("device");
    let sectors = read_number::<u64>(dir.join("size")).unwrap_or(0);

    BlockDevice {
        name,
        kind: "disk".to_string(),
        size: sectors * SYSFS_SECTOR_BYTES,
        vendor: read_trimmed(device.join("vendor"))
            .map(|vendor| pci_vendor_name(&vendor).to_string())
            .unwrap_or_default(),
        model: read_trimmed(device.join("model")).unwrap_or_default(),
        serial: read_trimmed(device.join("serial"))
            .or_else(|| read_trimmed(dir.join("serial")))
            .unwrap_or_default(),
        removable: read_trimmed(dir.join("removable")).as_deref() == Some("1"),
    }
}

fn from_sysinfo_disks() -> Vec<BlockDevice> {
    let disks = Disks::new_with_refreshed_list();

    let mut devices: Vec<BlockDevice> = disks
        .iter()
        .map(|disk| BlockDevice {
            name: disk.name().to_string_lossy().to_string(),
            kind: match disk.kind() {
                DiskKind::HDD => "HDD".to_string(),
                DiskKind::SSD => "SSD".to_string(),
                DiskKind::Unknown(_) => "disk".to_string(),
            },
            size: disk.total_space(),
            vendor: String::new(),
            model: String::new(),
            serial: String::new(),
            removable: disk.is_removable(),
        })
        .collect();

    devices.sort_by(|a, b| a.name.cmp(&b.name));
    devices
}
