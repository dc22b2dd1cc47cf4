//! System identity collection
//!
//! Firmware (DMI/SMBIOS) identity from `/sys/class/dmi/id`; boards without
//! DMI fall back to the device-tree model. Serial numbers are usually
//! readable by root only and come back empty otherwise.

use std::path::Path;

use crate::error::ProviderError;
use crate::info::read_trimmed;
use crate::types::SystemIdentity;

const DMI_ROOT: &str = "/sys/class/dmi/id";
const DEVICE_TREE_MODEL: &str = "/proc/device-tree/model";

/// Get manufacturer, model, version, serial and UUID of the machine
pub fn get_system_identity() -> Result<SystemIdentity, ProviderError> {
    let mut identity = read_dmi(Path::new(DMI_ROOT));
    if identity.model.is_empty() {
        if let Some(model) = read_trimmed(DEVICE_TREE_MODEL) {
            identity.model = model;
        }
    }
    Ok(identity)
}

fn read_dmi(root: &Path) -> SystemIdentity {
    let field = |name: &str| read_trimmed(root.join(name)).unwrap_or_default();

    SystemIdentity {
        manufacturer: field("sys_vendor"),
        model: field("product_name"),
        version: field("product_version"),
        serial: field("product_serial"),
        uuid: field("product_uuid").to_lowercase(),
    }
}
