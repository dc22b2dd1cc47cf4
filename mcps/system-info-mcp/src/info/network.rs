//! Network interface collection

use std::net::IpAddr;
use std::path::Path;

use sysinfo::Networks;

use crate::error::ProviderError;
use crate::info::{read_number, read_trimmed};
use crate::types::NetworkInterfaceFacts;

const SYS_NET: &str = "/sys/class/net";

/// Get all network interfaces, sorted by name, including internal ones
pub fn get_network_interfaces() -> Result<Vec<NetworkInterfaceFacts>, ProviderError> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<NetworkInterfaceFacts> = networks
        .iter()
        .map(|(name, data)| {
            let addrs: Vec<IpAddr> = data.ip_networks().iter().map(|ip| ip.addr).collect();
            let sys_dir = Path::new(SYS_NET).join(name);

            NetworkInterfaceFacts {
                iface: name.clone(),
                mac: data.mac_address().to_string(),
                ip4: first_matching(&addrs, IpAddr::is_ipv4),
                ip6: first_matching(&addrs, IpAddr::is_ipv6),
                kind: interface_kind(&sys_dir),
                speed_mbps: read_number::<i64>(sys_dir.join("speed"))
                    .filter(|mbps| *mbps > 0)
                    .map(|mbps| mbps as f64),
                operstate: read_trimmed(sys_dir.join("operstate"))
                    .unwrap_or_else(|| "unknown".to_string()),
                internal: is_internal(name, &addrs),
            }
        })
        .collect();

    interfaces.sort_by(|a, b| a.iface.cmp(&b.iface));
    Ok(interfaces)
}

fn first_matching(addrs: &[IpAddr], pred: fn(&IpAddr) -> bool) -> String {
    addrs
        .iter()
        .find(|a| pred(*a))
        .map(|a| a.to_string())
        .unwrap_or_default()
}

/// Loopback by name, or every assigned address is a loopback address
fn is_internal(name: &str, addrs: &[IpAddr]) -> bool {
    name == "lo"
        || name.starts_with("lo0")
        || (!addrs.is_empty() && addrs.iter().all(IpAddr::is_loopback))
}

fn interface_kind(sys_dir: &Path) -> String {
    let kind = if !sys_dir.is_dir() {
        "unknown"
    } else if sys_dir.join("wireless").exists() || sys_dir.join("phy80211").exists() {
        "wireless"
    } else if sys_dir.join("device").exists() {
        "wired"
    } else {
        "virtual"
    };
    kind.to_string()
}
