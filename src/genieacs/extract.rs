// SPDX-License-Identifier: MIT

//! Per-device interface counter extraction
//!
//! Walks the known TR-069 schema paths inside a device record and yields one
//! `(label, rx, tx)` tuple per interface that reported any traffic. The paths
//! are hard-coded knowledge of the inventory schema, not discovered.

use serde_json::Value;

use super::value::{counter, get_path};

/// Byte counters for a single device interface, valid for one cycle only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStat {
    /// Interface kind label: `ppp`, `ip` or `wlan<N>`
    pub iface: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

const WAN_DEVICE_PATH: &[&str] = &["InternetGatewayDevice", "WANDevice"];

const WLAN_CONFIG_PATH: &[&str] = &["InternetGatewayDevice", "LANDevice", "1", "WLANConfiguration"];

const WAN_CONNECTION_KINDS: [(&str, &str); 2] =
    [("WANPPPConnection", "ppp"), ("WANIPConnection", "ip")];

/// Extracts all interface byte counters from one device record.
///
/// Never panics: missing keys, wrong types and null values at any depth
/// skip the affected path. Interfaces whose rx and tx are both zero are
/// suppressed (report activity, not absence). Output order is stable:
/// WAN connections in instance-index order (`ppp` before `ip` within one
/// connection device), then WLAN slots in index order.
pub fn extract_stats(device: &Value) -> Vec<InterfaceStat> {
    let mut stats = Vec::new();

    // WANDevice, WANConnectionDevice and the connection nodes are all
    // collection nodes: iterate every sibling instance instead of
    // assuming index "1".
    if let Some(wan_devices) = get_path(device, WAN_DEVICE_PATH).and_then(Value::as_object) {
        for wan_device in wan_devices.values() {
            let Some(conn_devices) =
                get_path(wan_device, &["WANConnectionDevice"]).and_then(Value::as_object)
            else {
                continue;
            };
            for conn_device in conn_devices.values() {
                for (kind, label) in WAN_CONNECTION_KINDS {
                    let Some(conns) = get_path(conn_device, &[kind]).and_then(Value::as_object)
                    else {
                        continue;
                    };
                    for conn in conns.values() {
                        if let Some(node) = get_path(conn, &["Stats"]) {
                            push_if_active(&mut stats, label.to_string(), node);
                        }
                    }
                }
            }
        }
    }

    // Same for WLAN radio slots, labeled by their slot index.
    if let Some(slots) = get_path(device, WLAN_CONFIG_PATH).and_then(Value::as_object) {
        for (index, slot) in slots {
            if let Some(node) = get_path(slot, &["Stats"]) {
                push_if_active(&mut stats, format!("wlan{index}"), node);
            }
        }
    }

    stats
}

fn push_if_active(stats: &mut Vec<InterfaceStat>, iface: String, node: &Value) {
    if !node.is_object() {
        return;
    }
    // Some firmwares nest the counters one level deeper under Stats."1"
    let node = match node.get("1") {
        Some(inner) if inner.is_object() => inner,
        _ => node,
    };

    let rx = preferred_counter(node, "EthernetBytesReceived", "TotalBytesReceived");
    let tx = preferred_counter(node, "EthernetBytesSent", "TotalBytesSent");

    if rx != 0 || tx != 0 {
        stats.push(InterfaceStat {
            iface,
            rx_bytes: rx,
            tx_bytes: tx,
        });
    }
}

fn preferred_counter(node: &Value, ethernet_field: &str, total_field: &str) -> u64 {
    match counter(node, ethernet_field) {
        0 => counter(node, total_field),
        value => value,
    }
}
