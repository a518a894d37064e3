// SPDX-License-Identifier: MIT

//! Exposition text synthesis
//!
//! Assembles the Prometheus text body for one full inventory: HELP/TYPE
//! headers, one rx/tx line pair per active interface, and the device total.

use serde_json::Value;

use crate::genieacs::extract_stats;

const HEADER: &str = "\
# HELP genieacs_rx_bytes RX bytes\n\
# TYPE genieacs_rx_bytes counter\n\
# HELP genieacs_tx_bytes TX bytes\n\
# TYPE genieacs_tx_bytes counter\n";

/// Renders the full exposition body for one collection cycle
pub fn render_inventory(devices: &[Value]) -> String {
    let mut out = String::from(HEADER);

    for device in devices {
        let device_id = device
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let device_id = escape_label_value(device_id);

        for stat in extract_stats(device) {
            let iface = escape_label_value(&stat.iface);
            out.push_str(&format!(
                "genieacs_rx_bytes{{device=\"{}\",iface=\"{}\"}} {}\n",
                device_id, iface, stat.rx_bytes
            ));
            out.push_str(&format!(
                "genieacs_tx_bytes{{device=\"{}\",iface=\"{}\"}} {}\n",
                device_id, iface, stat.tx_bytes
            ));
        }
    }

    out.push_str("# HELP genieacs_devices_total Number of devices in inventory\n");
    out.push_str("# TYPE genieacs_devices_total gauge\n");
    out.push_str(&format!("genieacs_devices_total {}\n", devices.len()));
    out
}

/// Escapes a label value per the exposition format rules.
///
/// Device identifiers come from the external API and may contain anything;
/// unescaped quotes or backslashes would break the line for the scraper.
pub fn escape_label_value(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ppp_device(id: &str, rx: u64, tx: u64) -> Value {
        json!({
            "_id": id,
            "InternetGatewayDevice": {
                "WANDevice": {"1": {"WANConnectionDevice": {"1": {
                    "WANPPPConnection": {"1": {"Stats": {
                        "TotalBytesReceived": {"_value": rx},
                        "TotalBytesSent": {"_value": tx},
                    }}}
                }}}}
            }
        })
    }

    #[test]
    fn test_render_active_and_idle_devices() {
        // One device with PPP traffic, one with all-zero stats: the idle
        // device contributes no stat lines but still counts toward the total.
        let devices = vec![ppp_device("cpe-a", 500, 600), ppp_device("cpe-b", 0, 0)];
        let body = render_inventory(&devices);

        let rx_lines: Vec<&str> = body
            .lines()
            .filter(|l| l.starts_with("genieacs_rx_bytes{"))
            .collect();
        assert_eq!(rx_lines.len(), 1);
        assert_eq!(
            rx_lines[0],
            "genieacs_rx_bytes{device=\"cpe-a\",iface=\"ppp\"} 500"
        );
        assert!(body.contains("genieacs_tx_bytes{device=\"cpe-a\",iface=\"ppp\"} 600"));
        assert!(body.contains("genieacs_devices_total 2\n"));
    }

    #[test]
    fn test_render_empty_inventory() {
        let body = render_inventory(&[]);
        assert!(body.starts_with("# HELP genieacs_rx_bytes"));
        assert!(body.contains("genieacs_devices_total 0\n"));
        assert!(!body.contains("genieacs_rx_bytes{"));
    }

    #[test]
    fn test_render_device_without_id() {
        let mut device = ppp_device("x", 1, 2);
        device.as_object_mut().unwrap().remove("_id");
        let body = render_inventory(&[device]);
        assert!(body.contains("device=\"unknown\""));
    }

    #[test]
    fn test_untrusted_device_id_is_escaped() {
        let device = ppp_device("bad\"id\\1\nx", 1, 2);
        let body = render_inventory(&[device]);
        assert!(body.contains("device=\"bad\\\"id\\\\1\\nx\""));
    }

    #[test]
    fn test_escape_label_value() {
        assert_eq!(escape_label_value("plain"), "plain");
        assert_eq!(escape_label_value("a\"b"), "a\\\"b");
        assert_eq!(escape_label_value("a\\b"), "a\\\\b");
        assert_eq!(escape_label_value("a\nb"), "a\\nb");
    }

    #[test]
    fn test_render_wlan_slots() {
        let device = json!({
            "_id": "cpe-w",
            "InternetGatewayDevice": {"LANDevice": {"1": {"WLANConfiguration": {
                "1": {"Stats": {"TotalBytesReceived": {"_value": 7}, "TotalBytesSent": {"_value": 8}}},
                "2": {"Stats": {"TotalBytesReceived": {"_value": 9}, "TotalBytesSent": {"_value": 10}}},
            }}}}
        });
        let body = render_inventory(&[device]);
        assert!(body.contains("genieacs_rx_bytes{device=\"cpe-w\",iface=\"wlan1\"} 7"));
        assert!(body.contains("genieacs_rx_bytes{device=\"cpe-w\",iface=\"wlan2\"} 9"));
    }
}
