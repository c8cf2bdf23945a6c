// Wire-shape models for the network configuration service.
//
// These mirror the backend's JSON payloads verbatim: addresses and route
// destinations are still `address/prefix-or-netmask` strings, device type
// is a raw integer code, and security is raw bitmasks. Translation into
// domain types happens in `netstage-core`, never here.
//
// Records the backend may extend carry a `#[serde(flatten)]` catch-all so
// unknown fields survive a read-modify-write cycle untouched.

use serde::{Deserialize, Serialize};

// ── Routes & IP configuration ────────────────────────────────────────

/// A single route entry from a `routes4`/`routes6` collection.
///
/// `destination` is the raw `"ip/prefix-or-netmask"` wire string. The
/// address family is implied by which collection the route came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRoute {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    /// Catch-all for backend fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// IP configuration block embedded in a device payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireIpConfig {
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes4: Option<Vec<WireRoute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes6: Option<Vec<WireRoute>>,
}

// ── Device ───────────────────────────────────────────────────────────

/// Device object from `GET /network/devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDevice {
    pub iface: String,
    /// Raw device-type code (0=loopback, 1=ethernet, 2=wireless, 3=dummy, 4=bond).
    #[serde(rename = "type")]
    pub device_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_config: Option<WireIpConfig>,
    /// Catch-all for backend fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Connection ───────────────────────────────────────────────────────

/// Wireless settings block on a connection. Its presence marks the
/// connection as wireless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWireless {
    #[serde(default)]
    pub ssid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Bond settings block on a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBond {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default)]
    pub ports: Vec<String>,
}

/// VLAN settings block on a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,
}

/// Connection object from `GET /network/connections`.
///
/// Unlike devices, connections carry their IP fields inline rather than in
/// a nested `ipConfig` block. The `wireless`/`bond`/`vlan` blocks double as
/// type markers; the backend's own `type` hint, if any, lands in `extra`
/// and is never trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConnection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iface: Option<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes4: Option<Vec<WireRoute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes6: Option<Vec<WireRoute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireless: Option<WireWireless>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond: Option<WireBond>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<WireVlan>,
    /// Catch-all for backend fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Access point ─────────────────────────────────────────────────────

/// Access point object from `GET /network/wifi`.
///
/// Security is raw 802.11 bitmasks here; decoding them into protocols is a
/// domain concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireAccessPoint {
    pub ssid: String,
    pub hw_address: String,
    #[serde(default)]
    pub strength: u8,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub wpa_flags: u32,
    #[serde(default)]
    pub rsn_flags: u32,
}

// ── Settings ─────────────────────────────────────────────────────────

/// General network state from `GET /network/settings`.
///
/// Everything is defaulted so the zero value doubles as the "unreachable
/// backend" fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub networking_enabled: bool,
    #[serde(default)]
    pub wireless_enabled: bool,
    #[serde(default)]
    pub connectivity: bool,
}
