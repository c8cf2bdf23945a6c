// ── Connection domain types ──

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::address::IpAddress;
use super::route::Route;

/// Semantic connection type, derived by the classifier — never trusted from
/// the wire payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Wireless,
    Bond,
    Vlan,
    Loopback,
    #[default]
    Ethernet,
}

/// Wireless configuration attached to a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirelessSettings {
    pub ssid: String,
    pub security: Option<String>,
    pub password: Option<String>,
    pub hidden: bool,
    pub mode: Option<String>,
}

/// Bond configuration attached to a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSettings {
    pub mode: Option<String>,
    pub ports: Vec<String>,
}

/// VLAN configuration attached to a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanSettings {
    pub parent: Option<String>,
    pub vlan_id: Option<u16>,
}

/// A normalized network connection.
///
/// `id` is the stable key used for upsert matching; it is not guaranteed to
/// equal any transport path component. Addresses, nameservers, and gateways
/// are parsed into structured form at construction; routes are decomposed
/// per family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub iface: Option<String>,
    pub connection_type: ConnectionType,
    pub addresses: Vec<IpAddress>,
    pub nameservers: Vec<IpAddr>,
    pub gateway4: Option<IpAddr>,
    pub gateway6: Option<IpAddr>,
    pub routes4: Vec<Route>,
    pub routes6: Vec<Route>,
    pub wireless: Option<WirelessSettings>,
    pub bond: Option<BondSettings>,
    pub vlan: Option<VlanSettings>,
    /// Unrecognized backend fields, carried for write-back.
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
