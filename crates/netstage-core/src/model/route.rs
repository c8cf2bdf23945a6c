// ── Route domain type ──

use serde::{Deserialize, Serialize};

use super::address::IpAddress;

/// A routing table entry decomposed from its wire form.
///
/// The wire `destination` string is parsed into a structured [`IpAddress`];
/// every other field, including anything in the `extra` bag, passes through
/// unchanged. The address family is implied by which collection (`routes4`
/// or `routes6`) the route belongs to, and is not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub destination: IpAddress,
    pub next_hop: Option<String>,
    pub metric: Option<u32>,
    /// Unrecognized backend fields, carried for write-back.
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
