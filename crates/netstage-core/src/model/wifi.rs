// ── Access point domain type ──

use serde::{Deserialize, Serialize};

use crate::security::SecurityProtocol;

/// A visible wireless access point.
///
/// Two access points with the same `ssid` are distinct entities; if a
/// consumer wants one entry per network name, that dedupe is its own
/// concern. `strength` is validated into 0–100 at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub ssid: String,
    pub hw_address: String,
    pub strength: u8,
    pub security: Vec<SecurityProtocol>,
}
