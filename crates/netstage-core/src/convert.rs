// ── Wire-to-domain type conversions ──
//
// Bridges raw `netstage_api` wire records into the domain model and back.
// These factories are the single place invariants are enforced: every
// address string is parsed strictly, the connection type is computed by the
// classifier, and malformed required fields abort the conversion instead of
// degrading into a guessed value. Past this point the gateway never
// re-validates.

use std::net::IpAddr;

use netstage_api::models::{
    WireAccessPoint, WireBond, WireConnection, WireDevice, WireRoute, WireVlan, WireWireless,
};

use crate::classify::classify;
use crate::error::CoreError;
use crate::model::{
    AccessPoint, AddressError, BondSettings, Connection, Device, DeviceType, IpAddress, Route,
    VlanSettings, WirelessSettings,
};
use crate::security::SecurityDecoder;

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a bare IP literal (nameserver, gateway). Strict: malformed input
/// is an error, never dropped.
fn parse_ip(raw: &str) -> Result<IpAddr, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::Address(AddressError::InvalidAddress(raw.to_owned())))
}

fn parse_ip_opt(raw: Option<&String>) -> Result<Option<IpAddr>, CoreError> {
    raw.map(|s| parse_ip(s)).transpose()
}

fn parse_addresses(raw: &[String]) -> Result<Vec<IpAddress>, CoreError> {
    raw.iter()
        .map(|s| s.parse::<IpAddress>().map_err(CoreError::Address))
        .collect()
}

fn parse_nameservers(raw: &[String]) -> Result<Vec<IpAddr>, CoreError> {
    raw.iter().map(|s| parse_ip(s)).collect()
}

/// Decompose a wire route list: parse each `destination` string, carry every
/// other field through unchanged. An absent list is an empty one.
fn decompose_routes(raw: Option<Vec<WireRoute>>) -> Result<Vec<Route>, CoreError> {
    raw.unwrap_or_default().into_iter().map(Route::try_from).collect()
}

// ── Route ──────────────────────────────────────────────────────────

impl TryFrom<WireRoute> for Route {
    type Error = CoreError;

    fn try_from(wire: WireRoute) -> Result<Self, CoreError> {
        Ok(Self {
            destination: wire.destination.parse()?,
            next_hop: wire.next_hop,
            metric: wire.metric,
            extra: wire.extra,
        })
    }
}

impl From<&Route> for WireRoute {
    fn from(route: &Route) -> Self {
        Self {
            destination: route.destination.to_string(),
            next_hop: route.next_hop.clone(),
            metric: route.metric,
            extra: route.extra.clone(),
        }
    }
}

// ── Connection sub-blocks ──────────────────────────────────────────

impl From<WireWireless> for WirelessSettings {
    fn from(w: WireWireless) -> Self {
        Self {
            ssid: w.ssid,
            security: w.security,
            password: w.password,
            hidden: w.hidden.unwrap_or(false),
            mode: w.mode,
        }
    }
}

impl From<&WirelessSettings> for WireWireless {
    fn from(w: &WirelessSettings) -> Self {
        Self {
            ssid: w.ssid.clone(),
            security: w.security.clone(),
            password: w.password.clone(),
            hidden: Some(w.hidden),
            mode: w.mode.clone(),
        }
    }
}

impl From<WireBond> for BondSettings {
    fn from(b: WireBond) -> Self {
        Self {
            mode: b.mode,
            ports: b.ports,
        }
    }
}

impl From<&BondSettings> for WireBond {
    fn from(b: &BondSettings) -> Self {
        Self {
            mode: b.mode.clone(),
            ports: b.ports.clone(),
        }
    }
}

impl From<WireVlan> for VlanSettings {
    fn from(v: WireVlan) -> Self {
        Self {
            parent: v.parent,
            vlan_id: v.vlan_id,
        }
    }
}

impl From<&VlanSettings> for WireVlan {
    fn from(v: &VlanSettings) -> Self {
        Self {
            parent: v.parent.clone(),
            vlan_id: v.vlan_id,
        }
    }
}

// ── Connection ─────────────────────────────────────────────────────

impl TryFrom<WireConnection> for Connection {
    type Error = CoreError;

    fn try_from(wire: WireConnection) -> Result<Self, CoreError> {
        // Classify before the marker blocks are moved out of the record.
        let connection_type = classify(&wire);

        Ok(Self {
            id: wire.id,
            iface: wire.iface,
            connection_type,
            addresses: parse_addresses(&wire.addresses)?,
            nameservers: parse_nameservers(&wire.nameservers)?,
            gateway4: parse_ip_opt(wire.gateway4.as_ref())?,
            gateway6: parse_ip_opt(wire.gateway6.as_ref())?,
            routes4: decompose_routes(wire.routes4)?,
            routes6: decompose_routes(wire.routes6)?,
            wireless: wire.wireless.map(Into::into),
            bond: wire.bond.map(Into::into),
            vlan: wire.vlan.map(Into::into),
            extra: wire.extra,
        })
    }
}

impl From<&Connection> for WireConnection {
    fn from(conn: &Connection) -> Self {
        let routes = |rs: &[Route]| {
            if rs.is_empty() {
                None
            } else {
                Some(rs.iter().map(WireRoute::from).collect())
            }
        };

        Self {
            id: conn.id.clone(),
            iface: conn.iface.clone(),
            addresses: conn.addresses.iter().map(ToString::to_string).collect(),
            nameservers: conn.nameservers.iter().map(ToString::to_string).collect(),
            gateway4: conn.gateway4.map(|g| g.to_string()),
            gateway6: conn.gateway6.map(|g| g.to_string()),
            routes4: routes(&conn.routes4),
            routes6: routes(&conn.routes6),
            wireless: conn.wireless.as_ref().map(Into::into),
            bond: conn.bond.as_ref().map(Into::into),
            vlan: conn.vlan.as_ref().map(Into::into),
            extra: conn.extra.clone(),
        }
    }
}

// ── Device ─────────────────────────────────────────────────────────

impl TryFrom<WireDevice> for Device {
    type Error = CoreError;

    fn try_from(wire: WireDevice) -> Result<Self, CoreError> {
        let device_type = DeviceType::try_from(wire.device_type)
            .map_err(|e| CoreError::Malformed {
                message: e.to_string(),
            })?;
        let ip = wire.ip_config.unwrap_or_default();

        Ok(Self {
            iface: wire.iface,
            device_type,
            addresses: parse_addresses(&ip.addresses)?,
            nameservers: parse_nameservers(&ip.nameservers)?,
            gateway4: parse_ip_opt(ip.gateway4.as_ref())?,
            gateway6: parse_ip_opt(ip.gateway6.as_ref())?,
            routes4: decompose_routes(ip.routes4)?,
            routes6: decompose_routes(ip.routes6)?,
            extra: wire.extra,
        })
    }
}

// ── Access point ───────────────────────────────────────────────────

/// Build an [`AccessPoint`], invoking the injected security decoder once.
pub fn access_point_from_wire(
    wire: WireAccessPoint,
    decoder: &dyn SecurityDecoder,
) -> Result<AccessPoint, CoreError> {
    if wire.strength > 100 {
        return Err(CoreError::Malformed {
            message: format!(
                "access point {:?}: strength {} out of range 0-100",
                wire.ssid, wire.strength
            ),
        });
    }

    let security = decoder.security_from_flags(wire.flags, wire.wpa_flags, wire.rsn_flags);
    Ok(AccessPoint {
        ssid: wire.ssid,
        hw_address: wire.hw_address,
        strength: wire.strength,
        security,
    })
}
