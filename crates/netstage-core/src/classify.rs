// ── Connection classifier ──
//
// Assigns the semantic type of a connection from the fields present on its
// wire record. The rules are an ordered table with first-match-wins
// semantics; a record carrying several marker blocks (e.g. both `wireless`
// and `bond`) classifies by the earliest matching rule, and that order is
// part of the compatibility contract with the backend.

use netstage_api::models::WireConnection;

use crate::model::ConnectionType;

type Predicate = fn(&WireConnection) -> bool;

/// Classification rules, checked in order.
const RULES: &[(ConnectionType, Predicate)] = &[
    (ConnectionType::Wireless, |c| c.wireless.is_some()),
    (ConnectionType::Bond, |c| c.bond.is_some()),
    (ConnectionType::Vlan, |c| c.vlan.is_some()),
    (ConnectionType::Loopback, |c| c.iface.as_deref() == Some("lo")),
];

/// Classify a wire connection. Total: anything no rule claims is ethernet.
pub fn classify(conn: &WireConnection) -> ConnectionType {
    RULES
        .iter()
        .find(|(_, applies)| applies(conn))
        .map_or(ConnectionType::Ethernet, |(ty, _)| *ty)
}

#[cfg(test)]
mod tests {
    use netstage_api::models::{WireBond, WireVlan, WireWireless};

    use super::*;

    fn base(iface: &str) -> WireConnection {
        WireConnection {
            id: "test".into(),
            iface: Some(iface.into()),
            ..WireConnection::default()
        }
    }

    #[test]
    fn wireless_marker_wins_over_everything() {
        let mut conn = base("lo");
        conn.wireless = Some(WireWireless::default());
        conn.bond = Some(WireBond::default());
        conn.vlan = Some(WireVlan::default());
        assert_eq!(classify(&conn), ConnectionType::Wireless);
    }

    #[test]
    fn bond_precedes_vlan() {
        let mut conn = base("bond0");
        conn.bond = Some(WireBond::default());
        conn.vlan = Some(WireVlan::default());
        assert_eq!(classify(&conn), ConnectionType::Bond);
    }

    #[test]
    fn vlan_marker() {
        let mut conn = base("eth0.10");
        conn.vlan = Some(WireVlan::default());
        assert_eq!(classify(&conn), ConnectionType::Vlan);
    }

    #[test]
    fn loopback_by_iface_name_only() {
        assert_eq!(classify(&base("lo")), ConnectionType::Loopback);
        assert_eq!(classify(&base("eth0")), ConnectionType::Ethernet);
    }

    #[test]
    fn ethernet_is_the_default() {
        let mut conn = base("eth0");
        conn.iface = None;
        assert_eq!(classify(&conn), ConnectionType::Ethernet);
    }
}
