// ── Wireless security decoding ──
//
// The bit layout of the capability/WPA/RSN flag words belongs to the
// wireless stack behind the backend, not to this crate, so decoding is a
// pluggable strategy: the gateway invokes whatever `SecurityDecoder` it was
// given, once per access point, and stores the result verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Security protocols an access point can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityProtocol {
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "WPA1")]
    Wpa,
    #[serde(rename = "WPA2")]
    Rsn,
    #[serde(rename = "802.1X")]
    Ieee8021x,
}

impl fmt::Display for SecurityProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Wep => "WEP",
            Self::Wpa => "WPA1",
            Self::Rsn => "WPA2",
            Self::Ieee8021x => "802.1X",
        };
        f.write_str(s)
    }
}

/// Strategy for decoding raw 802.11 flag words into protocols.
pub trait SecurityDecoder: Send + Sync {
    fn security_from_flags(
        &self,
        flags: u32,
        wpa_flags: u32,
        rsn_flags: u32,
    ) -> Vec<SecurityProtocol>;
}

// Capability flag: privacy bit (WEP when no WPA/RSN is advertised).
const AP_FLAG_PRIVACY: u32 = 0x1;
// Security flag: 802.1X key management, same position in wpa and rsn words.
const AP_SEC_KEY_MGMT_802_1X: u32 = 0x200;

/// Default decoder for the standard 802.11 flag layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFlagsDecoder;

impl SecurityDecoder for StandardFlagsDecoder {
    fn security_from_flags(
        &self,
        flags: u32,
        wpa_flags: u32,
        rsn_flags: u32,
    ) -> Vec<SecurityProtocol> {
        let mut security = Vec::new();

        if flags & AP_FLAG_PRIVACY != 0 && wpa_flags == 0 && rsn_flags == 0 {
            security.push(SecurityProtocol::Wep);
        }
        if wpa_flags > 0 {
            security.push(SecurityProtocol::Wpa);
        }
        if rsn_flags > 0 {
            security.push(SecurityProtocol::Rsn);
        }
        if (wpa_flags | rsn_flags) & AP_SEC_KEY_MGMT_802_1X != 0 {
            security.push(SecurityProtocol::Ieee8021x);
        }

        security
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(flags: u32, wpa: u32, rsn: u32) -> Vec<SecurityProtocol> {
        StandardFlagsDecoder.security_from_flags(flags, wpa, rsn)
    }

    #[test]
    fn open_network_has_no_security() {
        assert!(decode(0, 0, 0).is_empty());
    }

    #[test]
    fn privacy_flag_alone_means_wep() {
        assert_eq!(decode(AP_FLAG_PRIVACY, 0, 0), vec![SecurityProtocol::Wep]);
    }

    #[test]
    fn rsn_flags_mean_wpa2() {
        assert_eq!(decode(0, 0, 1), vec![SecurityProtocol::Rsn]);
        // Privacy bit is subsumed once WPA/RSN is advertised.
        assert_eq!(decode(AP_FLAG_PRIVACY, 0, 1), vec![SecurityProtocol::Rsn]);
    }

    #[test]
    fn wpa_and_rsn_both_reported() {
        assert_eq!(
            decode(AP_FLAG_PRIVACY, 0x100, 0x100),
            vec![SecurityProtocol::Wpa, SecurityProtocol::Rsn]
        );
    }

    #[test]
    fn enterprise_key_mgmt_adds_8021x() {
        assert_eq!(
            decode(0, 0, AP_SEC_KEY_MGMT_802_1X),
            vec![SecurityProtocol::Rsn, SecurityProtocol::Ieee8021x]
        );
    }
}
