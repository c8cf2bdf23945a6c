// ── Device domain types ──

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::address::IpAddress;
use super::route::Route;

/// A wire device-type code outside the closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown device type code: {0}")]
pub struct UnknownDeviceType(pub u8);

/// Device type, a closed enumeration over the backend's integer codes.
///
/// Unknown codes are a parse error, not a catch-all variant: the taxonomy is
/// fixed and extending it is a breaking change on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DeviceType {
    Loopback,
    Ethernet,
    Wireless,
    Dummy,
    Bond,
}

impl TryFrom<u8> for DeviceType {
    type Error = UnknownDeviceType;

    fn try_from(code: u8) -> Result<Self, UnknownDeviceType> {
        match code {
            0 => Ok(Self::Loopback),
            1 => Ok(Self::Ethernet),
            2 => Ok(Self::Wireless),
            3 => Ok(Self::Dummy),
            4 => Ok(Self::Bond),
            other => Err(UnknownDeviceType(other)),
        }
    }
}

impl From<DeviceType> for u8 {
    fn from(ty: DeviceType) -> Self {
        match ty {
            DeviceType::Loopback => 0,
            DeviceType::Ethernet => 1,
            DeviceType::Wireless => 2,
            DeviceType::Dummy => 3,
            DeviceType::Bond => 4,
        }
    }
}

/// A normalized network device.
///
/// Shares the IP-related shape of [`super::Connection`]; relations between
/// devices and connections are by `iface` string lookup only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub iface: String,
    pub device_type: DeviceType,
    pub addresses: Vec<IpAddress>,
    pub nameservers: Vec<IpAddr>,
    pub gateway4: Option<IpAddr>,
    pub gateway6: Option<IpAddr>,
    pub routes4: Vec<Route>,
    pub routes6: Vec<Route>,
    /// Unrecognized backend fields.
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
