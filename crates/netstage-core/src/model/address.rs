// ── Address/prefix codec ──
//
// Parses and formats the backend's `address[/prefix-or-netmask]` strings.
// `FromStr` is the parse direction, `Display` the format direction; for
// integer-prefix inputs the two are exact inverses. Dotted-netmask inputs
// normalize to the equivalent integer prefix on output.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure for an address/prefix wire string.
///
/// These always surface as hard errors: an unparseable address or mask must
/// never degrade into a guessed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid IP address literal: {0:?}")]
    InvalidAddress(String),

    #[error("prefix {prefix} out of range (max {max} for this address family)")]
    PrefixOutOfRange { prefix: u128, max: u8 },

    #[error("invalid prefix or netmask: {0:?}")]
    InvalidPrefix(String),

    #[error("non-contiguous netmask: {0}")]
    NonContiguousNetmask(Ipv4Addr),

    #[error("netmask notation is not valid for an IPv6 address: {0:?}")]
    NetmaskOnIpv6(String),
}

/// An IP address with an optional CIDR prefix length.
///
/// A `None` prefix means "no prefix specified" (host route or protocol
/// default), which is distinct from a prefix of zero. The prefix is kept
/// private so every `IpAddress` in circulation went through the range check
/// in [`IpAddress::new`] or the parser; construct via those, never a
/// literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddress {
    pub address: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<u8>,
}

impl IpAddress {
    /// Construct with a range-checked prefix.
    pub fn new(address: IpAddr, prefix: Option<u8>) -> Result<Self, AddressError> {
        if let Some(p) = prefix {
            let max = max_prefix(address);
            if p > max {
                return Err(AddressError::PrefixOutOfRange {
                    prefix: u128::from(p),
                    max,
                });
            }
        }
        Ok(Self { address, prefix })
    }

    /// Construct without a prefix.
    pub fn bare(address: IpAddr) -> Self {
        Self {
            address,
            prefix: None,
        }
    }

    /// The CIDR prefix length, if one was specified.
    pub fn prefix(&self) -> Option<u8> {
        self.prefix
    }
}

/// Maximum prefix length for the address family.
fn max_prefix(address: IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

/// Parse the part after `/`: either an integer prefix or (IPv4 only) a
/// dotted netmask.
///
/// The integer branch parses wide so an absurdly large prefix still reports
/// out-of-range instead of falling through to the netmask path.
fn parse_prefix(address: IpAddr, rest: &str) -> Result<u8, AddressError> {
    if let Ok(n) = rest.parse::<u128>() {
        let max = max_prefix(address);
        if n > u128::from(max) {
            return Err(AddressError::PrefixOutOfRange { prefix: n, max });
        }
        return Ok(u8::try_from(n).unwrap_or(max));
    }

    match address {
        IpAddr::V6(_) => Err(AddressError::NetmaskOnIpv6(rest.to_owned())),
        IpAddr::V4(_) => {
            let mask: Ipv4Addr = rest
                .parse()
                .map_err(|_| AddressError::InvalidPrefix(rest.to_owned()))?;
            let bits = u32::from(mask);
            let ones = bits.leading_ones();
            // A valid mask is all leading ones: 255.0.255.0 must be rejected,
            // not truncated to /8.
            if bits.count_ones() != ones {
                return Err(AddressError::NonContiguousNetmask(mask));
            }
            Ok(u8::try_from(ones).unwrap_or(32))
        }
    }
}

impl FromStr for IpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            None => {
                let address = s
                    .parse()
                    .map_err(|_| AddressError::InvalidAddress(s.to_owned()))?;
                Ok(Self::bare(address))
            }
            Some((addr, rest)) => {
                let address: IpAddr = addr
                    .parse()
                    .map_err(|_| AddressError::InvalidAddress(addr.to_owned()))?;
                let prefix = parse_prefix(address, rest)?;
                Ok(Self {
                    address,
                    prefix: Some(prefix),
                })
            }
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}/{prefix}", self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn parse(s: &str) -> IpAddress {
        s.parse().expect("well-formed address")
    }

    #[test]
    fn parses_integer_prefix() {
        let addr = parse("192.168.1.10/24");
        assert_eq!(addr.address, IpAddr::from(Ipv4Addr::new(192, 168, 1, 10)));
        assert_eq!(addr.prefix(), Some(24));
    }

    #[test]
    fn parses_bare_address() {
        assert_eq!(parse("10.0.0.1").prefix(), None);
        assert_eq!(parse("::1").prefix(), None);
    }

    #[test]
    fn parses_ipv6_prefix() {
        let addr = parse("2001:db8::5/64");
        assert_eq!(addr.prefix(), Some(64));
        // 33..=128 are valid for IPv6 even though they exceed the v4 range.
        assert_eq!(parse("2001:db8::5/128").prefix(), Some(128));
    }

    #[test]
    fn netmask_converts_to_equivalent_prefix() {
        assert_eq!(parse("10.0.0.0/255.255.255.0").prefix(), Some(24));
        assert_eq!(parse("10.0.0.0/255.255.255.0"), parse("10.0.0.0/24"));
        assert_eq!(parse("10.0.0.0/255.255.0.0").prefix(), Some(16));
        assert_eq!(parse("10.0.0.0/0.0.0.0").prefix(), Some(0));
    }

    #[test]
    fn non_contiguous_netmask_rejected() {
        let err = "10.0.0.0/255.0.255.0".parse::<IpAddress>().unwrap_err();
        assert_eq!(
            err,
            AddressError::NonContiguousNetmask(Ipv4Addr::new(255, 0, 255, 0))
        );
    }

    #[test]
    fn prefix_out_of_range_rejected() {
        assert_eq!(
            "10.0.0.0/33".parse::<IpAddress>().unwrap_err(),
            AddressError::PrefixOutOfRange { prefix: 33, max: 32 }
        );
        assert_eq!(
            "2001:db8::1/129".parse::<IpAddress>().unwrap_err(),
            AddressError::PrefixOutOfRange {
                prefix: 129,
                max: 128
            }
        );
        // Prefixes too wide for u32 still report out-of-range, not a parse error.
        assert_eq!(
            "10.0.0.0/99999999999".parse::<IpAddress>().unwrap_err(),
            AddressError::PrefixOutOfRange {
                prefix: 99_999_999_999,
                max: 32
            }
        );
    }

    #[test]
    fn malformed_inputs_rejected() {
        assert!(matches!(
            "not-an-ip/24".parse::<IpAddress>(),
            Err(AddressError::InvalidAddress(_))
        ));
        assert!(matches!(
            "10.0.0.0/gibberish".parse::<IpAddress>(),
            Err(AddressError::InvalidPrefix(_))
        ));
        assert!(matches!(
            "10.0.0.0/".parse::<IpAddress>(),
            Err(AddressError::InvalidPrefix(_))
        ));
        assert!(matches!(
            "2001:db8::1/255.255.0.0".parse::<IpAddress>(),
            Err(AddressError::NetmaskOnIpv6(_))
        ));
    }

    #[test]
    fn round_trips_integer_prefix_notation() {
        for s in ["192.168.1.10/24", "10.0.0.1", "2001:db8::5/64", "::1"] {
            assert_eq!(parse(s).to_string(), s);
        }
    }

    #[test]
    fn netmask_notation_formats_as_integer_prefix() {
        assert_eq!(parse("10.0.0.0/255.255.255.0").to_string(), "10.0.0.0/24");
    }

    #[test]
    fn constructor_range_checks() {
        let v4: IpAddr = Ipv4Addr::new(10, 0, 0, 1).into();
        assert!(IpAddress::new(v4, Some(32)).is_ok());
        assert!(IpAddress::new(v4, Some(33)).is_err());
        assert!(IpAddress::new(v4, None).is_ok());
    }
}
