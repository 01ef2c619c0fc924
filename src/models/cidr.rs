//! CIDR prefix value type.
//!
//! Provides [`Cidr`] for representing an address with its prefix length,
//! for both IPv4 and IPv6.

use super::addr::{addr_bits, network_addr, subnet_mask};
use crate::error::SubnetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

/// An address with a prefix length, e.g. `10.12.32.0/19`.
///
/// Ordering is by address first, then by prefix length, so a parent sorts
/// before its first child.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address part.
    pub addr: IpAddr,
    /// The prefix length.
    pub bits: u8,
}

impl Cidr {
    /// Parse a CIDR string (e.g. "10.0.0.0/24" or "2001:db8::/32").
    ///
    /// The address is kept as written; see [`Cidr::masked`] for the
    /// normalized network prefix.
    pub fn new(addr_cidr: &str) -> Result<Cidr, SubnetError> {
        let trimmed = addr_cidr.trim();
        let (addr_part, bits_part) = trimmed
            .split_once('/')
            .ok_or_else(|| SubnetError::invalid_cidr(addr_cidr, "expected address/prefix"))?;

        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| SubnetError::invalid_cidr(addr_cidr, format!("invalid address {addr_part}")))?;
        let bits: u8 = bits_part
            .parse()
            .map_err(|_| SubnetError::invalid_cidr(addr_cidr, format!("invalid prefix length {bits_part}")))?;

        let max = addr_bits(addr);
        if bits > max {
            return Err(SubnetError::invalid_cidr(
                addr_cidr,
                format!("prefix length /{bits} exceeds /{max}"),
            ));
        }
        Ok(Cidr { addr, bits })
    }

    /// Same prefix with the host bits cleared.
    pub fn masked(&self) -> Cidr {
        let mask = subnet_mask(self.bits, self.addr_bits());
        Cidr {
            addr: network_addr(self.addr, mask),
            bits: self.bits,
        }
    }

    /// Width of the address family in bits (32 or 128).
    pub fn addr_bits(&self) -> u8 {
        addr_bits(self.addr)
    }

    pub fn is_ipv6(&self) -> bool {
        self.addr.is_ipv6()
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}
