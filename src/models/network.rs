//! Network entity and flat subnet generation.

use super::addr::{add_to_addr, broadcast_addr, max_hosts, sub_from_addr, subnet_mask};
use super::Cidr;
use crate::error::SubnetError;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use std::net::IpAddr;

/// Safety limit for a single split, guards against memory exhaustion.
pub const MAX_GENERATED_SUBNETS: u64 = 1_000_000;

/// One concrete network with all derived properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Canonical (masked) prefix.
    pub cidr: Cidr,
    pub network_addr: IpAddr,
    /// Last address of the range (IPv6 has no real broadcast).
    pub broadcast_addr: IpAddr,
    pub first_host_ip: IpAddr,
    pub last_host_ip: IpAddr,
    pub subnet_mask: IpAddr,
    pub mask_bits: u8,
    /// Usable host count, `2^(host bits) - 2` floored at zero.
    pub max_hosts: BigUint,
    /// Subnets produced by [`Network::split`], ascending and contiguous.
    pub subnets: Vec<Network>,
}

impl Network {
    /// Create a network from a CIDR string, normalizing to the network address.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::Network;
    /// let n = Network::new("10.12.34.56/19").unwrap();
    /// assert_eq!(n.cidr.to_string(), "10.12.32.0/19");
    /// ```
    pub fn new(cidr: &str) -> Result<Network, SubnetError> {
        log::debug!("creating network cidr={cidr}");
        let network = Network::from_cidr(Cidr::new(cidr)?);
        log::debug!(
            "network created cidr={} mask_bits={}",
            network.cidr,
            network.mask_bits
        );
        Ok(network)
    }

    /// Build a network from an already parsed prefix.
    pub fn from_cidr(cidr: Cidr) -> Network {
        let cidr = cidr.masked();
        let addr_bits = cidr.addr_bits();
        let mask = subnet_mask(cidr.bits, addr_bits);
        let broadcast = broadcast_addr(cidr.addr, mask);

        Network {
            cidr,
            network_addr: cidr.addr,
            broadcast_addr: broadcast,
            first_host_ip: add_to_addr(cidr.addr, 1),
            last_host_ip: sub_from_addr(broadcast, 1),
            subnet_mask: mask,
            mask_bits: cidr.bits,
            max_hosts: max_hosts(addr_bits, cidr.bits),
            subnets: Vec::new(),
        }
    }

    /// Width of the address family in bits.
    pub fn addr_bits(&self) -> u8 {
        self.cidr.addr_bits()
    }

    /// Divide this network into subnets of prefix length `target_bits`.
    ///
    /// All subnets are generated at the target depth in one pass; no
    /// intermediate levels are kept. On error `subnets` is left untouched.
    pub fn split(&mut self, target_bits: u8) -> Result<(), SubnetError> {
        log::debug!(
            "splitting network cidr={} current_bits={} target_bits={}",
            self.cidr,
            self.mask_bits,
            target_bits
        );

        let count = subnet_count(self.mask_bits, target_bits, self.addr_bits())?;
        log::trace!("generating subnets subnet_count={count}");
        self.subnets = generate_subnets(self.cidr, target_bits, count);
        log::debug!("network split completed subnet_count={}", self.subnets.len());
        Ok(())
    }
}

/// Validate a split and return how many subnets it yields.
///
/// The count is computed with arbitrary precision before it is narrowed, so
/// a /0 to /128 request fails cleanly instead of overflowing.
pub fn subnet_count(current_bits: u8, target_bits: u8, addr_bits: u8) -> Result<usize, SubnetError> {
    if target_bits <= current_bits {
        return Err(SubnetError::TargetNotLarger {
            target: target_bits,
            current: current_bits,
        });
    }
    if target_bits > addr_bits {
        return Err(SubnetError::TargetExceedsAddressWidth {
            target: target_bits,
            max: addr_bits,
        });
    }

    let count = BigUint::one() << usize::from(target_bits - current_bits);
    match count.to_u64() {
        Some(n) if n <= MAX_GENERATED_SUBNETS => Ok(n as usize),
        _ => Err(SubnetError::TooManySubnets {
            count,
            limit: MAX_GENERATED_SUBNETS,
        }),
    }
}

/// Generate `count` consecutive subnets of `target_bits` starting at the
/// network address of `parent`.
///
/// Each subnet starts one past the previous subnet's broadcast address.
pub fn generate_subnets(parent: Cidr, target_bits: u8, count: usize) -> Vec<Network> {
    let mut subnets = Vec::with_capacity(count);
    let mut next_addr = parent.masked().addr;

    for _ in 0..count {
        let subnet = Network::from_cidr(Cidr {
            addr: next_addr,
            bits: target_bits,
        });
        next_addr = add_to_addr(subnet.broadcast_addr, 1);
        subnets.push(subnet);
    }

    subnets
}
