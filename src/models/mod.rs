//! Domain models for subnet calculation.
//!
//! This module contains the core data structures and arithmetic:
//! - [`addr`] functions - byte-level address arithmetic for IPv4 and IPv6
//! - [`Cidr`] - address with prefix length
//! - [`Network`] - a network with its derived addresses, host count and subnets

mod addr;
mod cidr;
mod network;

// Re-export public types
pub use addr::{
    add_to_addr, addr_bits, addr_from_bytes, addr_to_bytes, broadcast_addr, max_hosts,
    network_addr, sub_from_addr, subnet_mask, IPV4_BITS, IPV6_BITS,
};
pub use cidr::Cidr;
pub use network::{generate_subnets, subnet_count, Network, MAX_GENERATED_SUBNETS};
