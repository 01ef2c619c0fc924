//! Address arithmetic on fixed-width IP addresses.
//!
//! Everything here works on the big-endian byte form of an address so the
//! same code serves IPv4 (4 bytes) and IPv6 (16 bytes).

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Width of an IPv4 address in bits.
pub const IPV4_BITS: u8 = 32;
/// Width of an IPv6 address in bits.
pub const IPV6_BITS: u8 = 128;

/// Number of bits in the address family of `addr`.
pub fn addr_bits(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

/// Big-endian bytes of an address (4 or 16 long).
pub fn addr_to_bytes(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// Rebuild an address from its big-endian bytes.
///
/// Callers only ever hand in slices derived from a parsed address, so any
/// other length is a bug and panics instead of truncating.
pub fn addr_from_bytes(bytes: &[u8]) -> IpAddr {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return IpAddr::V4(Ipv4Addr::from(octets));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return IpAddr::V6(Ipv6Addr::from(octets));
    }
    panic!("address must be 4 or 16 bytes, got {}", bytes.len());
}

/// Build a subnet mask with the first `mask_bits` bits set.
///
/// # Examples
/// ```
/// use subnet_calc::models::subnet_mask;
/// assert_eq!(subnet_mask(19, 32).to_string(), "255.255.224.0");
/// ```
pub fn subnet_mask(mask_bits: u8, addr_bits: u8) -> IpAddr {
    let mut mask = vec![0u8; usize::from(addr_bits / 8)];
    let mut remaining = mask_bits.min(addr_bits);

    for byte in mask.iter_mut() {
        if remaining >= 8 {
            *byte = 0xFF;
            remaining -= 8;
        } else if remaining > 0 {
            *byte = 0xFF << (8 - remaining);
            remaining = 0;
        }
    }

    addr_from_bytes(&mask)
}

/// Clear the host bits of `addr` under `mask`.
pub fn network_addr(addr: IpAddr, mask: IpAddr) -> IpAddr {
    let bytes: Vec<u8> = addr_to_bytes(addr)
        .iter()
        .zip(addr_to_bytes(mask))
        .map(|(a, m)| a & m)
        .collect();
    addr_from_bytes(&bytes)
}

/// Last address of the range, `network | !mask`.
///
/// IPv6 has no broadcast; the value is still reported under that name.
pub fn broadcast_addr(network: IpAddr, mask: IpAddr) -> IpAddr {
    let bytes: Vec<u8> = addr_to_bytes(network)
        .iter()
        .zip(addr_to_bytes(mask))
        .map(|(n, m)| n | !m)
        .collect();
    addr_from_bytes(&bytes)
}

/// Usable hosts in a network: `2^(addr_bits - mask_bits) - 2`, never negative.
///
/// Arbitrary precision, a /0 IPv6 network does not fit in any machine integer.
pub fn max_hosts(addr_bits: u8, mask_bits: u8) -> BigUint {
    let host_bits = addr_bits.saturating_sub(mask_bits);
    if host_bits == 0 {
        return BigUint::zero();
    }

    let total = BigUint::one() << usize::from(host_bits);
    let reserved = BigUint::from(2u32);
    if total <= reserved {
        BigUint::zero()
    } else {
        total - reserved
    }
}

/// Add `n` to an address with carry across bytes. Overflow past the top
/// address wraps.
pub fn add_to_addr(addr: IpAddr, n: u64) -> IpAddr {
    let mut bytes = addr_to_bytes(addr);
    let mut carry = u128::from(n);

    for byte in bytes.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = u128::from(*byte) + carry;
        *byte = (sum & 0xFF) as u8;
        carry = sum >> 8;
    }

    addr_from_bytes(&bytes)
}

/// Subtract `n` from an address with borrow across bytes. Underflow below
/// the zero address wraps.
pub fn sub_from_addr(addr: IpAddr, n: u64) -> IpAddr {
    let mut bytes = addr_to_bytes(addr);
    let mut borrow = u128::from(n);

    for byte in bytes.iter_mut().rev() {
        if borrow == 0 {
            break;
        }
        let low = (borrow & 0xFF) as u8;
        borrow >>= 8;
        if *byte < low {
            *byte = (u16::from(*byte) + 0x100 - u16::from(low)) as u8;
            borrow += 1;
        } else {
            *byte -= low;
        }
    }

    addr_from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0, 32), ip("0.0.0.0"));
        assert_eq!(subnet_mask(8, 32), ip("255.0.0.0"));
        assert_eq!(subnet_mask(16, 32), ip("255.255.0.0"));
        assert_eq!(subnet_mask(24, 32), ip("255.255.255.0"));
        assert_eq!(subnet_mask(26, 32), ip("255.255.255.192"));
        assert_eq!(subnet_mask(32, 32), ip("255.255.255.255"));
        assert_eq!(subnet_mask(64, 128), ip("ffff:ffff:ffff:ffff::"));
        assert_eq!(subnet_mask(127, 128), ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe"));
    }

    #[test]
    fn test_network_addr() {
        let mask = subnet_mask(19, 32);
        assert_eq!(network_addr(ip("10.12.34.56"), mask), ip("10.12.32.0"));
        let mask = subnet_mask(48, 128);
        assert_eq!(network_addr(ip("2001:db8:1:2::9"), mask), ip("2001:db8:1::"));
    }

    #[test]
    fn test_broadcast_addr() {
        assert_eq!(
            broadcast_addr(ip("192.168.1.0"), ip("255.255.255.0")),
            ip("192.168.1.255")
        );
        assert_eq!(
            broadcast_addr(ip("10.0.0.0"), ip("255.255.0.0")),
            ip("10.0.255.255")
        );
        assert_eq!(
            broadcast_addr(ip("192.168.1.0"), ip("255.255.255.255")),
            ip("192.168.1.0")
        );
        assert_eq!(
            broadcast_addr(ip("2001:db8::"), subnet_mask(64, 128)),
            ip("2001:db8::ffff:ffff:ffff:ffff")
        );
    }

    #[test]
    fn test_max_hosts() {
        assert_eq!(max_hosts(32, 0), BigUint::from(4_294_967_294u64));
        assert_eq!(max_hosts(32, 8), BigUint::from(16_777_214u32));
        assert_eq!(max_hosts(32, 16), BigUint::from(65_534u32));
        assert_eq!(max_hosts(32, 24), BigUint::from(254u32));
        assert_eq!(max_hosts(32, 30), BigUint::from(2u32));
        assert_eq!(max_hosts(32, 31), BigUint::zero());
        assert_eq!(max_hosts(32, 32), BigUint::zero());
    }

    #[test]
    fn test_max_hosts_ipv6_beyond_u64() {
        assert_eq!(max_hosts(128, 64), BigUint::from(u64::MAX - 1));
        assert_eq!(max_hosts(128, 127), BigUint::zero());
        assert_eq!(max_hosts(128, 128), BigUint::zero());
        let all = (BigUint::one() << 128usize) - BigUint::from(2u32);
        assert_eq!(max_hosts(128, 0), all);
    }

    #[test]
    fn test_add_to_addr_carries() {
        assert_eq!(add_to_addr(ip("192.168.1.63"), 1), ip("192.168.1.64"));
        assert_eq!(add_to_addr(ip("10.0.0.255"), 1), ip("10.0.1.0"));
        assert_eq!(add_to_addr(ip("10.255.255.255"), 1), ip("11.0.0.0"));
        assert_eq!(add_to_addr(ip("10.0.0.0"), 256), ip("10.0.1.0"));
        assert_eq!(add_to_addr(ip("2001:db8::ffff"), 1), ip("2001:db8::1:0"));
        assert_eq!(add_to_addr(ip("255.255.255.255"), 1), ip("0.0.0.0"));
    }

    #[test]
    fn test_sub_from_addr_borrows() {
        assert_eq!(sub_from_addr(ip("192.168.1.255"), 1), ip("192.168.1.254"));
        assert_eq!(sub_from_addr(ip("10.0.1.0"), 1), ip("10.0.0.255"));
        assert_eq!(sub_from_addr(ip("10.0.1.0"), 257), ip("9.255.255.255"));
        assert_eq!(sub_from_addr(ip("2001:db8::1:0"), 1), ip("2001:db8::ffff"));
        assert_eq!(sub_from_addr(ip("0.0.0.0"), 1), ip("255.255.255.255"));
    }

    #[test]
    #[should_panic(expected = "4 or 16 bytes")]
    fn test_addr_from_bytes_rejects_odd_width() {
        addr_from_bytes(&[10, 0, 0]);
    }
}
