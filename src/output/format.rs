//! Human-readable number formatting shared by every formatter.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

lazy_static! {
    /// Host counts at or above 2^64 are shown as a power of two.
    static ref HOSTS_DISPLAY_THRESHOLD: BigUint = BigUint::one() << 64usize;
}

/// Format an integer with comma thousand separators, `1234` -> `"1,234"`.
pub fn format_number(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Format a host count for display.
///
/// Counts below 2^64 are comma grouped. Larger counts become `>2^N` where
/// `N` is the bit length minus one.
///
/// # Examples
/// ```
/// use num_bigint::BigUint;
/// use subnet_calc::output::format_max_hosts;
/// assert_eq!(format_max_hosts(&BigUint::from(8190u32)), "8,190");
/// ```
pub fn format_max_hosts(max_hosts: &BigUint) -> String {
    if *max_hosts >= *HOSTS_DISPLAY_THRESHOLD {
        return format!(">2^{}", max_hosts.bits() - 1);
    }
    group_digits(&max_hosts.to_str_radix(10))
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::max_hosts;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_max_hosts_small() {
        assert_eq!(format_max_hosts(&max_hosts(32, 24)), "254");
        assert_eq!(format_max_hosts(&max_hosts(32, 19)), "8,190");
        assert_eq!(format_max_hosts(&max_hosts(32, 31)), "0");
        assert_eq!(
            format_max_hosts(&max_hosts(128, 64)),
            "18,446,744,073,709,551,614"
        );
    }

    #[test]
    fn test_format_max_hosts_large_ipv6() {
        assert_eq!(format_max_hosts(&max_hosts(128, 63)), ">2^64");
        assert_eq!(format_max_hosts(&max_hosts(128, 48)), ">2^79");
        assert_eq!(format_max_hosts(&max_hosts(128, 0)), ">2^127");
        assert_eq!(format_max_hosts(&(BigUint::one() << 64usize)), ">2^64");
    }
}
