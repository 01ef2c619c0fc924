//! Abbreviated host ranges for narrow table columns.
//!
//! Only the octets (or IPv6 groups) from the first one where the last host
//! differs from the network address are shown, each behind a separator.

use std::net::IpAddr;

/// The two halves of an abbreviated range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeParts {
    pub first: String,
    pub last: String,
}

/// Abbreviate `first`..`last` against `network`.
///
/// Mixed address families fall back to the full addresses.
pub fn range_parts(first: IpAddr, last: IpAddr, network: IpAddr) -> RangeParts {
    match (first, last, network) {
        (IpAddr::V4(f), IpAddr::V4(l), IpAddr::V4(n)) => {
            let (f, l, n) = (f.octets(), l.octets(), n.octets());
            let from = first_difference(&l, &n);
            RangeParts {
                first: join_parts(&f[from..], '.', |b| b.to_string()),
                last: join_parts(&l[from..], '.', |b| b.to_string()),
            }
        }
        (IpAddr::V6(f), IpAddr::V6(l), IpAddr::V6(n)) => {
            let (f, l, n) = (f.segments(), l.segments(), n.segments());
            let from = first_difference(&l, &n);
            RangeParts {
                first: join_parts(&f[from..], ':', |g| format!("{g:x}")),
                last: join_parts(&l[from..], ':', |g| format!("{g:x}")),
            }
        }
        _ => RangeParts {
            first: first.to_string(),
            last: last.to_string(),
        },
    }
}

/// `first - last` in abbreviated form.
pub fn format_range_abbreviated(first: IpAddr, last: IpAddr, network: IpAddr) -> String {
    let parts = range_parts(first, last, network);
    format!("{} - {}", parts.first, parts.last)
}

/// Index of the first differing part, or the last index if none differ.
fn first_difference<T: PartialEq>(last: &[T], network: &[T]) -> usize {
    last.iter()
        .zip(network)
        .position(|(l, n)| l != n)
        .unwrap_or(last.len() - 1)
}

fn join_parts<T: Copy>(parts: &[T], sep: char, fmt: impl Fn(T) -> String) -> String {
    parts.iter().fold(String::new(), |mut out, &part| {
        out.push(sep);
        out.push_str(&fmt(part));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    fn parts(first: &str, last: &str, network: &str) -> (String, String) {
        let p = range_parts(ip(first), ip(last), ip(network));
        (p.first, p.last)
    }

    #[test]
    fn test_range_parts_last_octet() {
        assert_eq!(
            parts("192.168.1.1", "192.168.1.254", "192.168.1.0"),
            (".1".to_string(), ".254".to_string())
        );
        assert_eq!(
            parts("192.168.1.65", "192.168.1.126", "192.168.1.64"),
            (".65".to_string(), ".126".to_string())
        );
    }

    #[test]
    fn test_range_parts_wider_networks() {
        assert_eq!(
            parts("10.0.0.1", "10.0.255.254", "10.0.0.0"),
            (".0.1".to_string(), ".255.254".to_string())
        );
        assert_eq!(
            parts("10.0.0.1", "10.7.255.254", "10.0.0.0"),
            (".0.0.1".to_string(), ".7.255.254".to_string())
        );
    }

    #[test]
    fn test_range_parts_no_difference_uses_last_octet() {
        // a /32 style range where nothing differs
        assert_eq!(
            parts("10.0.0.5", "10.0.0.5", "10.0.0.5"),
            (".5".to_string(), ".5".to_string())
        );
    }

    #[test]
    fn test_range_parts_ipv6_groups() {
        assert_eq!(
            parts(
                "2001:db8::1",
                "2001:db8::ffff:ffff:ffff:fffe",
                "2001:db8::"
            ),
            (":0:0:0:1".to_string(), ":ffff:ffff:ffff:fffe".to_string())
        );
    }

    #[test]
    fn test_range_parts_mixed_family_falls_back() {
        assert_eq!(
            parts("10.0.0.1", "2001:db8::1", "10.0.0.0"),
            ("10.0.0.1".to_string(), "2001:db8::1".to_string())
        );
    }

    #[test]
    fn test_format_range_abbreviated() {
        assert_eq!(
            format_range_abbreviated(ip("192.168.1.1"), ip("192.168.1.126"), ip("192.168.1.0")),
            ".1 - .126"
        );
    }
}
