//! Integration tests for subnet-calc
//!
//! These tests drive the public API the way the command line does.

use num_bigint::BigUint;
use std::net::IpAddr;
use subnet_calc::models::{max_hosts, Cidr, Network};
use subnet_calc::output::{new_formatter, to_json, FormatterConfig, OutputFormat};
use subnet_calc::processing::{Calculator, DefaultCalculator, SubnetTree};
use subnet_calc::SubnetError;

fn as_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn assert_partition(tree: &SubnetTree) {
    let root = &tree[tree.root()].network;
    let leaves: Vec<&Network> = tree
        .leaves(tree.root())
        .into_iter()
        .map(|id| &tree[id].network)
        .collect();

    assert_eq!(leaves[0].network_addr, root.network_addr);
    assert_eq!(leaves[leaves.len() - 1].broadcast_addr, root.broadcast_addr);
    for pair in leaves.windows(2) {
        assert_eq!(
            as_u128(pair[1].network_addr),
            as_u128(pair[0].broadcast_addr) + 1,
            "{} and {} are not contiguous",
            pair[0].cidr,
            pair[1].cidr
        );
    }
}

#[test]
fn test_normalizes_host_address() {
    let network = DefaultCalculator::new().calculate("10.12.34.56/19").unwrap();
    assert_eq!(network.cidr.to_string(), "10.12.32.0/19");
    assert_eq!(network.broadcast_addr.to_string(), "10.12.63.255");
    assert_eq!(network.first_host_ip.to_string(), "10.12.32.1");
    assert_eq!(network.last_host_ip.to_string(), "10.12.63.254");
    assert_eq!(network.subnet_mask.to_string(), "255.255.224.0");
    assert_eq!(network.max_hosts, BigUint::from(8190u32));
}

#[test]
fn test_split_into_four() {
    let calc = DefaultCalculator::new();
    let mut network = calc.calculate("192.168.1.0/24").unwrap();
    calc.split(&mut network, 26).unwrap();

    let cidrs: Vec<String> = network.subnets.iter().map(|s| s.cidr.to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "192.168.1.0/26",
            "192.168.1.64/26",
            "192.168.1.128/26",
            "192.168.1.192/26"
        ]
    );
    assert!(network
        .subnets
        .iter()
        .all(|s| s.max_hosts == BigUint::from(62u32)));
}

#[test]
fn test_split_count_and_contiguity() {
    let calc = DefaultCalculator::new();
    for (cidr, target) in [("10.0.0.0/16", 20), ("2001:db8::/48", 52), ("172.16.0.0/12", 12 + 10)] {
        let mut network = calc.calculate(cidr).unwrap();
        calc.split(&mut network, target).unwrap();
        assert_eq!(network.subnets.len(), 1 << (target - network.mask_bits));
        for pair in network.subnets.windows(2) {
            assert_eq!(
                as_u128(pair[1].network_addr),
                as_u128(pair[0].broadcast_addr) + 1
            );
        }
    }
}

#[test]
fn test_split_rejects_target_not_larger() {
    let calc = DefaultCalculator::new();
    let mut network = calc.calculate("192.168.1.0/24").unwrap();
    for target in [24, 20] {
        assert_eq!(
            calc.split(&mut network, target).unwrap_err(),
            SubnetError::TargetNotLarger {
                target,
                current: 24
            }
        );
    }
    assert!(network.subnets.is_empty());
}

#[test]
fn test_split_rejects_width_and_cap() {
    let calc = DefaultCalculator::new();
    let mut network = calc.calculate("10.0.0.0/8").unwrap();
    assert!(matches!(
        calc.split(&mut network, 33),
        Err(SubnetError::TargetExceedsAddressWidth { .. })
    ));
    match calc.split(&mut network, 30) {
        Err(SubnetError::TooManySubnets { count, limit }) => {
            assert_eq!(count, BigUint::from(4_194_304u32));
            assert_eq!(limit, 1_000_000);
        }
        other => panic!("expected TooManySubnets, got {other:?}"),
    }
}

#[test]
fn test_host_count_law() {
    assert_eq!(max_hosts(32, 24), BigUint::from(254u32));
    assert_eq!(max_hosts(32, 30), BigUint::from(2u32));
    assert_eq!(max_hosts(32, 31), BigUint::from(0u32));
    assert_eq!(max_hosts(128, 64), BigUint::from(u64::MAX) - 1u32);
}

#[test]
fn test_invalid_inputs() {
    let calc = DefaultCalculator::new();
    for input in ["", "10.0.0.0", "10.0.0.256/24", "10.0.0.0/33", "2001:db8::/129", "nope/8"] {
        assert!(
            matches!(calc.calculate(input), Err(SubnetError::InvalidCidr { .. })),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_tree_partition_after_edits() {
    let mut tree = SubnetTree::new(Cidr::new("10.0.0.0/20").unwrap());
    let root = tree.root();
    tree.split_to_depth(root, 22);
    assert_partition(&tree);

    let second = tree.leaves(root)[1];
    tree.split_to_depth(second, 25);
    assert_partition(&tree);

    let parent = tree[second].parent.unwrap();
    tree.join(parent);
    assert_partition(&tree);

    let last = *tree.leaves(root).last().unwrap();
    tree.split(last);
    assert_partition(&tree);
    assert_eq!(tree.leaves(root).len(), 4);
}

#[test]
fn test_tree_split_join_inverse() {
    let mut tree = SubnetTree::new(Cidr::new("2001:db8::/64").unwrap());
    let root = tree.root();
    assert!(tree.split(root));
    assert!(tree[root].is_split());
    assert!(tree.join(root));
    assert!(!tree[root].is_split());
    assert!(tree[root].children.is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_json_schema_keys() {
    let mut network = Network::new("10.12.32.0/19").unwrap();
    network.split(20).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&network, false).unwrap()).unwrap();

    assert_eq!(value["cidr"], "10.12.32.0/19");
    assert_eq!(value["firstIP"], "10.12.32.1");
    assert_eq!(value["lastIP"], "10.12.63.254");
    assert_eq!(value["networkAddr"], "10.12.32.0");
    assert_eq!(value["broadcastAddr"], "10.12.63.255");
    assert_eq!(value["subnetMask"], "255.255.224.0");
    assert_eq!(value["maskBits"], 19);
    assert_eq!(value["maxHosts"], "8,190");
    assert_eq!(value["subnets"][0]["cidr"], "10.12.32.0/20");
    assert!(value["subnets"][0].get("subnets").is_none());
}

#[test]
fn test_ipv6_host_count_is_abbreviated() {
    let network = Network::new("2001:db8::/48").unwrap();
    let json = to_json(&network, false).unwrap();
    assert!(json.contains("\"maxHosts\":\">2^79\""));
}

#[test]
fn test_table_formatter_output() {
    let mut network = Network::new("192.168.1.0/24").unwrap();
    network.split(26).unwrap();
    let formatter = new_formatter(&FormatterConfig {
        format: OutputFormat::Table,
        width: 120,
        pretty_print: true,
    });

    let summary = formatter.format_network(&network).unwrap();
    assert!(summary.contains("192.168.1.0/24"));
    assert!(summary.contains("255.255.255.0"));

    let subnets = formatter.format_subnets(&network).unwrap();
    assert!(subnets.contains("contains 4 /26 subnets"));
    assert!(subnets.contains("192.168.1.192/26"));
    assert!(subnets.contains("192.168.1.193 - 192.168.1.254") || subnets.contains(".193 - .254"));
}
