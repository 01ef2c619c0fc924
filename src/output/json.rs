//! JSON export of a network and its subnets.

use super::format::format_max_hosts;
use super::Formatter;
use crate::models::Network;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Serialized shape of one network node. Children nest under `subnets`,
/// which is left out when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonNetwork {
    pub cidr: String,
    #[serde(rename = "firstIP")]
    pub first_ip: String,
    #[serde(rename = "lastIP")]
    pub last_ip: String,
    pub network_addr: String,
    pub broadcast_addr: String,
    pub subnet_mask: String,
    pub mask_bits: u8,
    pub max_hosts: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<JsonNetwork>,
}

impl From<&Network> for JsonNetwork {
    fn from(n: &Network) -> Self {
        JsonNetwork {
            cidr: n.cidr.to_string(),
            first_ip: n.first_host_ip.to_string(),
            last_ip: n.last_host_ip.to_string(),
            network_addr: n.network_addr.to_string(),
            broadcast_addr: n.broadcast_addr.to_string(),
            subnet_mask: n.subnet_mask.to_string(),
            mask_bits: n.mask_bits,
            max_hosts: format_max_hosts(&n.max_hosts),
            subnets: n.subnets.iter().map(JsonNetwork::from).collect(),
        }
    }
}

/// Serialize `network` (with nested subnets) to JSON.
pub fn to_json(network: &Network, pretty: bool) -> Result<String, serde_json::Error> {
    let value = JsonNetwork::from(network);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> JsonFormatter {
        JsonFormatter { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format_network(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!("formatting network as json cidr={}", network.cidr);
        Ok(to_json(network, self.pretty)?)
    }

    fn format_subnets(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!(
            "formatting subnets as json cidr={} subnet_count={}",
            network.cidr,
            network.subnets.len()
        );
        Ok(to_json(network, self.pretty)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_schema_keys() {
        let network = Network::new("10.12.34.56/19").unwrap();
        let out = JsonFormatter::new(false).format_network(&network).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["cidr"], "10.12.32.0/19");
        assert_eq!(value["firstIP"], "10.12.32.1");
        assert_eq!(value["lastIP"], "10.12.63.254");
        assert_eq!(value["networkAddr"], "10.12.32.0");
        assert_eq!(value["broadcastAddr"], "10.12.63.255");
        assert_eq!(value["subnetMask"], "255.255.224.0");
        assert_eq!(value["maskBits"], 19);
        assert_eq!(value["maxHosts"], "8,190");
        assert!(value.get("subnets").is_none());
    }

    #[test]
    fn test_json_nests_subnets() {
        let mut network = Network::new("192.168.1.0/24").unwrap();
        network.split(26).unwrap();
        let out = JsonFormatter::new(true).format_subnets(&network).unwrap();
        assert!(out.contains('\n'));

        let parsed: JsonNetwork = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.subnets.len(), 4);
        assert_eq!(parsed.subnets[3].cidr, "192.168.1.192/26");
        assert_eq!(parsed.subnets[3].max_hosts, "62");
        assert!(parsed.subnets[0].subnets.is_empty());
    }

    #[test]
    fn test_json_large_ipv6_hosts() {
        let network = Network::new("2001:db8::/32").unwrap();
        let value: Value = serde_json::from_str(&to_json(&network, false).unwrap()).unwrap();
        assert_eq!(value["maxHosts"], ">2^95");
    }
}
