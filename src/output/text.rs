//! Plain text output, one subnet per line.

use super::format::format_max_hosts;
use super::table::network_summary;
use super::Formatter;
use crate::models::Network;
use std::error::Error;
use std::fmt::Write;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_network(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!("formatting network as text cidr={}", network.cidr);
        Ok(network_summary(network))
    }

    fn format_subnets(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!(
            "formatting subnets as text cidr={} subnet_count={}",
            network.cidr,
            network.subnets.len()
        );
        if network.subnets.is_empty() {
            return Ok(String::new());
        }

        let mut out = format!("\nSubnets ({} total):\n", network.subnets.len());
        for (i, subnet) in network.subnets.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} (hosts: {})",
                i + 1,
                subnet.cidr,
                format_max_hosts(&subnet.max_hosts)
            )?;
        }
        Ok(out)
    }
}
