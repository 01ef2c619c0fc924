//! Styled summary and subnet table for terminal output.

use super::format::{format_max_hosts, format_number};
use super::Formatter;
use crate::models::Network;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::error::Error;

const HEADERS: [&str; 6] = [
    "#",
    "Subnet",
    "Subnet Mask",
    "Assignable Range",
    "Broadcast",
    "Hosts",
];

/// Formats networks as a labelled summary plus a subnet table.
pub struct TableFormatter {
    width: u16,
}

impl TableFormatter {
    pub fn new(width: u16) -> TableFormatter {
        TableFormatter { width }
    }

    fn subnet_table(&self, subnets: &[Network]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(self.width)
            .set_header(HEADERS.iter().map(|h| header_cell(h)));

        for (i, subnet) in subnets.iter().enumerate() {
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(subnet.cidr),
                Cell::new(subnet.subnet_mask),
                Cell::new(format!("{} - {}", subnet.first_host_ip, subnet.last_host_ip)),
                Cell::new(subnet.broadcast_addr),
                Cell::new(format_max_hosts(&subnet.max_hosts)),
            ]);
        }

        for index in [0, 5] {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        table
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// The five-line network summary shared by the table and text formatters.
pub fn network_summary(network: &Network) -> String {
    let rows = [
        ("Network", network.cidr.to_string()),
        (
            "Host Address Range",
            format!("{} - {}", network.first_host_ip, network.last_host_ip),
        ),
        ("Broadcast Address", network.broadcast_addr.to_string()),
        ("Subnet Mask", network.subnet_mask.to_string()),
        ("Maximum Hosts", format_max_hosts(&network.max_hosts)),
    ];

    let mut out = String::from("\n");
    for (label, value) in rows {
        out.push_str(&format!(
            "{} {}\n",
            format!("{label:>22}:").dimmed(),
            value.bold()
        ));
    }
    out
}

impl Formatter for TableFormatter {
    fn format_network(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!("formatting network as table cidr={}", network.cidr);
        Ok(network_summary(network))
    }

    fn format_subnets(&self, network: &Network) -> Result<String, Box<dyn Error>> {
        log::trace!(
            "formatting subnets as table cidr={} subnet_count={}",
            network.cidr,
            network.subnets.len()
        );
        let Some(first) = network.subnets.first() else {
            return Ok(String::new());
        };

        let title = format!(
            "  {} contains {} /{} subnets:",
            network.cidr,
            format_number(network.subnets.len() as u64),
            first.mask_bits
        );
        Ok(format!(
            "{}\n{}",
            title.bold().cyan(),
            self.subnet_table(&network.subnets)
        ))
    }
}
