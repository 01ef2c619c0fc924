//! Output formatting for networks and their subnets.
//!
//! - [`format`] - comma grouping and host count display
//! - [`json`] - JSON export schema, also used by the interactive mode
//! - [`table`] - styled summary and subnet table
//! - [`text`] - plain list output
//! - [`terminal`] - terminal width detection and fixed-width cells

mod format;
mod json;
mod table;
mod terminal;
mod text;

use crate::models::Network;
use std::error::Error;

pub use format::{format_max_hosts, format_number};
pub use json::{to_json, JsonFormatter, JsonNetwork};
pub use table::{network_summary, TableFormatter};
pub use terminal::{center_field, format_field, terminal_width, DEFAULT_TERMINAL_WIDTH};
pub use text::TextFormatter;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Text,
}

/// Options for [`new_formatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    pub format: OutputFormat,
    /// Terminal width for table output.
    pub width: u16,
    /// Indent JSON output.
    pub pretty_print: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            format: OutputFormat::Table,
            width: DEFAULT_TERMINAL_WIDTH,
            pretty_print: true,
        }
    }
}

/// Renders network information for output.
pub trait Formatter {
    /// Format a single network's properties.
    fn format_network(&self, network: &Network) -> Result<String, Box<dyn Error>>;

    /// Format a network's subnets. Empty when the network was not split.
    fn format_subnets(&self, network: &Network) -> Result<String, Box<dyn Error>>;
}

/// Create the formatter selected by `config`.
pub fn new_formatter(config: &FormatterConfig) -> Box<dyn Formatter> {
    log::trace!(
        "creating formatter format={:?} width={} pretty_print={}",
        config.format,
        config.width,
        config.pretty_print
    );
    match config.format {
        OutputFormat::Json => Box::new(JsonFormatter::new(config.pretty_print)),
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(config.width)),
    }
}
