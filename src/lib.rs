//! IPv4/IPv6 subnet calculator.
//!
//! The library parses a CIDR, derives its addresses and host count, splits
//! it into equal subnets and formats the result as a table, text or JSON.
//! The [`tui`] module explores a network interactively as a tree of
//! splits.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod tui;

use cli::Cli;
use config::Config;
use output::{new_formatter, terminal_width, FormatterConfig, OutputFormat};
use processing::{Calculator, DefaultCalculator};
use std::error::Error;

pub use error::SubnetError;
pub use models::{Cidr, Network};

/// Output format selected by the command line flags.
pub fn output_format(cli: &Cli) -> OutputFormat {
    if cli.json {
        OutputFormat::Json
    } else if cli.text {
        OutputFormat::Text
    } else {
        OutputFormat::Table
    }
}

/// Calculate, optionally split and format one network.
///
/// # Arguments
///
/// * `cli` - Parsed arguments, `cidr` and `subnet_size` are used
/// * `width` - Table width in columns
/// * `calculator` - Calculator to run
///
/// # Returns
///
/// The text to print on stdout
pub fn render_once(cli: &Cli, width: u16, calculator: &dyn Calculator) -> Result<String, Box<dyn Error>> {
    let mut network = calculator.calculate(&cli.cidr)?;
    if let Some(bits) = cli.subnet_size {
        calculator.split(&mut network, bits)?;
    }

    let config = FormatterConfig {
        format: output_format(cli),
        width,
        ..FormatterConfig::default()
    };
    let formatter = new_formatter(&config);

    if config.format == OutputFormat::Json {
        // subnets are nested in the network object
        return formatter.format_network(&network);
    }

    let mut out = formatter.format_network(&network)?;
    let subnets = formatter.format_subnets(&network)?;
    if !subnets.is_empty() {
        out.push('\n');
        out.push_str(&subnets);
    }
    Ok(out)
}

/// Run the command described by `cli`.
pub async fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    log::info!(
        "start cidr={} subnet_size={:?} interactive={}",
        cli.cidr,
        cli.subnet_size,
        cli.interactive
    );

    if cli.interactive {
        return tui::run(&cli.cidr, cli.subnet_size).await;
    }

    let out = render_once(cli, terminal_width(config.width), &DefaultCalculator::new())?;
    println!("{}", out.trim_end());
    Ok(())
}
