//! Command line arguments.

use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
    name = "subnet-calc",
    version,
    about = "Calculate and split IPv4/IPv6 networks",
    long_about = "Show the addresses, mask and host count of a network in CIDR notation.\n\n\
                  Split it into equal subnets with --subnet-size, print JSON with --json,\n\
                  or explore and split it interactively with --interactive."
)]
pub struct Cli {
    /// Network in CIDR notation, e.g. 10.0.0.0/16 or 2001:db8::/48.
    #[arg(value_name = "CIDR")]
    pub cidr: String,

    /// Split the network into subnets of this prefix length.
    #[arg(short = 's', long, value_name = "BITS")]
    pub subnet_size: Option<u8>,

    /// Print JSON instead of a table.
    #[arg(short, long, conflicts_with = "interactive")]
    pub json: bool,

    /// Print a plain text subnet list instead of a table.
    #[arg(short, long, conflicts_with_all = ["json", "interactive"])]
    pub text: bool,

    /// Explore the network in an interactive table.
    #[arg(short, long)]
    pub interactive: bool,

    /// Adjust log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace).
    #[command(flatten)]
    pub verbosity: Verbosity<ErrorLevel>,
}
