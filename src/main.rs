use clap::Parser;
use subnet_calc::cli::Cli;
use subnet_calc::config::Config;
use subnet_calc::logging::{self, LogTarget};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let config = Config::from_env();

    let target = if cli.interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if let Err(err) = logging::init(&config, target, cli.verbosity.log_level_filter()) {
        eprintln!("Error: logging setup failed: {err}");
    }

    if let Err(err) = subnet_calc::run(&cli, &config).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
