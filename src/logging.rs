//! log4rs setup.
//!
//! A log4rs YAML file wins when it exists. Otherwise one-shot runs log to
//! stderr and interactive runs log to a file so log lines never land on
//! the terminal UI.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Where log lines go when no YAML file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Build the fallback log4rs config, or `None` when logging is off.
pub fn build_config(
    target: LogTarget,
    level: LevelFilter,
    log_file: &Path,
) -> Result<Option<LogConfig>, Box<dyn Error>> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let appender = match target {
        LogTarget::Stderr => {
            let stderr = ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
                .build();
            Appender::builder().build("main", Box::new(stderr))
        }
        LogTarget::File => {
            let file = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
                .build(log_file)?;
            Appender::builder().build("main", Box::new(file))
        }
    };

    let config = LogConfig::builder()
        .appender(appender)
        .build(Root::builder().appender("main").build(level))?;
    Ok(Some(config))
}

/// Initialise the global logger.
///
/// # Arguments
///
/// * `config` - Runtime configuration with the YAML and log file paths
/// * `target` - Fallback destination when the YAML file does not exist
/// * `level` - Root level for the fallback config
pub fn init(config: &Config, target: LogTarget, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::debug!("logging from {}", config.log_config.display());
        return Ok(());
    }

    if let Some(log_config) = build_config(target, level, &config.log_file)? {
        log4rs::init_config(log_config)?;
    }
    log::debug!("logging at {level} to {target:?}");
    Ok(())
}
