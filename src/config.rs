//! Runtime configuration from the environment.
//!
//! Values are read after `dotenv` loads an optional `.env` file. Missing or
//! unparsable values fall back to defaults.

use std::path::PathBuf;

pub const LOG_CONFIG_VAR: &str = "SUBNET_CALC_LOG_CONFIG";
pub const LOG_FILE_VAR: &str = "SUBNET_CALC_LOG_FILE";
pub const WIDTH_VAR: &str = "SUBNET_CALC_WIDTH";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LOG_FILE: &str = "subnet-calc.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Log file for interactive mode.
    pub log_file: PathBuf,
    /// Table width override.
    pub width: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            width: None,
        }
    }
}

impl Config {
    /// Load `.env` if present and read the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let width = non_empty(WIDTH_VAR).and_then(|v| match v.trim().parse::<u16>() {
            Ok(0) | Err(_) => {
                log::warn!("ignoring {WIDTH_VAR}={v:?}");
                None
            }
            Ok(width) => Some(width),
        });

        Config {
            log_config: non_empty(LOG_CONFIG_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            log_file: non_empty(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            width,
        }
    }
}
