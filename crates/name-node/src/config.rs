//! # Node Configuration
//!
//! Unified configuration for the name subsystems and runtime parameters.
//!
//! ## Sources (later wins)
//!
//! 1. `NodeConfig::default()`
//! 2. TOML file (`NodeConfig::from_file`)
//! 3. Environment variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NC_NAME_HISTORY` | `name_history` |
//! | `NC_CLAIM_MATURITY` | `names.claim_maturity` |
//! | `NC_EXPIRY_WINDOW` | `names.expiry_window` |
//! | `NC_LOG_LEVEL` | `logging.level` |

use nc_04_name_mempool::MempoolConfig;
use serde::Deserialize;
use shared_types::NameParams;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Complete node configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Name policy parameters.
    pub names: NameParams,
    /// Mempool configuration.
    pub mempool: MempoolConfig,
    /// Track the full value history of every name.
    pub name_history: bool,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `nc_04_name_mempool=debug`.
    pub level: String,
    /// Include the event target in log lines.
    pub with_target: bool,
    /// Include thread ids in log lines.
    pub with_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
            with_thread_ids: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for `NodeConfig`.
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable holds an unparsable value.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// A parameter is out of range.
    #[error("invalid parameter {field}: {reason}")]
    InvalidParameter {
        /// Field name.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl NodeConfig {
    /// Regression-test profile: 30-block expiry window, history enabled.
    pub fn regtest() -> Self {
        Self {
            names: NameParams::regtest(),
            name_history: true,
            ..Self::default()
        }
    }

    /// Parses a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup("NC_NAME_HISTORY") {
            self.name_history = parse_bool("NC_NAME_HISTORY", value)?;
        }
        if let Some(value) = lookup("NC_CLAIM_MATURITY") {
            self.names.claim_maturity = parse_number("NC_CLAIM_MATURITY", value)?;
        }
        if let Some(value) = lookup("NC_EXPIRY_WINDOW") {
            self.names.expiry_window = parse_number("NC_EXPIRY_WINDOW", value)?;
        }
        if let Some(value) = lookup("NC_LOG_LEVEL") {
            self.logging.level = value;
        }
        Ok(())
    }

    /// Validates parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::InvalidParameter { field, reason });

        if self.names.claim_maturity == 0 {
            return invalid("names.claim_maturity", "must be at least 1");
        }
        if self.names.expiry_window == 0 {
            return invalid("names.expiry_window", "must be at least 1");
        }
        if self.names.max_name_len == 0 {
            return invalid("names.max_name_len", "must be at least 1");
        }
        if self.names.max_value_len == 0 {
            return invalid("names.max_value_len", "must be at least 1");
        }
        if self.mempool.max_transactions == 0 {
            return invalid("mempool.max_transactions", "must be at least 1");
        }
        if self.mempool.max_block_transactions == 0 {
            return invalid("mempool.max_block_transactions", "must be at least 1");
        }
        Ok(())
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv { var, value }),
    }
}

fn parse_number(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

/// Load configuration from an optional file and the environment, then
/// validate it.
pub fn load_config(path: Option<&Path>) -> Result<NodeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading config file");
            NodeConfig::from_file(path)?
        }
        None => NodeConfig::default(),
    };
    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}
