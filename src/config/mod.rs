// Required external crates for configuration management and serialization
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use config::{Config, ConfigError, Environment, File};

use crate::chat::Timings;

/// Default simulated sign-in latency in milliseconds
pub const DEFAULT_SIGN_IN_MS: u64 = 1500;
/// Default simulated reply latency in milliseconds
pub const DEFAULT_REPLY_MS: u64 = 1000;
/// Default log level; anything louder would interleave with the menus
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the simulated network latency
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DelayConfig {
    /// Blocking wait before a sign-in completes
    pub sign_in_ms: u64,
    /// Blocking wait before the assistant answers
    pub reply_ms: u64,
}

impl DelayConfig {
    /// Converts the configured milliseconds into the controller timings
    pub fn timings(&self) -> Timings {
        Timings {
            sign_in: Duration::from_millis(self.sign_in_ms),
            reply: Duration::from_millis(self.reply_ms),
        }
    }
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Optional directory for rolling log files; stderr is used when absent
    pub directory: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Latency-related settings
    pub delays: DelayConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delays: DelayConfig {
                sign_in_ms: DEFAULT_SIGN_IN_MS,
                reply_ms: DEFAULT_REPLY_MS,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
                directory: None,
            },
        }
    }
}

/// Implementation for loading and parsing configuration
impl Settings {
    /// Loads settings from the `config` directory under the working directory.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::current_dir()
            .map_err(|e| ConfigError::Message(
                format!("Failed to get current directory: {}", e)
            ))?
            .join("config");

        Self::from_dir(&config_dir)
    }

    /// Creates a new Settings instance by layering sources
    /// in the following order of precedence (highest to lowest):
    /// 1. Environment variables prefixed with NEXA_ (`NEXA_DELAYS__REPLY_MS`)
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml) if present
    /// 4. Built-in defaults
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::layered(config_dir, Self::environment())
    }

    /// Environment source for `NEXA_<SECTION>__<KEY>` variables
    fn environment() -> Environment {
        Environment::with_prefix("NEXA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn layered(config_dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let default_config = config_dir.join("default.toml");
        let local_config = config_dir.join("local.toml");

        // Convert paths to strings and keep them alive
        let default_config_path = default_config.to_string_lossy();
        let local_config_path = local_config.to_string_lossy();

        let settings = Config::builder()
            .set_default("delays.sign_in_ms", DEFAULT_SIGN_IN_MS)?
            .set_default("delays.reply_ms", DEFAULT_REPLY_MS)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(&default_config_path).required(false))
            .add_source(File::with_name(&local_config_path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create log directory if configured and doesn't exist
        if let Some(log_dir) = &self.logging.directory {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    ConfigError::Message(format!(
                        "Failed to create log directory at {}: {}",
                        log_dir.display(), e
                    ))
                })?;
            }
        }

        Ok(())
    }
}
