//! Configuration for SupplierDB.
//!
//! Compile-time constants live at the top of this module; the runtime
//! [`RegistryConfig`] is read from an optional TOML file.
//!
//! # File Format
//! ```toml
//! [shell]
//! clear_screen = false
//! pause_after_action = true
//! report_latency = true
//!
//! [data]
//! seed_sample_data = true
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Lowest accepted supplier rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted supplier rating.
pub const MAX_RATING: u8 = 5;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "supplierdb.toml";

/// Top-level runtime configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Interactive shell behavior.
    #[serde(default)]
    pub shell: ShellConfig,

    /// Initial data.
    #[serde(default)]
    pub data: DataConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interactive shell behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Clear the terminal before each menu.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Wait for Enter after each action before redrawing the menu.
    #[serde(default = "default_true")]
    pub pause_after_action: bool,

    /// Print how long each registry operation took.
    #[serde(default = "default_true")]
    pub report_latency: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause_after_action: true,
            report_latency: true,
        }
    }
}

/// Initial data loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Load the three demonstration suppliers before the first menu.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset: one of `off`, `error`,
    /// `warn`, `info`, `debug` or `trace`. Per-target directives belong in
    /// `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl RegistryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Config` if the TOML is malformed or a value is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "unknown log level {:?}, expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
