//! Blockdown Config
//!
//! This crate handles configuration loading and management
//! for blockdown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/blockdown/config.toml`
//! - macOS: `~/Library/Application Support/blockdown/config.toml`
//! - Windows: `%APPDATA%\blockdown\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use blockdown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! println!("margin = {}", config.style.margin);
//! ```

mod style;

pub use style::StyleConfig;

use blockdown_core::{BlockdownError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[style]
Margin          = 2
Width           = 0
HeadingCentered = true
Bullet          = "•"
Heading    = "#87ceeb"
Subheading = "#98fb98"
Symbol     = "#dda0dd"
Grey       = "#808080"
"##;

/// Main configuration structure.
///
/// Currently a single `[style]` section; kept as a struct so future
/// sections merge the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use blockdown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[style]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    ///
    /// # Example
    ///
    /// ```
    /// use blockdown_config::Config;
    /// if let Some(path) = Config::config_path() {
    ///     println!("Config path: {}", path.display());
    /// }
    /// ```
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "blockdown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blockdown_config::Config;
    /// let config = Config::load().unwrap();
    /// ```
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blockdown_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./config.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            BlockdownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// This is used for applying CLI overrides or secondary config files.
    ///
    /// # Example
    ///
    /// ```
    /// use blockdown_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [style]
    ///     Margin = 4
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.style.margin, 4);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.style.merge(&other.style);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| BlockdownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
