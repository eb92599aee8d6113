//! Configuration Management
//!
//! Loads and manages application configuration using config-rs.
//! Follows XDG specification for config file locations.

use crate::error::{ConfigError, ConfigResult};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Application name (used for directory paths)
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Reveal animation window in milliseconds
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Keybinding overrides: action name to list of key strings,
    /// e.g. `next = ["Right", "n"]`
    #[serde(default)]
    pub keybindings: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Include timestamps
    #[serde(default = "default_true")]
    pub timestamps: bool,

    /// Include file/line info
    #[serde(default)]
    pub file_line: bool,
}

// Default value functions
fn default_app_name() -> String {
    "deckhand".to_string()
}

fn default_tick_rate() -> u64 {
    33
}

fn default_animation_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

// Default implementations
impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_ms: default_animation_ms(),
            keybindings: HashMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            timestamps: true,
            file_line: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. System config: /etc/deckhand/config.toml
    /// 3. User config: ~/.config/deckhand/config.toml (XDG)
    /// 4. Local config: ./.deckhand/config.toml
    /// 5. Environment variables: DECKHAND_*
    pub fn load() -> ConfigResult<Self> {
        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. System config (optional)
        #[cfg(unix)]
        {
            builder = builder.add_source(File::with_name("/etc/deckhand/config").required(false));
        }

        // 3. User config (XDG)
        if let Some(proj_dirs) = ProjectDirs::from("com", "deckhand", "deckhand") {
            let config_path = proj_dirs.config_dir().join("config");
            builder = builder
                .add_source(File::with_name(config_path.to_str().unwrap_or("")).required(false));
        }

        // 4. Local config
        builder = builder.add_source(File::with_name(".deckhand/config").required(false));

        // 5. Environment variables (DECKHAND_*)
        builder = builder.add_source(
            Environment::with_prefix("DECKHAND")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(app_config)
    }

    /// Load configuration with a custom config file path
    pub fn load_with_file(path: &PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: path.clone() });
        }

        let mut builder = Config::builder();

        builder = builder.add_source(
            config::File::from_str(
                include_str!("../../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        builder = builder.add_source(File::from(path.clone()).required(true));

        builder = builder.add_source(
            Environment::with_prefix("DECKHAND")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(app_config)
    }
}
