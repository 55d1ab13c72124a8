use super::{ConfigError, HubConfig, LoggingConfig, ServerConfig, TailConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Values given on the command line. Each `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub ui_dir: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tail: TailConfig,

    #[serde(default)]
    pub hub: HubConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads the TOML file at `config_path` (defaults when `None`), then
    /// applies `overrides`.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(log_file) = overrides.log_file {
            self.tail.log_path = log_file;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(ui_dir) = overrides.ui_dir {
            self.server.ui_dir = ui_dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "server.web_port must be greater than 0".to_string(),
            ));
        }
        if self.tail.log_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "tail.log_path cannot be empty".to_string(),
            ));
        }
        if self.tail.poll_interval_ms == 0 || self.tail.reopen_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "tail intervals must be greater than 0".to_string(),
            ));
        }
        if self.hub.subscriber_queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "hub.subscriber_queue_capacity must be greater than 0".to_string(),
            ));
        }
        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "unknown logging.level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}
