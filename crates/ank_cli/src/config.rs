//! CLI configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via `apply_cli_overrides`)
//! 2. `ANK_LOG` environment variable (log filter only)
//! 3. `--config <path>`, or `ank.toml` in the working directory
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "ank.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ANK_LOG";

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file {path} could not be read: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// How grahas are labelled in text output. JSON keys are always English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetNames {
    #[default]
    English,
    Sanskrit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub planet_names: PlanetNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `ank_base=debug`.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Flags that override file and environment settings.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub log_filter: Option<String>,
}

impl AnkConfig {
    /// Resolve the configuration from all layers.
    ///
    /// An explicit `config_path` must exist; the implicit `ank.toml` is
    /// optional.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                p.exists().then_some(p)
            }
        };

        let mut config = match path {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };

        config.apply_log_env(std::env::var(LOG_ENV).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply the value of `ANK_LOG`, if set and non-empty.
    pub fn apply_log_env(&mut self, value: Option<String>) {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.log.filter = Some(v);
        }
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if let Some(filter) = &cli.log_filter {
            self.log.filter = Some(filter.clone());
        }
    }

    /// Reject filter directives tracing cannot parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.log.filter {
            EnvFilter::try_new(filter).map_err(|e| ConfigError::InvalidValue {
                field: "log.filter".to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Filter directive to install.
    pub fn log_filter(&self) -> &str {
        self.log.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
