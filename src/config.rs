//! Server configuration loaded from a JSON file.
//!
//! The file path comes from `CONFIG_FILE` when set, otherwise from
//! `config/config-<APP_ENV>.json`, where `APP_ENV` defaults to
//! `development`. The active environment also selects the logging sink; see
//! [`crate::telemetry`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

/// Variable naming an explicit configuration file.
pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";
/// Variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";
/// Variable overriding the configured log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_ENVIRONMENT: &str = "development";
const PRODUCTION: &str = "production";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_LOG_LEVEL: &str = "debug";
const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid configuration JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value parsed but is unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment name, such as `development` or `production`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl Environment {
    /// Builds an environment from an optional raw name.
    ///
    /// Missing or blank names select `development`.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        let trimmed = name.map(str::trim).filter(|value| !value.is_empty());
        Self(trimmed.unwrap_or(DEFAULT_ENVIRONMENT).to_owned())
    }

    /// Reads the environment from `APP_ENV`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_name(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Returns the environment name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the production environment.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_name(None)
    }
}

/// Resolves the configuration file path.
///
/// An explicit, non-blank `config_file` wins; otherwise the path is derived
/// from the environment name.
#[must_use]
pub fn resolve_config_path(config_file: Option<&str>, environment: &Environment) -> PathBuf {
    config_file
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(
            || PathBuf::from(format!("config/config-{}.json", environment.as_str())),
            PathBuf::from,
        )
}

/// Database connection settings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: SecretString,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Token verification settings.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing secret.
    pub secret: SecretString,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, for example `debug` or `taskbench=info`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for rotated log files in production.
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database settings; absent selects the in-memory store.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    /// Token verification settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parses configuration from JSON text.
    ///
    /// `origin` labels errors and is not read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or missing required
    /// sections, and [`ConfigError::Invalid`] for unusable values.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, plus any
    /// error from [`AppConfig::from_json_str`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Loads configuration for `environment`, honouring `CONFIG_FILE`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`AppConfig::load_from`].
    pub fn load(environment: &Environment) -> Result<Self, ConfigError> {
        let explicit = std::env::var(CONFIG_FILE_VAR).ok();
        Self::load_from(&resolve_config_path(explicit.as_deref(), environment))
    }

    /// Returns the effective log directive.
    ///
    /// A non-blank `override_level` (normally `LOG_LEVEL`) replaces the
    /// configured level.
    #[must_use]
    pub fn log_level<'a>(&'a self, override_level: Option<&'a str>) -> &'a str {
        override_level
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.logging.level)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret.expose_secret().is_empty() {
            return Err(ConfigError::Invalid("auth.secret must not be empty".to_owned()));
        }
        if let Some(database) = &self.database {
            if database.url.expose_secret().trim().is_empty() {
                return Err(ConfigError::Invalid("database.url must not be empty".to_owned()));
            }
            if database.max_connections == 0 {
                return Err(ConfigError::Invalid(
                    "database.maxConnections must be positive".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIRECTORY)
}
