//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables. The signing secret has no default; a
//! configuration without one fails to build.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Port used when `API_PORT` is not set
pub const DEFAULT_PORT: u16 = 9000;
/// Database used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://socialnet.db?mode=rwc";
/// Bcrypt work factor used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Config file read when `CONFIG_FILE` is not set (only if it exists)
pub const DEFAULT_CONFIG_FILE: &str = "socialnet.toml";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Token signing secret
///
/// Read-only for the lifetime of the process. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// sqlx connection string
    pub database_url: String,
    /// Secret for signing identity tokens
    pub secret_key: SecretKey,
    /// Bcrypt work factor for new password digests
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `.env`, the config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Self::builder();
        let path = std::env::var("CONFIG_FILE")
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            });
        if let Some(path) = path {
            tracing::info!("Reading configuration file {}", path.display());
            builder = builder.merge_file(FileConfig::read(&path)?);
        }

        builder.merge_env(|key| std::env::var(key).ok())?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Shape of the optional TOML configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub secret_key: Option<String>,
    pub bcrypt_cost: Option<u32>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    secret_key: Option<SecretKey>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the HTTP port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn secret_key(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret_key = Some(SecretKey::new(secret));
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Overlay values present in a config file
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(port) = file.port {
            self.port = Some(port);
        }
        if let Some(url) = file.database_url {
            self.database_url = Some(url);
        }
        if let Some(secret) = file.secret_key {
            self.secret_key = Some(SecretKey::new(secret));
        }
        if let Some(cost) = file.bcrypt_cost {
            self.bcrypt_cost = Some(cost);
        }
        self
    }

    /// Overlay values found through `lookup` (normally `std::env::var`)
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("API_PORT") {
            self.port = Some(parse_value("API_PORT", &port)?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(secret) = lookup("SECRET_KEY") {
            self.secret_key = Some(SecretKey::new(secret));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_value("BCRYPT_COST", &cost)?);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            secret_key: self
                .secret_key
                .ok_or(ConfigError::MissingValue("SECRET_KEY"))?,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}
