//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `cihook.toml` in the working directory (or the path in
//! `CIHOOK_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

const DEFAULT_PATH: &str = "cihook.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Webhook handling settings.
    pub webhook: WebhookConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Webhook payload configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// JSON key whose value is logged for each payload.
    pub field: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `cihook.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed or
    /// unreadable, or if the resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CIHOOK_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("CIHOOK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("CIHOOK_PORT") {
            self.server.port = parse_port("CIHOOK_PORT", &val)?;
        }
        if let Some(val) = var("CIHOOK_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("CIHOOK_BIND must be host:port, got {val:?}"))
            })?;
            self.server.port = parse_port("CIHOOK_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = var("CIHOOK_FIELD") {
            self.webhook.field = val;
        }
        if let Some(val) = var("CIHOOK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.webhook.field.is_empty() {
            return Err(ConfigError::Validation(
                "webhook field must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(key: &str, val: &str) -> Result<u16, ConfigError> {
    val.parse()
        .map_err(|_| ConfigError::Validation(format!("{key} has an invalid port {val:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            field: "foo".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "cihook=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
