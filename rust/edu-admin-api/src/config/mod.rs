//! Configuration management.
//!
//! Configuration is layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `config/edu-admin.{toml,yaml,json}` if present
//! 3. `.env` (loaded into the process environment)
//! 4. `EDU_ADMIN__*` environment variables, `__` separating sections
//!    (`EDU_ADMIN__SERVER__PORT=8080`)
//!
//! Command-line flags are applied on top by the binary.
//!
//! ```rust,ignore
//! use edu_admin_api::config::{AppConfig, DEFAULT_CONFIG_FILE};
//!
//! let config = AppConfig::load_from(DEFAULT_CONFIG_FILE)?;
//! println!("{}", config.server.socket_addr());
//! ```

pub mod error;
pub mod validator;

pub use error::{ConfigResult, ConfigurationError};
pub use validator::ConfigValidator;

use serde::{Deserialize, Serialize};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "EDU_ADMIN";

/// Default config file stem, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config/edu-admin";

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Cross-origin settings for the admin frontend.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate configuration from `file` (a stem such as
    /// [`DEFAULT_CONFIG_FILE`], or a path with extension) and the environment.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        let config = Self::load_unchecked(file)?;

        ConfigValidator::validate(&config)
            .map_err(|e| anyhow::anyhow!("Configuration validation failed:\n\n{}", e))?;

        Ok(config)
    }

    /// Load configuration without validation.
    pub fn load_unchecked(file: &str) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("logging.level", default_log_level())?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether to use JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.socket_addr(), "0.0.0.0:5000");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edu-admin.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[cors]\nallowed_origins = [\"http://localhost:5173\"]\n\n[logging]\njson = true"
        )
        .unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
        assert!(config.logging.json);
    }

    #[test]
    #[serial]
    fn test_environment_overrides_defaults() {
        // SAFETY: serialised with every other test touching the environment.
        unsafe {
            std::env::set_var("EDU_ADMIN__SERVER__PORT", "7070");
            std::env::set_var("EDU_ADMIN__LOGGING__LEVEL", "debug");
        }

        let result = AppConfig::load_from("does/not/exist");

        // SAFETY: as above.
        unsafe {
            std::env::remove_var("EDU_ADMIN__SERVER__PORT");
            std::env::remove_var("EDU_ADMIN__LOGGING__LEVEL");
        }

        let config = result.unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_invalid_file_values_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server]\nport = 0\ntimeout_secs = 0\n").unwrap();

        let err = AppConfig::load_from(path.to_str().unwrap()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Configuration validation failed"));
        assert!(msg.contains("server.port"));
        assert!(msg.contains("server.timeout_secs"));
    }
}
