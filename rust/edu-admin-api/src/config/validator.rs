//! Startup validation of [`AppConfig`].
//!
//! Every check runs; problems are reported together rather than one per
//! restart.

use axum::http::HeaderValue;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigResult, ConfigurationError};
use super::{AppConfig, CorsConfig, LoggingConfig, ServerConfig};

/// Checks configuration values the type system cannot.
#[derive(Debug)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the entire application configuration.
    pub fn validate(config: &AppConfig) -> ConfigResult<()> {
        let mut errors = Vec::new();
        errors.extend(Self::server_errors(&config.server));
        errors.extend(Self::cors_errors(&config.cors));
        errors.extend(Self::logging_errors(&config.logging));
        ConfigurationError::collect(errors)
    }

    fn server_errors(server: &ServerConfig) -> Vec<ConfigurationError> {
        let mut errors = Vec::new();

        if server.host.trim().is_empty() {
            errors.push(ConfigurationError::invalid(
                "server.host",
                "host is empty",
                "Set EDU_ADMIN__SERVER__HOST, e.g. 0.0.0.0 or 127.0.0.1",
            ));
        }

        if server.port == 0 {
            errors.push(ConfigurationError::invalid(
                "server.port",
                "port 0 is not bindable",
                "Set EDU_ADMIN__SERVER__PORT to a port between 1 and 65535",
            ));
        }

        if server.timeout_secs == 0 {
            errors.push(ConfigurationError::invalid(
                "server.timeout_secs",
                "a zero timeout would fail every request",
                "Set EDU_ADMIN__SERVER__TIMEOUT_SECS to a positive number of seconds",
            ));
        }

        errors
    }

    fn cors_errors(cors: &CorsConfig) -> Vec<ConfigurationError> {
        cors.allowed_origins
            .iter()
            .filter_map(|origin| {
                Self::check_origin(origin).err().map(|reason| {
                    ConfigurationError::invalid(
                        "cors.allowed_origins",
                        format!("'{origin}' is not a valid origin: {reason}"),
                        "Use scheme://host[:port] with no path, e.g. http://localhost:5173",
                    )
                })
            })
            .collect()
    }

    fn check_origin(origin: &str) -> Result<(), String> {
        let parsed = url::Url::parse(origin).map_err(|e| e.to_string())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme '{}'", parsed.scheme()));
        }
        if parsed.host_str().is_none() {
            return Err("missing host".to_string());
        }
        if parsed.path() != "/" || origin.ends_with('/') {
            return Err("origins carry no path".to_string());
        }
        HeaderValue::from_str(origin).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn logging_errors(logging: &LoggingConfig) -> Vec<ConfigurationError> {
        match EnvFilter::try_new(&logging.level) {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigurationError::invalid(
                "logging.level",
                format!("'{}' is not a log filter: {e}", logging.level),
                "Use a level (trace, debug, info, warn, error) or a directive like edu_admin_api=debug",
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_single_error_is_not_wrapped() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(!err.is_multiple());
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut config = AppConfig::default();
        config.server.host = " ".to_string();
        config.server.timeout_secs = 0;
        config.logging.level = "edu_admin_api=loud".to_string();

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(err.count(), 3);
    }

    #[test]
    fn test_cors_origins() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec![
            "http://localhost:5173".to_string(),
            "https://admin.example.com".to_string(),
        ];
        assert!(ConfigValidator::validate(&config).is_ok());

        for bad in [
            "localhost:5173",
            "ftp://example.com",
            "https://example.com/admin",
            "https://example.com/",
        ] {
            config.cors.allowed_origins = vec![bad.to_string()];
            let err = ConfigValidator::validate(&config).unwrap_err();
            assert!(err.to_string().contains("cors.allowed_origins"), "{bad}");
        }
    }
}
