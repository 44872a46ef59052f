//! Configuration errors that say what to change.

use std::fmt;

/// A rejected configuration value, or several of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Invalid configuration value.
    Invalid {
        /// Dotted setting name, e.g. `server.port`.
        setting: String,
        /// What is wrong.
        message: String,
        /// How to fix it.
        fix_hint: String,
    },
    /// Multiple errors occurred.
    Multiple(Vec<ConfigurationError>),
}

impl std::error::Error for ConfigurationError {}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid {
                setting,
                message,
                fix_hint,
            } => {
                write!(
                    f,
                    "Invalid configuration: {setting}: {message}\n\nHow to fix: {fix_hint}"
                )
            }
            Self::Multiple(errors) => {
                writeln!(f, "Multiple configuration errors:")?;
                for (i, err) in errors.iter().enumerate() {
                    writeln!(f, "\n{}. {}", i + 1, err)?;
                }
                Ok(())
            }
        }
    }
}

impl ConfigurationError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid(
        setting: impl Into<String>,
        message: impl Into<String>,
        fix_hint: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            setting: setting.into(),
            message: message.into(),
            fix_hint: fix_hint.into(),
        }
    }

    /// Collapse collected errors: none is `Ok`, one is returned as is.
    pub fn collect(mut errors: Vec<ConfigurationError>) -> ConfigResult<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Multiple(errors)),
        }
    }

    /// Check if this is a multiple errors wrapper.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Get the number of errors (1 for single errors, N for multiple).
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

/// Result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_error_display() {
        let err = ConfigurationError::invalid(
            "server.port",
            "port 0 is not bindable",
            "Set EDU_ADMIN__SERVER__PORT to a port between 1 and 65535",
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid configuration: server.port"));
        assert!(msg.contains("How to fix"));
        assert!(msg.contains("EDU_ADMIN__SERVER__PORT"));
    }

    #[test]
    fn test_collect() {
        assert!(ConfigurationError::collect(Vec::new()).is_ok());

        let single = ConfigurationError::collect(vec![ConfigurationError::invalid("a", "b", "c")])
            .unwrap_err();
        assert!(!single.is_multiple());
        assert_eq!(single.count(), 1);

        let many = ConfigurationError::collect(vec![
            ConfigurationError::invalid("a", "Error 1", "Fix 1"),
            ConfigurationError::invalid("b", "Error 2", "Fix 2"),
        ])
        .unwrap_err();
        assert!(many.is_multiple());
        assert_eq!(many.count(), 2);
        let msg = many.to_string();
        assert!(msg.contains("Multiple configuration errors"));
        assert!(msg.contains("1."));
        assert!(msg.contains("2."));
    }
}
