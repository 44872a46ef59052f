//! Tracing setup and startup logging helpers.

use std::time::{Duration, Instant};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Fails if a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()?;
    }
    Ok(())
}

/// Times one startup or maintenance operation.
///
/// ```rust,ignore
/// let timer = OpTimer::new("store", "seed");
/// // ...
/// timer.finish();
/// ```
#[derive(Debug)]
pub struct OpTimer {
    component: &'static str,
    operation: &'static str,
    start: Instant,
}

impl OpTimer {
    #[must_use]
    pub fn new(component: &'static str, operation: &'static str) -> Self {
        tracing::debug!(component, operation, "Operation started");
        Self {
            component,
            operation,
            start: Instant::now(),
        }
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log completion and return the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        tracing::info!(
            component = self.component,
            operation = self.operation,
            duration_ms = elapsed.as_millis() as u64,
            "Operation completed"
        );
        elapsed
    }

    /// Log success or failure of `result`, then hand it back.
    pub fn finish_with<T, E: std::fmt::Display>(self, result: Result<T, E>) -> Result<T, E> {
        let duration_ms = self.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(
                component = self.component,
                operation = self.operation,
                duration_ms,
                "Operation completed successfully"
            ),
            Err(e) => tracing::error!(
                component = self.component,
                operation = self.operation,
                duration_ms,
                error = %e,
                "Operation failed"
            ),
        }
        result
    }
}

/// Log one numbered startup step.
///
/// ```rust,ignore
/// log_init_step!(1, 3, "Store", "in-memory");
/// ```
#[macro_export]
macro_rules! log_init_step {
    ($step:expr, $total:expr, $name:expr, $detail:expr) => {
        tracing::info!(step = $step, total = $total, "[{}/{}] {} - {}", $step, $total, $name, $detail);
    };
}

/// Log a startup warning.
#[macro_export]
macro_rules! log_init_warning {
    ($($arg:tt)*) => {
        tracing::warn!("⚠️  {}", format!($($arg)*));
    };
}

/// Log completion of a major phase.
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        tracing::info!("✅ {}", format!($($arg)*));
    };
}

/// Startup banner.
#[macro_export]
macro_rules! log_banner {
    ($title:expr, $subtitle:expr) => {
        tracing::info!("═══════════════════════════════════════════════════");
        tracing::info!("  {}", $title);
        tracing::info!("  {}", $subtitle);
        tracing::info!("═══════════════════════════════════════════════════");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reports_elapsed() {
        let timer = OpTimer::new("store", "seed");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.finish() >= Duration::from_millis(5));
    }

    #[test]
    fn test_finish_with_passes_result_through() {
        let ok: Result<u8, String> = OpTimer::new("router", "build").finish_with(Ok(7));
        assert_eq!(ok, Ok(7));

        let err: Result<u8, String> =
            OpTimer::new("router", "build").finish_with(Err("bad origin".to_string()));
        assert_eq!(err, Err("bad origin".to_string()));
    }
}
