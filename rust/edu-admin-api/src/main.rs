//! Edu Admin API entry point.

use clap::Parser;
use mimalloc::MiMalloc;

use edu_admin_api::config::{AppConfig, ConfigValidator, DEFAULT_CONFIG_FILE};
use edu_admin_api::logging::init_tracing;
use edu_admin_api::server::create_app;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Command-line arguments. Each one overrides the loaded configuration.
#[derive(Parser, Debug)]
#[command(name = "edu-admin-api")]
#[command(about = "Admin API for courses, subjects, lessons, teachers and lesson content")]
#[command(version)]
struct Args {
    /// Host to bind to.
    #[arg(long, env = "EDU_ADMIN_HOST")]
    host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level or filter directive.
    #[arg(long, env = "EDU_ADMIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, env = "EDU_ADMIN_JSON_LOGS")]
    json_logs: bool,

    /// Config file path (extension optional).
    #[arg(short, long, env = "EDU_ADMIN_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

impl Args {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Flags fall back to .env values too
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = AppConfig::load_unchecked(&args.config)?;
    args.apply(&mut config);
    ConfigValidator::validate(&config)
        .map_err(|e| anyhow::anyhow!("Configuration validation failed:\n\n{}", e))?;

    init_tracing(&config.logging)?;
    tracing::info!("Starting Edu Admin API v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.socket_addr();
    let app = create_app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_json_logs_falls_back_to_environment() {
        // SAFETY: serialised with every other test touching the environment.
        unsafe { std::env::set_var("EDU_ADMIN_JSON_LOGS", "true") };
        let from_env = Args::try_parse_from(["edu-admin-api"]);
        // SAFETY: as above.
        unsafe { std::env::remove_var("EDU_ADMIN_JSON_LOGS") };

        let mut config = AppConfig::default();
        from_env.unwrap().apply(&mut config);
        assert!(config.logging.json);

        let args = Args::try_parse_from(["edu-admin-api", "--port", "8080"]).unwrap();
        assert!(!args.json_logs);
        args.apply(&mut config);
        assert_eq!(config.server.port, 8080);
    }
}
