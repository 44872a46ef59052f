//! Education admin API.
//!
//! Back end for an education-content admin console. Operators manage users,
//! courses, subjects, lessons, teacher personas and lesson content blocks
//! through a flat JSON-over-HTTP API, and can try a persona against a lesson
//! in a simulated chat.
//!
//! - [`config`]: layered configuration and startup validation
//! - [`domain`]: records, insert schemas and patches
//! - [`database`]: storage traits and the in-memory store
//! - [`chat`]: persona reply generation
//! - [`api`]: HTTP endpoints
//! - [`server`]: router assembly and middleware
//!
//! ```rust,ignore
//! use edu_admin_api::config::{AppConfig, DEFAULT_CONFIG_FILE};
//! use edu_admin_api::server::create_app;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load_from(DEFAULT_CONFIG_FILE)?;
//!     let addr = config.server.socket_addr();
//!     let app = create_app(config)?;
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! State lives in process memory and is lost on restart.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod chat;
pub mod config;
pub mod database;
pub mod domain;
pub mod logging;
pub mod server;

use std::sync::Arc;

use chat::{PersonaResponder, TemplateResponder};
use config::AppConfig;
use database::{InMemoryStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record storage for every entity.
    pub store: Arc<dyn Repository>,
    /// Generates persona replies for the chat endpoints.
    pub responder: Arc<dyn PersonaResponder>,
}

impl AppState {
    /// Empty in-memory store with the template responder.
    pub fn new(config: AppConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(InMemoryStore::new()),
            Arc::new(TemplateResponder),
        )
    }

    pub fn with_parts(
        config: AppConfig,
        store: Arc<dyn Repository>,
        responder: Arc<dyn PersonaResponder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            responder,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("responder", &self.responder.name())
            .finish()
    }
}
