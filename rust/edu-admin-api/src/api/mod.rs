//! HTTP API endpoints.
//!
//! Every managed entity exposes the same five operations under `/api`:
//!
//! - `GET  /api/list-{entities}`: the full, unpaginated collection
//! - `POST /api/create-{entity}`: body is the insert schema
//! - `POST /api/get-{entity}`: body carries the id field
//! - `POST /api/edit-{entity}`: id field plus any subset of insertable fields
//! - `POST /api/delete-{entity}`: id field; always `{ "success": true }`
//!
//! The id travels in the body, never in the path, and its field name differs
//! per entity (`identifier`, `course_id`, `model_id`, ...).

pub mod chat;
pub mod content_blocks;
pub mod courses;
pub mod error;
pub mod extract;
pub mod health;
pub mod lessons;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::ValidatedJson;

use axum::{
    http::{Method, Uri},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::database::{EntityStore, StoreError};
use crate::domain::Entity;
use crate::AppState;

/// Create the API router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(courses::router())
        .merge(subjects::router())
        .merge(lessons::router())
        .merge(teachers::router())
        .merge(content_blocks::router())
        .merge(chat::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {method} {}", uri.path()))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Response of every delete route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// Shared handler bodies. `S` is usually `dyn Repository`; naming the entity
// explicitly picks which `EntityStore` impl to call.

pub(crate) async fn list_all<E, S>(store: &S) -> Json<Vec<E>>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    Json(store.list().await)
}

pub(crate) async fn insert<E, S>(store: &S, new: E::New) -> Json<E>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    let record = store.create(new).await;
    tracing::info!(entity = E::KIND, id = %record.id(), "✅ {} created", E::KIND);
    Json(record)
}

pub(crate) async fn fetch<E, S>(store: &S, id: &E::Id) -> ApiResult<Json<E>>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| StoreError::not_found(E::KIND, id).into())
}

pub(crate) async fn modify<E, S>(store: &S, id: &E::Id, patch: E::Patch) -> ApiResult<Json<E>>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    let record = store.update(id, patch).await?;
    tracing::info!(entity = E::KIND, id = %id, "✅ {} updated", E::KIND);
    Ok(Json(record))
}

pub(crate) async fn remove<E, S>(store: &S, id: &E::Id) -> Json<DeleteResponse>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    store.delete(id).await;
    tracing::info!(entity = E::KIND, id = %id, "🗑️  {} deleted", E::KIND);
    Json(DeleteResponse { success: true })
}
