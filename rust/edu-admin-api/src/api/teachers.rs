//! Teacher persona endpoints.
//!
//! Teachers are keyed by a serial integer sent as `model_id`.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{fetch, insert, list_all, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{Teacher, TeacherId, TeacherPatch, NewTeacher};
use crate::AppState;

/// Create the teachers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-teachers", get(list_teachers))
        .route("/api/create-teacher", post(create_teacher))
        .route("/api/get-teacher", post(get_teacher))
        .route("/api/edit-teacher", post(edit_teacher))
        .route("/api/delete-teacher", post(delete_teacher))
}

/// Body addressing a single teacher.
#[derive(Debug, Deserialize)]
pub struct TeacherKey {
    pub model_id: TeacherId,
}

/// Edit body: the id plus any subset of teacher fields.
#[derive(Debug, Deserialize)]
pub struct EditTeacherRequest {
    pub model_id: TeacherId,
    #[serde(flatten)]
    pub patch: TeacherPatch,
}

async fn list_teachers(State(state): State<AppState>) -> Json<Vec<Teacher>> {
    list_all::<Teacher, _>(&*state.store).await
}

async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewTeacher>,
) -> Json<Teacher> {
    insert::<Teacher, _>(&*state.store, new).await
}

async fn get_teacher(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<TeacherKey>,
) -> ApiResult<Json<Teacher>> {
    fetch::<Teacher, _>(&*state.store, &key.model_id).await
}

async fn edit_teacher(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditTeacherRequest>,
) -> ApiResult<Json<Teacher>> {
    modify::<Teacher, _>(&*state.store, &req.model_id, req.patch).await
}

async fn delete_teacher(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<TeacherKey>,
) -> Json<DeleteResponse> {
    remove::<Teacher, _>(&*state.store, &key.model_id).await
}
