//! Subject endpoints.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{fetch, insert, list_all, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{Subject, SubjectId, SubjectPatch, NewSubject};
use crate::AppState;

/// Create the subjects router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-subjects", get(list_subjects))
        .route("/api/create-subject", post(create_subject))
        .route("/api/get-subject", post(get_subject))
        .route("/api/edit-subject", post(edit_subject))
        .route("/api/delete-subject", post(delete_subject))
}

/// Body addressing a single subject.
#[derive(Debug, Deserialize)]
pub struct SubjectKey {
    pub subject_id: SubjectId,
}

/// Edit body: the id plus any subset of subject fields.
#[derive(Debug, Deserialize)]
pub struct EditSubjectRequest {
    pub subject_id: SubjectId,
    #[serde(flatten)]
    pub patch: SubjectPatch,
}

async fn list_subjects(State(state): State<AppState>) -> Json<Vec<Subject>> {
    list_all::<Subject, _>(&*state.store).await
}

async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewSubject>,
) -> Json<Subject> {
    insert::<Subject, _>(&*state.store, new).await
}

async fn get_subject(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<SubjectKey>,
) -> ApiResult<Json<Subject>> {
    fetch::<Subject, _>(&*state.store, &key.subject_id).await
}

async fn edit_subject(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditSubjectRequest>,
) -> ApiResult<Json<Subject>> {
    modify::<Subject, _>(&*state.store, &req.subject_id, req.patch).await
}

async fn delete_subject(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<SubjectKey>,
) -> Json<DeleteResponse> {
    remove::<Subject, _>(&*state.store, &key.subject_id).await
}
