//! Lesson endpoints.
//!
//! A lesson's `subject_id` and `lesson_id` are stored as given; creating a
//! lesson under a subject that does not exist succeeds.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{fetch, insert, list_all, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{Lesson, LessonId, LessonPatch, NewLesson};
use crate::AppState;

/// Create the lessons router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-lessons", get(list_lessons))
        .route("/api/create-lesson", post(create_lesson))
        .route("/api/get-lesson", post(get_lesson))
        .route("/api/edit-lesson", post(edit_lesson))
        .route("/api/delete-lesson", post(delete_lesson))
}

/// Body addressing a single lesson.
#[derive(Debug, Deserialize)]
pub struct LessonKey {
    pub lesson_id: LessonId,
}

/// Edit body: the id plus any subset of lesson fields.
#[derive(Debug, Deserialize)]
pub struct EditLessonRequest {
    pub lesson_id: LessonId,
    #[serde(flatten)]
    pub patch: LessonPatch,
}

async fn list_lessons(State(state): State<AppState>) -> Json<Vec<Lesson>> {
    list_all::<Lesson, _>(&*state.store).await
}

async fn create_lesson(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewLesson>,
) -> Json<Lesson> {
    insert::<Lesson, _>(&*state.store, new).await
}

async fn get_lesson(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<LessonKey>,
) -> ApiResult<Json<Lesson>> {
    fetch::<Lesson, _>(&*state.store, &key.lesson_id).await
}

async fn edit_lesson(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditLessonRequest>,
) -> ApiResult<Json<Lesson>> {
    modify::<Lesson, _>(&*state.store, &req.lesson_id, req.patch).await
}

async fn delete_lesson(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<LessonKey>,
) -> Json<DeleteResponse> {
    remove::<Lesson, _>(&*state.store, &key.lesson_id).await
}
