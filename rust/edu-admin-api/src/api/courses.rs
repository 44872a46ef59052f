//! Course endpoints.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{fetch, insert, list_all, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{Course, CourseId, CoursePatch, NewCourse};
use crate::AppState;

/// Create the courses router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-courses", get(list_courses))
        .route("/api/create-course", post(create_course))
        .route("/api/get-course", post(get_course))
        .route("/api/edit-course", post(edit_course))
        .route("/api/delete-course", post(delete_course))
}

/// Body addressing a single course.
#[derive(Debug, Deserialize)]
pub struct CourseKey {
    pub course_id: CourseId,
}

/// Edit body: the id plus any subset of course fields.
#[derive(Debug, Deserialize)]
pub struct EditCourseRequest {
    pub course_id: CourseId,
    #[serde(flatten)]
    pub patch: CoursePatch,
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    list_all::<Course, _>(&*state.store).await
}

async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewCourse>,
) -> Json<Course> {
    insert::<Course, _>(&*state.store, new).await
}

async fn get_course(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<CourseKey>,
) -> ApiResult<Json<Course>> {
    fetch::<Course, _>(&*state.store, &key.course_id).await
}

async fn edit_course(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditCourseRequest>,
) -> ApiResult<Json<Course>> {
    modify::<Course, _>(&*state.store, &req.course_id, req.patch).await
}

async fn delete_course(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<CourseKey>,
) -> Json<DeleteResponse> {
    remove::<Course, _>(&*state.store, &key.course_id).await
}
