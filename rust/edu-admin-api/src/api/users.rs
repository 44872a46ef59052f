//! User endpoints. Users are addressed by `identifier`.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{fetch, insert, list_all, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{User, UserId, UserPatch, NewUser};
use crate::AppState;

/// Create the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-users", get(list_users))
        .route("/api/create-user", post(create_user))
        .route("/api/get-user", post(get_user))
        .route("/api/edit-user", post(edit_user))
        .route("/api/delete-user", post(delete_user))
}

/// Body addressing a single user.
#[derive(Debug, Deserialize)]
pub struct UserKey {
    pub identifier: UserId,
}

/// Edit body: the id plus any subset of user fields.
#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub identifier: UserId,
    #[serde(flatten)]
    pub patch: UserPatch,
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    list_all::<User, _>(&*state.store).await
}

async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewUser>,
) -> Json<User> {
    insert::<User, _>(&*state.store, new).await
}

async fn get_user(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<UserKey>,
) -> ApiResult<Json<User>> {
    fetch::<User, _>(&*state.store, &key.identifier).await
}

async fn edit_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditUserRequest>,
) -> ApiResult<Json<User>> {
    modify::<User, _>(&*state.store, &req.identifier, req.patch).await
}

async fn delete_user(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<UserKey>,
) -> Json<DeleteResponse> {
    remove::<User, _>(&*state.store, &key.identifier).await
}
