//! Lesson content block endpoints.
//!
//! Unlike the other listings, blocks are listed per lesson with a `POST`
//! carrying `lesson_id`. Results come back in insertion order; the `order`
//! field is left for the client to interpret.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::{fetch, insert, modify, remove, ApiResult, DeleteResponse, ValidatedJson};
use crate::domain::{BlockId, ContentBlock, ContentBlockPatch, LessonId, NewContentBlock};
use crate::AppState;

/// Create the content blocks router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/list-content-blocks", post(list_content_blocks))
        .route("/api/create-content-block", post(create_content_block))
        .route("/api/get-content-block", post(get_content_block))
        .route("/api/edit-content-block", post(edit_content_block))
        .route("/api/delete-content-block", post(delete_content_block))
}

/// Body of the per-lesson listing.
#[derive(Debug, Deserialize)]
pub struct LessonBlocksRequest {
    pub lesson_id: LessonId,
}

#[derive(Debug, Deserialize)]
pub struct BlockKey {
    pub block_id: BlockId,
}

#[derive(Debug, Deserialize)]
pub struct EditContentBlockRequest {
    pub block_id: BlockId,
    #[serde(flatten)]
    pub patch: ContentBlockPatch,
}

async fn list_content_blocks(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LessonBlocksRequest>,
) -> Json<Vec<ContentBlock>> {
    let blocks = state.store.list_for_lesson(&req.lesson_id).await;
    tracing::debug!(lesson_id = %req.lesson_id, count = blocks.len(), "Listed content blocks");
    Json(blocks)
}

async fn create_content_block(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewContentBlock>,
) -> Json<ContentBlock> {
    insert::<ContentBlock, _>(&*state.store, new).await
}

async fn get_content_block(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<BlockKey>,
) -> ApiResult<Json<ContentBlock>> {
    fetch::<ContentBlock, _>(&*state.store, &key.block_id).await
}

async fn edit_content_block(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EditContentBlockRequest>,
) -> ApiResult<Json<ContentBlock>> {
    modify::<ContentBlock, _>(&*state.store, &req.block_id, req.patch).await
}

async fn delete_content_block(
    State(state): State<AppState>,
    ValidatedJson(key): ValidatedJson<BlockKey>,
) -> Json<DeleteResponse> {
    remove::<ContentBlock, _>(&*state.store, &key.block_id).await
}
