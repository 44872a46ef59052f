//! Simulated chat endpoints for trying teacher personas against lessons.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::{fetch, ApiError, ApiResult, ValidatedJson};
use crate::chat::{self, ChatTurn};
use crate::database::EntityStore;
use crate::domain::{Conversation, Lesson, LessonId, NewConversation, Teacher, TeacherId};
use crate::AppState;

/// Create the chat router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chat/greeting", post(greeting))
        .route("/api/chat/send", post(send_message))
}

/// Greeting request.
#[derive(Debug, Deserialize)]
pub struct GreetingRequest {
    pub model_id: TeacherId,
}

/// Greeting response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// One operator message addressed to a persona.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Selected teacher.
    pub model_id: TeacherId,
    /// Selected lesson.
    pub lesson_id: LessonId,
    /// Operator's message.
    pub message: String,
}

/// Persona reply plus the logged exchange.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub reply: String,
    pub conversation: Conversation,
}

async fn greeting(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GreetingRequest>,
) -> ApiResult<Json<GreetingResponse>> {
    let Json(teacher) = fetch::<Teacher, _>(&*state.store, &req.model_id).await?;
    Ok(Json(GreetingResponse {
        message: chat::greeting(&teacher),
    }))
}

/// Answer one message and log the exchange as a conversation.
///
/// An unknown teacher or lesson is not an error; the reply falls back to
/// generic wording.
async fn send_message(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Json<SendMessageResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("message must not be empty".to_string()));
    }

    let store = &*state.store;
    let teacher = EntityStore::<Teacher>::get(store, &req.model_id).await;
    let lesson = EntityStore::<Lesson>::get(store, &req.lesson_id).await;

    let reply = state
        .responder
        .respond(ChatTurn {
            teacher: teacher.as_ref(),
            lesson: lesson.as_ref(),
            message: &req.message,
        })
        .await?;

    let conversation = EntityStore::<Conversation>::create(
        store,
        NewConversation {
            lesson_id: req.lesson_id,
            question: req.message,
            answer: reply.clone(),
            diagram: None,
            teacher_id: req.model_id,
        },
    )
    .await;

    tracing::info!(
        conversation_id = %conversation.id,
        teacher_id = %conversation.teacher_id,
        lesson_id = %conversation.lesson_id,
        responder = state.responder.name(),
        "💬 Chat exchange recorded"
    );

    Ok(Json(SendMessageResponse {
        reply,
        conversation,
    }))
}
