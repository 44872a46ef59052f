//! Lesson content blocks and logged chat conversations.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{merge, merge_optional, BlockId, ConversationId, Entity, LessonId, TeacherId};

/// One block of lesson material.
///
/// `order` is interpreted by the client; the server never sorts on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    pub lesson_id: LessonId,
    pub order: i32,
    pub image_url: Option<String>,
    pub content: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Insert schema for [`ContentBlock`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewContentBlock {
    pub lesson_id: LessonId,
    pub order: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "timestamp_now")]
    pub created_at: String,
}

/// Partial update for [`ContentBlock`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentBlockPatch {
    pub lesson_id: Option<LessonId>,
    pub order: Option<i32>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

/// Current UTC time in the same shape JavaScript's `toISOString` produces.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Entity for ContentBlock {
    type Id = BlockId;
    type New = NewContentBlock;
    type Patch = ContentBlockPatch;

    const KIND: &'static str = "Content block";

    fn id(&self) -> &BlockId {
        &self.id
    }

    fn from_new(id: BlockId, new: NewContentBlock) -> Self {
        Self {
            id,
            lesson_id: new.lesson_id,
            order: new.order,
            image_url: new.image_url,
            content: new.content,
            created_at: new.created_at,
        }
    }

    fn apply(&mut self, patch: ContentBlockPatch) {
        merge(&mut self.lesson_id, patch.lesson_id);
        merge(&mut self.order, patch.order);
        merge_optional(&mut self.image_url, patch.image_url);
        merge_optional(&mut self.content, patch.content);
        merge(&mut self.created_at, patch.created_at);
    }
}

/// A logged question/answer exchange between an operator and a teacher persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub lesson_id: LessonId,
    pub question: String,
    pub answer: String,
    pub diagram: Option<String>,
    pub teacher_id: TeacherId,
}

/// Insert schema for [`Conversation`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewConversation {
    pub lesson_id: LessonId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub diagram: Option<String>,
    pub teacher_id: TeacherId,
}

/// Partial update for [`Conversation`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationPatch {
    pub lesson_id: Option<LessonId>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub diagram: Option<String>,
    pub teacher_id: Option<TeacherId>,
}

impl Entity for Conversation {
    type Id = ConversationId;
    type New = NewConversation;
    type Patch = ConversationPatch;

    const KIND: &'static str = "Conversation";

    fn id(&self) -> &ConversationId {
        &self.id
    }

    fn from_new(id: ConversationId, new: NewConversation) -> Self {
        Self {
            id,
            lesson_id: new.lesson_id,
            question: new.question,
            answer: new.answer,
            diagram: new.diagram,
            teacher_id: new.teacher_id,
        }
    }

    fn apply(&mut self, patch: ConversationPatch) {
        merge(&mut self.lesson_id, patch.lesson_id);
        merge(&mut self.question, patch.question);
        merge(&mut self.answer, patch.answer);
        merge_optional(&mut self.diagram, patch.diagram);
        merge(&mut self.teacher_id, patch.teacher_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_at_defaults_to_now() {
        let new: NewContentBlock =
            serde_json::from_value(json!({ "lesson_id": "L1", "order": 0 })).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&new.created_at).is_ok());
        assert!(new.content.is_none());
        assert!(new.image_url.is_none());
    }

    #[test]
    fn test_order_must_be_an_integer() {
        let result = serde_json::from_value::<NewContentBlock>(json!({
            "lesson_id": "L1",
            "order": "first"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_block_patch_keeps_unspecified_fields() {
        let mut block = ContentBlock::from_new(
            BlockId::new("b-1"),
            NewContentBlock {
                lesson_id: LessonId::new("L1"),
                order: 2,
                image_url: Some("http://img/1.png".to_string()),
                content: Some("Intro".to_string()),
                created_at: "2024-01-01T00:00:00.000Z".to_string(),
            },
        );
        block.apply(ContentBlockPatch {
            order: Some(5),
            ..Default::default()
        });
        assert_eq!(block.order, 5);
        assert_eq!(block.content.as_deref(), Some("Intro"));
        assert_eq!(block.created_at, "2024-01-01T00:00:00.000Z");
    }
}
