//! Teacher persona chat simulation.
//!
//! An operator picks a [`Teacher`] and a [`Lesson`] and sends free-text
//! messages. Replies come from a [`PersonaResponder`]; the built-in
//! [`TemplateResponder`] echoes the persona and lesson names back without
//! calling any model. A completion-backed responder would implement the same
//! trait.

use async_trait::async_trait;

use crate::domain::{Lesson, Teacher};

/// Fallback persona name when no teacher is selected.
const UNKNOWN_TEACHER: &str = "the teacher";

/// Fallback lesson name when no lesson is selected.
const UNKNOWN_LESSON: &str = "selected lesson";

/// Everything a responder gets to see for one turn.
#[derive(Debug, Clone, Copy)]
pub struct ChatTurn<'a> {
    pub teacher: Option<&'a Teacher>,
    pub lesson: Option<&'a Lesson>,
    pub message: &'a str,
}

/// Produces the persona's reply to one operator message.
#[async_trait]
pub trait PersonaResponder: Send + Sync + std::fmt::Debug {
    async fn respond(&self, turn: ChatTurn<'_>) -> anyhow::Result<String>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Canned responder that splices the teacher and lesson names into a fixed
/// template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateResponder;

#[async_trait]
impl PersonaResponder for TemplateResponder {
    async fn respond(&self, turn: ChatTurn<'_>) -> anyhow::Result<String> {
        let teacher = turn.teacher.map_or(UNKNOWN_TEACHER, |t| t.name.as_str());
        let lesson = turn.lesson.map_or(UNKNOWN_LESSON, |l| l.lesson_name.as_str());
        Ok(format!(
            "This is a simulated response from {teacher}. The response will include the lesson \
             context from \"{lesson}\" once integrated with the AI backend."
        ))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

/// Opening line shown when a teacher is selected.
///
/// Uses the teacher's own greeting unless it is blank.
pub fn greeting(teacher: &Teacher) -> String {
    if teacher.greeting_messages.trim().is_empty() {
        format!(
            "Hello! I'm {}. I'll be helping you learn today.",
            teacher.name
        )
    } else {
        teacher.greeting_messages.clone()
    }
}
