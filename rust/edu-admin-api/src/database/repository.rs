//! Repository traits and the in-memory implementation.
//!
//! Handlers only see the [`Repository`] trait object, so a persistent backend
//! can replace [`InMemoryStore`] without touching the route layer.

use std::fmt;

use async_trait::async_trait;

use super::error::StoreResult;
use super::table::Table;
use crate::domain::{
    ContentBlock, Conversation, Course, Entity, Lesson, LessonId, Subject, Teacher, User,
};

/// CRUD primitives for one entity kind.
///
/// Each call is atomic on its own. Nothing spans calls, so a read followed by
/// a write is not atomic.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Vec<E>;

    /// The record stored under `id`, if any.
    async fn get(&self, id: &E::Id) -> Option<E>;

    /// Assign a fresh key, store the record and return it.
    async fn create(&self, new: E::New) -> E;

    /// Merge `patch` over the existing record.
    ///
    /// Fails with `NotFound` when there is no record under `id`.
    async fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E>;

    /// Remove the record. Deleting a missing key is not an error.
    async fn delete(&self, id: &E::Id);
}

/// Content-block queries scoped to a lesson.
#[async_trait]
pub trait LessonContentStore: Send + Sync {
    /// Blocks whose `lesson_id` equals `lesson_id`, in insertion order.
    ///
    /// Blocks are not sorted by their `order` field.
    async fn list_for_lesson(&self, lesson_id: &LessonId) -> Vec<ContentBlock>;
}

/// Everything the route layer needs from storage.
pub trait Repository:
    EntityStore<User>
    + EntityStore<Course>
    + EntityStore<Subject>
    + EntityStore<Lesson>
    + EntityStore<Teacher>
    + EntityStore<ContentBlock>
    + EntityStore<Conversation>
    + LessonContentStore
    + fmt::Debug
{
}

impl<T> Repository for T where
    T: EntityStore<User>
        + EntityStore<Course>
        + EntityStore<Subject>
        + EntityStore<Lesson>
        + EntityStore<Teacher>
        + EntityStore<ContentBlock>
        + EntityStore<Conversation>
        + LessonContentStore
        + fmt::Debug
{
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Process-lifetime in-memory store: one [`Table`] per entity kind.
///
/// Construct one explicitly at startup and share it through application
/// state; there is no global instance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Table<User>,
    courses: Table<Course>,
    subjects: Table<Subject>,
    lessons: Table<Lesson>,
    teachers: Table<Teacher>,
    content_blocks: Table<ContentBlock>,
    conversations: Table<Conversation>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Gives generic code access to the table holding `E`.
pub trait HasTable<E: Entity> {
    fn table(&self) -> &Table<E>;
}

macro_rules! has_table {
    ($($entity:ty => $field:ident),+ $(,)?) => {
        $(
            impl HasTable<$entity> for InMemoryStore {
                fn table(&self) -> &Table<$entity> {
                    &self.$field
                }
            }
        )+
    };
}

has_table! {
    User => users,
    Course => courses,
    Subject => subjects,
    Lesson => lessons,
    Teacher => teachers,
    ContentBlock => content_blocks,
    Conversation => conversations,
}

#[async_trait]
impl<E> EntityStore<E> for InMemoryStore
where
    E: Entity,
    InMemoryStore: HasTable<E>,
{
    async fn list(&self) -> Vec<E> {
        self.table().list()
    }

    async fn get(&self, id: &E::Id) -> Option<E> {
        self.table().get(id)
    }

    async fn create(&self, new: E::New) -> E {
        let record = self.table().insert(new);
        tracing::debug!(entity = E::KIND, id = %record.id(), "Record created");
        record
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E> {
        let record = self.table().update(id, patch)?;
        tracing::debug!(entity = E::KIND, id = %id, "Record updated");
        Ok(record)
    }

    async fn delete(&self, id: &E::Id) {
        let removed = self.table().remove(id);
        tracing::debug!(entity = E::KIND, id = %id, removed, "Record deleted");
    }
}

#[async_trait]
impl LessonContentStore for InMemoryStore {
    async fn list_for_lesson(&self, lesson_id: &LessonId) -> Vec<ContentBlock> {
        self.content_blocks
            .list_where(|block| &block.lesson_id == lesson_id)
    }
}
