//! Single-entity in-memory table.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::error::StoreError;
use crate::domain::{Entity, RecordId};

/// In-memory map of one entity kind, keyed by primary key.
///
/// Every method takes the lock for the duration of that call only, so each
/// call is atomic but nothing spans two calls. Concurrent updates to the same
/// record resolve as last write wins.
#[derive(Debug)]
pub struct Table<E: Entity> {
    inner: RwLock<TableInner<E>>,
}

#[derive(Debug)]
struct TableInner<E: Entity> {
    rows: HashMap<E::Id, E>,
    /// Keys in insertion order.
    order: Vec<E::Id>,
    /// Counter for sequential keys; unused by UUID keys.
    sequence: i64,
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Table<E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                rows: HashMap::new(),
                order: Vec::new(),
                sequence: 0,
            }),
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<E> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id))
            .cloned()
            .collect()
    }

    /// Records matching `predicate`, in insertion order.
    pub fn list_where(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id))
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &E::Id) -> Option<E> {
        self.inner.read().rows.get(id).cloned()
    }

    /// Store a new record under a freshly minted key and return it.
    pub fn insert(&self, new: E::New) -> E {
        let mut inner = self.inner.write();
        let id = loop {
            let candidate = E::Id::allocate(&mut inner.sequence);
            if !inner.rows.contains_key(&candidate) {
                break candidate;
            }
        };
        let record = E::from_new(id.clone(), new);
        inner.rows.insert(id.clone(), record.clone());
        inner.order.push(id);
        record
    }

    /// Merge `patch` over the stored record and return the result.
    pub fn update(&self, id: &E::Id, patch: E::Patch) -> Result<E, StoreError> {
        let mut inner = self.inner.write();
        let record = inner
            .rows
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(E::KIND, id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove the record if present. Returns whether anything was removed.
    pub fn remove(&self, id: &E::Id) -> bool {
        let mut inner = self.inner.write();
        if inner.rows.remove(id).is_some() {
            inner.order.retain(|key| key != id);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CourseId, Course, CoursePatch, NewCourse, NewTeacher, Status, Teacher, TeacherId,
    };

    fn new_course(name: &str) -> NewCourse {
        NewCourse {
            course_name: name.to_string(),
            board_name: "CBSE".to_string(),
            status: Status::Active,
            thumbnail: "http://x/y.png".to_string(),
        }
    }

    fn new_teacher(name: &str) -> NewTeacher {
        NewTeacher {
            name: name.to_string(),
            bio: String::new(),
            short_bio: String::new(),
            image: String::new(),
            prompt: String::new(),
            greeting_messages: String::new(),
            voice: "Male".to_string(),
        }
    }

    #[test]
    fn test_insert_then_get_returns_equal_record() {
        let table = Table::<Course>::new();
        let created = table.insert(new_course("Algebra I"));
        assert_eq!(table.get(&created.id), Some(created));
    }

    #[test]
    fn test_list_preserves_insertion_order_after_removal() {
        let table = Table::<Course>::new();
        let a = table.insert(new_course("A"));
        let b = table.insert(new_course("B"));
        let c = table.insert(new_course("C"));
        assert!(table.remove(&b.id));

        let names: Vec<_> = table.list().into_iter().map(|c| c.course_name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(table.get(&a.id).unwrap().course_name, "A");
        assert_eq!(table.get(&c.id).unwrap().course_name, "C");
    }

    #[test]
    fn test_update_missing_record_is_not_found_and_changes_nothing() {
        let table = Table::<Course>::new();
        table.insert(new_course("A"));
        let before = table.list();

        let err = table
            .update(&CourseId::new("nope"), CoursePatch::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "Course", .. }));
        assert_eq!(table.list(), before);
    }

    #[test]
    fn test_remove_missing_record_is_a_no_op() {
        let table = Table::<Course>::new();
        assert!(table.is_empty());
        let a = table.insert(new_course("A"));
        assert!(!table.remove(&CourseId::new("nope")));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());

        assert!(table.remove(&a.id));
        assert!(!table.remove(&a.id));
        assert!(table.is_empty());
    }

    #[test]
    fn test_teacher_keys_are_sequential_and_not_reused() {
        let table = Table::<Teacher>::new();
        let first = table.insert(new_teacher("One"));
        let second = table.insert(new_teacher("Two"));
        assert_eq!(first.id, TeacherId::new(1));
        assert_eq!(second.id, TeacherId::new(2));

        table.remove(&second.id);
        let third = table.insert(new_teacher("Three"));
        assert_eq!(third.id, TeacherId::new(3));
    }
}
