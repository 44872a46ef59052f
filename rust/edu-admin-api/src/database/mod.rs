//! Storage layer.
//!
//! The authoritative in-process state for every entity kind. There is no
//! persistence, no transactions and no index beyond the primary key; the
//! [`Repository`] trait is the seam where a database-backed store would plug
//! in.

pub mod error;
pub mod repository;
pub mod table;

pub use error::{StoreError, StoreResult};
pub use repository::{EntityStore, HasTable, InMemoryStore, LessonContentStore, Repository};
pub use table::Table;
