//! Core domain models.
//!
//! Each managed record kind comes in three shapes:
//!
//! - the stored record (`Course`), which carries its id;
//! - the insert schema (`NewCourse`), which is what a create request must
//!   provide and excludes the server-assigned id;
//! - the patch (`CoursePatch`), every field optional, merged shallowly over
//!   an existing record by [`Entity::apply`].
//!
//! References between records are typed ids and are never checked for
//! existence.

pub mod catalog;
pub mod content;
pub mod ids;
pub mod people;

pub use catalog::*;
pub use content::*;
pub use ids::*;
pub use people::*;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

/// A record kind held by the store.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Primary key type.
    type Id: RecordId;
    /// Insert schema accepted by `create`.
    type New: DeserializeOwned + Send + 'static;
    /// Partial update accepted by `update`.
    type Patch: DeserializeOwned + Default + Send + 'static;

    /// Human-readable kind name used in logs and error messages.
    const KIND: &'static str;

    /// The record's primary key.
    fn id(&self) -> &Self::Id;

    /// Build the stored record from an insert and its freshly minted key.
    fn from_new(id: Self::Id, new: Self::New) -> Self;

    /// Shallow merge: fields present in `patch` overwrite, absent ones stay.
    fn apply(&mut self, patch: Self::Patch);
}

/// Publication status shared by courses, subjects and lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

/// Overwrite `slot` when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Same as [`merge`] for optional record fields: a present value replaces
/// whatever was stored, an absent one leaves it alone.
pub(crate) fn merge_optional<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
