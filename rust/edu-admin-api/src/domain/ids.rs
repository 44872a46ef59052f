//! Typed record identifiers.
//!
//! Cross-entity references (a lesson's `subject_id`, a block's `lesson_id`)
//! are stored as these newtypes so a course id can never be passed where a
//! lesson id is expected. Nothing checks that a referenced record exists.

use std::fmt;
use std::hash::Hash;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// A primary key that the store can mint for a new record.
pub trait RecordId: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Produce the next key. `sequence` is the owning table's counter; keys
    /// that are not sequential ignore it.
    fn allocate(sequence: &mut i64) -> Self;
}

/// Declares a UUID-backed string identifier.
///
/// The wrapped value is kept as a string: ids arriving in request bodies are
/// free-form and an unknown id is a lookup miss, not a parse failure.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl RecordId for $name {
            fn allocate(_sequence: &mut i64) -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a [`User`](super::User).
    UserId
);
uuid_id!(
    /// Identifier of a [`Course`](super::Course).
    CourseId
);
uuid_id!(
    /// Identifier of a [`Subject`](super::Subject).
    SubjectId
);
uuid_id!(
    /// Identifier of a [`Lesson`](super::Lesson).
    LessonId
);
uuid_id!(
    /// Identifier of a [`ContentBlock`](super::ContentBlock).
    BlockId
);
uuid_id!(
    /// Identifier of a [`Conversation`](super::Conversation).
    ConversationId
);

/// Identifier of a [`Teacher`](super::Teacher): a serial integer starting at 1.
///
/// Deserializes from any JSON number with no fractional part, so `1.0`
/// addresses the same teacher as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeacherId(i64);

impl TeacherId {
    /// Wrap an existing identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<Number> for TeacherId {
    type Error = String;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "only integral values inside the i64 range are converted"
    )]
    fn try_from(number: Number) -> Result<Self, Self::Error> {
        if let Some(value) = number.as_i64() {
            return Ok(Self(value));
        }
        match number.as_f64() {
            Some(value)
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
            {
                Ok(Self(value as i64))
            }
            _ => Err(format!("invalid teacher id {number}, expected an integer")),
        }
    }
}

impl<'de> Deserialize<'de> for TeacherId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        Self::try_from(number).map_err(de::Error::custom)
    }
}

impl RecordId for TeacherId {
    fn allocate(sequence: &mut i64) -> Self {
        *sequence += 1;
        Self(*sequence)
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_ids_count_up_from_one() {
        let mut sequence = 0;
        assert_eq!(TeacherId::allocate(&mut sequence), TeacherId::new(1));
        assert_eq!(TeacherId::allocate(&mut sequence), TeacherId::new(2));
        assert_eq!(sequence, 2);
    }

    #[test]
    fn test_uuid_ids_are_distinct_and_ignore_sequence() {
        let mut sequence = 0;
        let a = CourseId::allocate(&mut sequence);
        let b = CourseId::allocate(&mut sequence);
        assert_ne!(a, b);
        assert_eq!(sequence, 0);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let lesson = LessonId::new("L1");
        assert_eq!(serde_json::to_string(&lesson).unwrap(), "\"L1\"");
        let teacher: TeacherId = serde_json::from_str("7").unwrap();
        assert_eq!(teacher.get(), 7);
        assert_eq!(serde_json::to_string(&teacher).unwrap(), "7");
    }

    #[test]
    fn test_teacher_id_accepts_integral_numbers_only() {
        let whole: TeacherId = serde_json::from_str("1.0").unwrap();
        assert_eq!(whole, TeacherId::new(1));

        for bad in ["1.5", "\"1\"", "null", "1e300"] {
            assert!(serde_json::from_str::<TeacherId>(bad).is_err(), "{bad}");
        }
    }
}
