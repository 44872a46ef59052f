//! Platform users and the AI teacher personas.

use serde::{Deserialize, Serialize};

use super::{merge, merge_optional, Entity, TeacherId, UserId};

/// A platform user (student, parent, staff...).
///
/// Email is not unique; two users may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Free-form account type, serialised as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub board: String,
    pub class_id: String,
    pub profile_photo: Option<String>,
}

/// Insert schema for [`User`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub board: String,
    pub class_id: String,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

/// Partial update for [`User`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school: Option<String>,
    pub board: Option<String>,
    pub class_id: Option<String>,
    pub profile_photo: Option<String>,
}

impl Entity for User {
    type Id = UserId;
    type New = NewUser;
    type Patch = UserPatch;

    const KIND: &'static str = "User";

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            name: new.name,
            kind: new.kind,
            email: new.email,
            phone: new.phone,
            school: new.school,
            board: new.board,
            class_id: new.class_id,
            profile_photo: new.profile_photo,
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.school, patch.school);
        merge(&mut self.board, patch.board);
        merge(&mut self.class_id, patch.class_id);
        merge_optional(&mut self.profile_photo, patch.profile_photo);
    }
}

/// An AI teacher persona used by the chat simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub bio: String,
    pub short_bio: String,
    /// Avatar image URL.
    pub image: String,
    /// System prompt handed to the completion backend.
    pub prompt: String,
    /// Opening line of a chat; may be empty.
    pub greeting_messages: String,
    pub voice: String,
}

/// Insert schema for [`Teacher`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub bio: String,
    pub short_bio: String,
    pub image: String,
    pub prompt: String,
    pub greeting_messages: String,
    pub voice: String,
}

/// Partial update for [`Teacher`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub short_bio: Option<String>,
    pub image: Option<String>,
    pub prompt: Option<String>,
    pub greeting_messages: Option<String>,
    pub voice: Option<String>,
}

impl Entity for Teacher {
    type Id = TeacherId;
    type New = NewTeacher;
    type Patch = TeacherPatch;

    const KIND: &'static str = "Teacher";

    fn id(&self) -> &TeacherId {
        &self.id
    }

    fn from_new(id: TeacherId, new: NewTeacher) -> Self {
        Self {
            id,
            name: new.name,
            bio: new.bio,
            short_bio: new.short_bio,
            image: new.image,
            prompt: new.prompt,
            greeting_messages: new.greeting_messages,
            voice: new.voice,
        }
    }

    fn apply(&mut self, patch: TeacherPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.bio, patch.bio);
        merge(&mut self.short_bio, patch.short_bio);
        merge(&mut self.image, patch.image);
        merge(&mut self.prompt, patch.prompt);
        merge(&mut self.greeting_messages, patch.greeting_messages);
        merge(&mut self.voice, patch.voice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_type_field_round_trips_under_its_wire_name() {
        let new: NewUser = serde_json::from_value(json!({
            "name": "Asha",
            "type": "student",
            "email": "asha@example.com",
            "phone": "555-0101",
            "school": "Central High",
            "board": "CBSE",
            "class_id": "8B"
        }))
        .unwrap();
        let user = User::from_new(UserId::new("u-1"), new);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["type"], "student");
        assert_eq!(value["id"], "u-1");
        assert!(value["profile_photo"].is_null());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_teacher_patch_merges_shallowly() {
        let mut teacher = Teacher::from_new(
            TeacherId::new(1),
            NewTeacher {
                name: "Ms. Rivera".to_string(),
                bio: "Maths teacher".to_string(),
                short_bio: "Maths".to_string(),
                image: "http://img/rivera.png".to_string(),
                prompt: "You are a patient maths teacher.".to_string(),
                greeting_messages: String::new(),
                voice: "Female".to_string(),
            },
        );
        teacher.apply(TeacherPatch {
            voice: Some("Male".to_string()),
            ..Default::default()
        });
        assert_eq!(teacher.voice, "Male");
        assert_eq!(teacher.name, "Ms. Rivera");
        assert_eq!(teacher.id, TeacherId::new(1));
    }
}
