//! Course catalog: courses, the subjects inside them and their lessons.

use serde::{Deserialize, Serialize};

use super::{merge, merge_optional, CourseId, Entity, LessonId, Status, SubjectId};

/// A course offered on a board (e.g. "Algebra I" on CBSE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub course_name: String,
    pub board_name: String,
    pub status: Status,
    /// Thumbnail image URL.
    pub thumbnail: String,
}

/// Insert schema for [`Course`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub course_name: String,
    pub board_name: String,
    pub status: Status,
    pub thumbnail: String,
}

/// Partial update for [`Course`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePatch {
    pub course_name: Option<String>,
    pub board_name: Option<String>,
    pub status: Option<Status>,
    pub thumbnail: Option<String>,
}

impl Entity for Course {
    type Id = CourseId;
    type New = NewCourse;
    type Patch = CoursePatch;

    const KIND: &'static str = "Course";

    fn id(&self) -> &CourseId {
        &self.id
    }

    fn from_new(id: CourseId, new: NewCourse) -> Self {
        Self {
            id,
            course_name: new.course_name,
            board_name: new.board_name,
            status: new.status,
            thumbnail: new.thumbnail,
        }
    }

    fn apply(&mut self, patch: CoursePatch) {
        merge(&mut self.course_name, patch.course_name);
        merge(&mut self.board_name, patch.board_name);
        merge(&mut self.status, patch.status);
        merge(&mut self.thumbnail, patch.thumbnail);
    }
}

/// A subject within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub subject_name: String,
    pub subject_image: String,
    pub board: String,
    /// Owning course. Not verified to exist.
    pub course_id: CourseId,
    pub status: Status,
}

/// Insert schema for [`Subject`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
    pub subject_name: String,
    pub subject_image: String,
    pub board: String,
    pub course_id: CourseId,
    pub status: Status,
}

/// Partial update for [`Subject`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectPatch {
    pub subject_name: Option<String>,
    pub subject_image: Option<String>,
    pub board: Option<String>,
    pub course_id: Option<CourseId>,
    pub status: Option<Status>,
}

impl Entity for Subject {
    type Id = SubjectId;
    type New = NewSubject;
    type Patch = SubjectPatch;

    const KIND: &'static str = "Subject";

    fn id(&self) -> &SubjectId {
        &self.id
    }

    fn from_new(id: SubjectId, new: NewSubject) -> Self {
        Self {
            id,
            subject_name: new.subject_name,
            subject_image: new.subject_image,
            board: new.board,
            course_id: new.course_id,
            status: new.status,
        }
    }

    fn apply(&mut self, patch: SubjectPatch) {
        merge(&mut self.subject_name, patch.subject_name);
        merge(&mut self.subject_image, patch.subject_image);
        merge(&mut self.board, patch.board);
        merge(&mut self.course_id, patch.course_id);
        merge(&mut self.status, patch.status);
    }
}

/// A lesson, filed under both a subject and a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub lesson_name: String,
    pub summary: Option<String>,
    pub board: String,
    pub status: Status,
    pub subject_id: SubjectId,
    pub course_id: CourseId,
    pub thumbnail: String,
}

/// Insert schema for [`Lesson`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewLesson {
    pub lesson_name: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub board: String,
    pub status: Status,
    pub subject_id: SubjectId,
    pub course_id: CourseId,
    pub thumbnail: String,
}

/// Partial update for [`Lesson`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonPatch {
    pub lesson_name: Option<String>,
    pub summary: Option<String>,
    pub board: Option<String>,
    pub status: Option<Status>,
    pub subject_id: Option<SubjectId>,
    pub course_id: Option<CourseId>,
    pub thumbnail: Option<String>,
}

impl Entity for Lesson {
    type Id = LessonId;
    type New = NewLesson;
    type Patch = LessonPatch;

    const KIND: &'static str = "Lesson";

    fn id(&self) -> &LessonId {
        &self.id
    }

    fn from_new(id: LessonId, new: NewLesson) -> Self {
        Self {
            id,
            lesson_name: new.lesson_name,
            summary: new.summary,
            board: new.board,
            status: new.status,
            subject_id: new.subject_id,
            course_id: new.course_id,
            thumbnail: new.thumbnail,
        }
    }

    fn apply(&mut self, patch: LessonPatch) {
        merge(&mut self.lesson_name, patch.lesson_name);
        merge_optional(&mut self.summary, patch.summary);
        merge(&mut self.board, patch.board);
        merge(&mut self.status, patch.status);
        merge(&mut self.subject_id, patch.subject_id);
        merge(&mut self.course_id, patch.course_id);
        merge(&mut self.thumbnail, patch.thumbnail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn algebra() -> Course {
        let new: NewCourse = serde_json::from_value(json!({
            "course_name": "Algebra I",
            "board_name": "CBSE",
            "status": "Active",
            "thumbnail": "http://x/y.png"
        }))
        .unwrap();
        Course::from_new(CourseId::new("c-1"), new)
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut course = algebra();
        let before = course.clone();
        course.apply(CoursePatch::default());
        assert_eq!(course, before);
    }

    #[test]
    fn test_patch_changes_only_present_fields() {
        let mut course = algebra();
        course.apply(CoursePatch {
            status: Some(Status::Inactive),
            ..Default::default()
        });
        assert_eq!(course.status, Status::Inactive);
        assert_eq!(course.course_name, "Algebra I");
        assert_eq!(course.board_name, "CBSE");
        assert_eq!(course.thumbnail, "http://x/y.png");
    }

    #[test]
    fn test_new_course_requires_every_field() {
        let missing = serde_json::from_value::<NewCourse>(json!({
            "course_name": "Algebra I",
            "status": "Active",
            "thumbnail": "t"
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_lesson_summary_is_optional() {
        let new: NewLesson = serde_json::from_value(json!({
            "lesson_name": "Linear equations",
            "board": "CBSE",
            "status": "Active",
            "subject_id": "s-1",
            "course_id": "c-1",
            "thumbnail": "t"
        }))
        .unwrap();
        assert!(new.summary.is_none());

        let mut lesson = Lesson::from_new(LessonId::new("l-1"), new);
        lesson.apply(LessonPatch {
            summary: Some("Solving for x".to_string()),
            ..Default::default()
        });
        assert_eq!(lesson.summary.as_deref(), Some("Solving for x"));

        // null is indistinguishable from omission
        let patch: LessonPatch = serde_json::from_value(json!({ "summary": null })).unwrap();
        lesson.apply(patch);
        assert_eq!(lesson.summary.as_deref(), Some("Solving for x"));
    }
}
