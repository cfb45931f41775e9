use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Course {
    #[schema(value_type = i64)]
    pub id: CourseId,
    pub title: String,
    /// Public URL of the banner image, if one was uploaded.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub position: i32,
}

/// Which roster a membership row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterRole {
    Lecturer,
    Student,
}

impl RosterRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterRole::Lecturer => "lecturer",
            RosterRole::Student => "student",
        }
    }

    /// Confirmation returned to the page after a roster change.
    pub fn updated_message(&self) -> &'static str {
        match self {
            RosterRole::Lecturer => "Lecturers Updated",
            RosterRole::Student => "Students Updated",
        }
    }
}

/// Roles an actor holds inside one course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    pub is_lecturer: bool,
    pub is_student: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub lessons: Vec<Lesson>,
    pub lecturers: BTreeSet<UserId>,
    pub students: BTreeSet<UserId>,
    /// Everyone who could be placed on a roster.
    pub users: Vec<User>,
}
