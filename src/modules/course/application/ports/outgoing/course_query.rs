use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{
    Course, CourseId, Lesson, Membership, RosterRole,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// All courses ordered by id.
    async fn list_courses(&self) -> Result<Vec<Course>, CourseQueryError>;

    async fn find_course(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError>;

    /// Lessons of a course in display order.
    async fn lessons_for(&self, course_id: CourseId) -> Result<Vec<Lesson>, CourseQueryError>;

    async fn roster(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<BTreeSet<UserId>, CourseQueryError>;

    async fn membership(
        &self,
        course_id: CourseId,
        user_id: UserId,
    ) -> Result<Membership, CourseQueryError>;
}
