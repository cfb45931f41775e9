use async_trait::async_trait;

use crate::course::application::domain::entities::{CourseId, RosterRole};
use crate::course::application::domain::roster::RosterDiff;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RosterRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course not found")]
    CourseNotFound,
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Applies removals and additions atomically. Adding an existing member is
    /// a no-op.
    async fn apply_roster_diff(
        &self,
        course_id: CourseId,
        role: RosterRole,
        diff: &RosterDiff,
    ) -> Result<(), RosterRepositoryError>;
}
