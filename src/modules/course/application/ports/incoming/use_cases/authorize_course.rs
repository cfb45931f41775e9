use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;

/// Named precondition gating a course route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCapability {
    Create,
    View,
    Edit,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthorizeCourseError {
    #[error("Not allowed to {0:?} this course")]
    Forbidden(CourseCapability),

    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AuthorizeCourseUseCase: Send + Sync {
    /// `course_id` is required for `View` and `Edit` and ignored for `Create`.
    async fn authorize(
        &self,
        actor: UserId,
        capability: CourseCapability,
        course_id: Option<CourseId>,
    ) -> Result<(), AuthorizeCourseError>;
}
