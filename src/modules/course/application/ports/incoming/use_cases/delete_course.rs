use async_trait::async_trait;

use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::outgoing::CourseRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for DeleteCourseError {
    fn from(err: CourseRepositoryError) -> Self {
        match err {
            CourseRepositoryError::NotFound => DeleteCourseError::CourseNotFound,
            CourseRepositoryError::DatabaseError(msg) => DeleteCourseError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: CourseId) -> Result<(), DeleteCourseError>;
}
