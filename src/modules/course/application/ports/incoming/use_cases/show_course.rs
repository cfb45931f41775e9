use async_trait::async_trait;

use crate::course::application::domain::entities::{CourseDetail, CourseId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShowCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ShowCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: CourseId) -> Result<CourseDetail, ShowCourseError>;
}
