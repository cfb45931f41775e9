use async_trait::async_trait;

use crate::course::application::domain::entities::Course;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCoursesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCoursesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Course>, ListCoursesError>;
}
