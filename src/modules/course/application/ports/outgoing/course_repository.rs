use async_trait::async_trait;

use crate::course::application::domain::entities::{Course, CourseId};

#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub title: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Course not found")]
    NotFound,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create_course(&self, data: CreateCourseData)
        -> Result<Course, CourseRepositoryError>;

    async fn update_title(
        &self,
        course_id: CourseId,
        title: String,
    ) -> Result<Course, CourseRepositoryError>;

    async fn set_image(
        &self,
        course_id: CourseId,
        image_url: String,
    ) -> Result<Course, CourseRepositoryError>;

    /// Removes the course. Roster rows and lessons go with it.
    async fn delete_course(&self, course_id: CourseId) -> Result<(), CourseRepositoryError>;
}
