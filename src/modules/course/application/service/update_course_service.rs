use async_trait::async_trait;
use tracing::info;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::{
    incoming::use_cases::{UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase},
    outgoing::{CourseRepository, CourseRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateCourseService<R>
where
    R: CourseRepository,
{
    repository: R,
}

impl<R> UpdateCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCourseUseCase for UpdateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateCourseCommand) -> Result<Course, UpdateCourseError> {
        let course = self
            .repository
            .update_title(command.course_id(), command.title().to_string())
            .await
            .map_err(|e| match e {
                CourseRepositoryError::NotFound => UpdateCourseError::CourseNotFound,
                other => UpdateCourseError::RepositoryError(other.to_string()),
            })?;

        info!(course_id = %course.id, "Course title updated");
        Ok(course)
    }
}
