use async_trait::async_trait;
use tracing::info;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::{
    incoming::use_cases::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase},
    outgoing::{CourseRepository, CreateCourseData},
};

#[derive(Debug, Clone)]
pub struct CreateCourseService<R>
where
    R: CourseRepository,
{
    repository: R,
}

impl<R> CreateCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCourseUseCase for CreateCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        let data = CreateCourseData {
            title: command.title().to_string(),
        };

        let course = self
            .repository
            .create_course(data)
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;

        info!(course_id = %course.id, "Course created");
        Ok(course)
    }
}
