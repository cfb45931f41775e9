use async_trait::async_trait;

use super::create_course::{validate_title, CourseTitleError};
use crate::course::application::domain::entities::{Course, CourseId};

#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    course_id: CourseId,
    title: String,
}

impl UpdateCourseCommand {
    pub fn new(course_id: CourseId, title: Option<String>) -> Result<Self, CourseTitleError> {
        Ok(Self {
            course_id,
            title: validate_title(title.as_deref())?,
        })
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCourseUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCourseCommand) -> Result<Course, UpdateCourseError>;
}
