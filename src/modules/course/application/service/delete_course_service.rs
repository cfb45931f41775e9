use async_trait::async_trait;
use tracing::info;

use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::{
    incoming::use_cases::{DeleteCourseError, DeleteCourseUseCase},
    outgoing::CourseRepository,
};

pub struct DeleteCourseService<R>
where
    R: CourseRepository,
{
    repository: R,
}

impl<R> DeleteCourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCourseUseCase for DeleteCourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(&self, course_id: CourseId) -> Result<(), DeleteCourseError> {
        self.repository
            .delete_course(course_id)
            .await
            .map_err(DeleteCourseError::from)?;

        info!(course_id = %course_id, "Course deleted");
        Ok(())
    }
}
