use async_trait::async_trait;

use crate::course::application::domain::entities::Course;
use crate::course::application::ports::{
    incoming::use_cases::{ListCoursesError, ListCoursesUseCase},
    outgoing::CourseQuery,
};

#[derive(Debug, Clone)]
pub struct ListCoursesService<Q>
where
    Q: CourseQuery,
{
    query: Q,
}

impl<Q> ListCoursesService<Q>
where
    Q: CourseQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCoursesUseCase for ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Course>, ListCoursesError> {
        self.query
            .list_courses()
            .await
            .map_err(|e| ListCoursesError::RepositoryError(e.to_string()))
    }
}
