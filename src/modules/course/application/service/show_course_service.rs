use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::course::application::domain::entities::{CourseDetail, CourseId, RosterRole};
use crate::course::application::ports::{
    incoming::use_cases::{ShowCourseError, ShowCourseUseCase},
    outgoing::CourseQuery,
};

#[derive(Debug, Clone)]
pub struct ShowCourseService<Q, U>
where
    Q: CourseQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> ShowCourseService<Q, U>
where
    Q: CourseQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

fn repo_err(e: impl ToString) -> ShowCourseError {
    ShowCourseError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, U> ShowCourseUseCase for ShowCourseService<Q, U>
where
    Q: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, course_id: CourseId) -> Result<CourseDetail, ShowCourseError> {
        let course = self
            .query
            .find_course(course_id)
            .await
            .map_err(repo_err)?
            .ok_or(ShowCourseError::CourseNotFound)?;

        let (lessons, lecturers, students, users) = futures::try_join!(
            async { self.query.lessons_for(course_id).await.map_err(repo_err) },
            async {
                self.query
                    .roster(course_id, RosterRole::Lecturer)
                    .await
                    .map_err(repo_err)
            },
            async {
                self.query
                    .roster(course_id, RosterRole::Student)
                    .await
                    .map_err(repo_err)
            },
            async { self.users.list_users().await.map_err(repo_err) },
        )?;

        Ok(CourseDetail {
            course,
            lessons,
            lecturers,
            students,
            users,
        })
    }
}
