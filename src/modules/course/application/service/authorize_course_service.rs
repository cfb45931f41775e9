use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::{
    incoming::use_cases::{AuthorizeCourseError, AuthorizeCourseUseCase, CourseCapability},
    outgoing::CourseQuery,
};

/// Admins may do anything. Lecturers may view and edit their course.
/// Students may view it.
pub struct AuthorizeCourseService<Q, U>
where
    Q: CourseQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> AuthorizeCourseService<Q, U>
where
    Q: CourseQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

fn repo_err(e: impl ToString) -> AuthorizeCourseError {
    AuthorizeCourseError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, U> AuthorizeCourseUseCase for AuthorizeCourseService<Q, U>
where
    Q: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn authorize(
        &self,
        actor: UserId,
        capability: CourseCapability,
        course_id: Option<CourseId>,
    ) -> Result<(), AuthorizeCourseError> {
        let course_id = match (capability, course_id) {
            (CourseCapability::Create, _) => None,
            (_, Some(id)) => {
                self.query
                    .find_course(id)
                    .await
                    .map_err(repo_err)?
                    .ok_or(AuthorizeCourseError::CourseNotFound)?;
                Some(id)
            }
            (_, None) => return Err(AuthorizeCourseError::CourseNotFound),
        };

        let user = self
            .users
            .find_by_id(actor)
            .await
            .map_err(repo_err)?
            .ok_or(AuthorizeCourseError::Forbidden(capability))?;

        if user.is_admin {
            return Ok(());
        }

        let Some(course_id) = course_id else {
            return Err(AuthorizeCourseError::Forbidden(capability));
        };

        let membership = self
            .query
            .membership(course_id, actor)
            .await
            .map_err(repo_err)?;

        let allowed = match capability {
            CourseCapability::Create => false,
            CourseCapability::View => membership.is_lecturer || membership.is_student,
            CourseCapability::Edit => membership.is_lecturer,
        };

        if allowed {
            Ok(())
        } else {
            Err(AuthorizeCourseError::Forbidden(capability))
        }
    }
}
