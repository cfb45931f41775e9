use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::course::application::domain::roster::{reconcile, RosterDiff};
use crate::course::application::ports::{
    incoming::use_cases::{UpdateRosterCommand, UpdateRosterError, UpdateRosterUseCase},
    outgoing::{CourseQuery, RosterRepository, RosterRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateRosterService<Q, U, R>
where
    Q: CourseQuery,
    U: UserQuery,
    R: RosterRepository,
{
    query: Q,
    users: U,
    repository: R,
}

impl<Q, U, R> UpdateRosterService<Q, U, R>
where
    Q: CourseQuery,
    U: UserQuery,
    R: RosterRepository,
{
    pub fn new(query: Q, users: U, repository: R) -> Self {
        Self {
            query,
            users,
            repository,
        }
    }
}

fn repo_err(e: impl ToString) -> UpdateRosterError {
    UpdateRosterError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, U, R> UpdateRosterUseCase for UpdateRosterService<Q, U, R>
where
    Q: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
    R: RosterRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateRosterCommand) -> Result<RosterDiff, UpdateRosterError> {
        let course_id = command.course_id();
        let role = command.role();

        if self
            .query
            .find_course(course_id)
            .await
            .map_err(repo_err)?
            .is_none()
        {
            return Err(UpdateRosterError::CourseNotFound);
        }

        // Reject the whole request before touching the roster
        let known = self
            .users
            .existing_ids(command.desired())
            .await
            .map_err(repo_err)?;
        let unknown: Vec<_> = command.desired().difference(&known).copied().collect();
        if !unknown.is_empty() {
            return Err(UpdateRosterError::UnknownUsers(unknown));
        }

        let current = self.query.roster(course_id, role).await.map_err(repo_err)?;
        let diff = reconcile(&current, command.desired());
        if diff.is_empty() {
            return Ok(diff);
        }

        self.repository
            .apply_roster_diff(course_id, role, &diff)
            .await
            .map_err(|e| match e {
                RosterRepositoryError::CourseNotFound => UpdateRosterError::CourseNotFound,
                other => repo_err(other),
            })?;

        info!(
            course_id = %course_id,
            role = role.as_str(),
            added = diff.to_add.len(),
            removed = diff.to_remove.len(),
            "Roster updated"
        );

        Ok(diff)
    }
}
