use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{CourseId, RosterRole};
use crate::course::application::domain::roster::{
    desired_members, RosterDiff, RosterSelectionError,
};

//
// ──────────────────────────────────────────────────────────
// Update Roster Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateRosterCommand {
    course_id: CourseId,
    role: RosterRole,
    desired: BTreeSet<UserId>,
}

impl UpdateRosterCommand {
    /// `selection_keys` are the submitted field names; each names a checked user.
    pub fn new<I, S>(
        course_id: CourseId,
        role: RosterRole,
        selection_keys: I,
    ) -> Result<Self, RosterSelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            course_id,
            role,
            desired: desired_members(selection_keys)?,
        })
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn role(&self) -> RosterRole {
        self.role
    }

    pub fn desired(&self) -> &BTreeSet<UserId> {
        &self.desired
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRosterError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Unknown users: {0:?}")]
    UnknownUsers(Vec<UserId>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateRosterUseCase: Send + Sync {
    /// Makes the roster equal to the selection and returns what changed.
    async fn execute(&self, command: UpdateRosterCommand) -> Result<RosterDiff, UpdateRosterError>;
}
