// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user directory.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// Every user, ordered by name, for the roster checkbox lists.
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;

    /// The subset of `ids` that resolve to a user row.
    async fn existing_ids(&self, ids: &BTreeSet<UserId>)
        -> Result<BTreeSet<UserId>, UserQueryError>;
}
