use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_to_user(model: UserModel) -> User {
    User {
        id: UserId::from(model.id),
        name: model.name,
        email: model.email,
        is_admin: model.is_admin,
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(map_to_user))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::Name)
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(map_to_user).collect())
    }

    async fn existing_ids(
        &self,
        ids: &BTreeSet<UserId>,
    ) -> Result<BTreeSet<UserId>, UserQueryError> {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let raw: Vec<i64> = ids.iter().map(UserId::value).collect();
        let found = UserEntity::find()
            .filter(UserColumn::Id.is_in(raw))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.into_iter().map(|m| UserId::from(m.id)).collect())
    }
}
