use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::course_members::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{CourseId, RosterRole};
use crate::course::application::domain::roster::RosterDiff;
use crate::course::application::ports::outgoing::{RosterRepository, RosterRepositoryError};

#[derive(Clone, Debug)]
pub struct RosterRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RosterRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Constraint tying `course_members` rows to their course.
const COURSE_FK: &str = "fk_course_members_course_id";

/// Only the course foreign key means the course vanished mid-request.
fn map_db_err(e: DbErr) -> RosterRepositoryError {
    let msg = e.to_string();

    if msg.contains(COURSE_FK) {
        RosterRepositoryError::CourseNotFound
    } else {
        RosterRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl RosterRepository for RosterRepositoryPostgres {
    async fn apply_roster_diff(
        &self,
        course_id: CourseId,
        role: RosterRole,
        diff: &RosterDiff,
    ) -> Result<(), RosterRepositoryError> {
        if diff.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if !diff.to_remove.is_empty() {
            let ids: Vec<i64> = diff.to_remove.iter().map(UserId::value).collect();
            if let Err(e) = Entity::delete_many()
                .filter(Column::CourseId.eq(course_id.value()))
                .filter(Column::Role.eq(role.as_str()))
                .filter(Column::UserId.is_in(ids))
                .exec(&txn)
                .await
            {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        if !diff.to_add.is_empty() {
            let rows = diff.to_add.iter().map(|user_id| ActiveModel {
                course_id: Set(course_id.value()),
                user_id: Set(user_id.value()),
                role: Set(role.as_str().to_string()),
            });

            if let Err(e) = Entity::insert_many(rows)
                .on_conflict(
                    OnConflict::columns([Column::CourseId, Column::UserId, Column::Role])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
            {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        txn.commit().await.map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn diff(add: &[i64], remove: &[i64]) -> RosterDiff {
        RosterDiff {
            to_add: add.iter().copied().map(UserId::from).collect(),
            to_remove: remove.iter().copied().map(UserId::from).collect(),
        }
    }

    #[tokio::test]
    async fn applies_removals_then_additions_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1), ok_exec(1)])
            .into_connection();
        let repo = RosterRepositoryPostgres::new(Arc::new(db));

        repo.apply_roster_diff(CourseId::from(1), RosterRole::Lecturer, &diff(&[3], &[1]))
            .await
            .unwrap();

        let db = Arc::try_unwrap(repo.db).unwrap();
        let sql = format!("{:?}", db.into_transaction_log());
        assert!(sql.contains("DELETE FROM"));
        assert!(sql.contains("INSERT INTO"));
        assert!(sql.contains("ON CONFLICT"));
    }

    #[tokio::test]
    async fn additions_only_skip_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(2)])
            .into_connection();
        let repo = RosterRepositoryPostgres::new(Arc::new(db));

        repo.apply_roster_diff(CourseId::from(1), RosterRole::Student, &diff(&[2, 3], &[]))
            .await
            .unwrap();

        let db = Arc::try_unwrap(repo.db).unwrap();
        let sql = format!("{:?}", db.into_transaction_log());
        assert!(!sql.contains("DELETE"));
        assert!(sql.contains("student"));
    }

    #[tokio::test]
    async fn empty_diff_touches_nothing() {
        // No exec results appended: any statement would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = RosterRepositoryPostgres::new(Arc::new(db));

        repo.apply_roster_diff(CourseId::from(1), RosterRole::Student, &RosterDiff::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn foreign_key_violation_means_course_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "error returned from database: insert or update on table \"course_members\" \
                 violates foreign key constraint \"fk_course_members_course_id\" (23503)"
                    .to_string(),
            )])
            .into_connection();
        let repo = RosterRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .apply_roster_diff(
                CourseId::from(1),
                RosterRole::Lecturer,
                &RosterDiff {
                    to_add: btreeset! { UserId::from(7) },
                    to_remove: Default::default(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RosterRepositoryError::CourseNotFound));
    }

    #[test]
    fn user_foreign_key_violation_is_not_course_not_found() {
        let err = map_db_err(DbErr::Custom(
            "error returned from database: insert or update on table \"course_members\" \
             violates foreign key constraint \"fk_course_members_user_id\" (23503)"
                .to_string(),
        ));

        assert!(
            matches!(err, RosterRepositoryError::DatabaseError(msg) if msg.contains("fk_course_members_user_id"))
        );
    }

    #[test]
    fn other_errors_stay_database_errors() {
        let err = map_db_err(DbErr::Custom("timeout".to_string()));
        assert!(matches!(err, RosterRepositoryError::DatabaseError(msg) if msg.contains("timeout")));
    }
}
