use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use super::map_to_course;
use super::sea_orm_entity::courses::{ActiveModel, Column, Entity};
use crate::course::application::domain::entities::{Course, CourseId};
use crate::course::application::ports::outgoing::{
    CourseRepository, CourseRepositoryError, CreateCourseData,
};

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_column(
        &self,
        course_id: CourseId,
        column: Column,
        value: String,
    ) -> Result<Course, CourseRepositoryError> {
        let rows = Entity::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(course_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(map_to_course)
            .ok_or(CourseRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create_course(
        &self,
        data: CreateCourseData,
    ) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            title: Set(data.title),
            image: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(map_to_course(created))
    }

    async fn update_title(
        &self,
        course_id: CourseId,
        title: String,
    ) -> Result<Course, CourseRepositoryError> {
        self.update_column(course_id, Column::Title, title).await
    }

    async fn set_image(
        &self,
        course_id: CourseId,
        image_url: String,
    ) -> Result<Course, CourseRepositoryError> {
        self.update_column(course_id, Column::Image, image_url).await
    }

    async fn delete_course(&self, course_id: CourseId) -> Result<(), CourseRepositoryError> {
        // course_members and lessons cascade
        let res = Entity::delete_many()
            .filter(Column::Id.eq(course_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CourseRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::adapter::outgoing::sea_orm_entity::courses;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn course_model(id: i64, title: &str, image: Option<&str>) -> courses::Model {
        let now = Utc::now().fixed_offset();
        courses::Model {
            id,
            title: title.to_string(),
            image: image.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: MockDatabase) -> CourseRepositoryPostgres {
        CourseRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn create_course_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(1, "Algebra", None)]]);

        let course = repo(db)
            .create_course(CreateCourseData {
                title: "Algebra".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(course.id, CourseId::from(1));
        assert_eq!(course.title, "Algebra");
        assert!(course.image.is_none());
    }

    #[tokio::test]
    async fn update_title_returns_updated_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(3, "Renamed", None)]]);

        let course = repo(db)
            .update_title(CourseId::from(3), "Renamed".to_string())
            .await
            .unwrap();

        assert_eq!(course.title, "Renamed");
    }

    #[tokio::test]
    async fn update_title_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<courses::Model>::new()]);

        let err = repo(db)
            .update_title(CourseId::from(3), "Renamed".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CourseRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn set_image_stores_url() {
        let url = "http://localhost/uploads/courses/course_3.png";
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(3, "Algebra", Some(url))]]);

        let course = repo(db)
            .set_image(CourseId::from(3), url.to_string())
            .await
            .unwrap();

        assert_eq!(course.image.as_deref(), Some(url));
    }

    #[tokio::test]
    async fn delete_course_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ]);

        assert!(repo(db).delete_course(CourseId::from(3)).await.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_course_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);

        let err = repo(db).delete_course(CourseId::from(3)).await.unwrap_err();

        assert!(matches!(err, CourseRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("deadlock".to_string())]);

        let err = repo(db).delete_course(CourseId::from(3)).await.unwrap_err();

        assert!(matches!(err, CourseRepositoryError::DatabaseError(msg) if msg.contains("deadlock")));
    }
}
