use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::map_to_course;
use super::sea_orm_entity::{course_members, courses, lessons};
use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{
    Course, CourseId, Lesson, Membership, RosterRole,
};
use crate::course::application::ports::outgoing::{CourseQuery, CourseQueryError};

#[derive(Clone, Debug)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseQueryError> {
        let rows = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(map_to_course).collect())
    }

    async fn find_course(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError> {
        let row = courses::Entity::find_by_id(course_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(map_to_course))
    }

    async fn lessons_for(&self, course_id: CourseId) -> Result<Vec<Lesson>, CourseQueryError> {
        let rows = lessons::Entity::find()
            .filter(lessons::Column::CourseId.eq(course_id.value()))
            .order_by_asc(lessons::Column::Position)
            .order_by_asc(lessons::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|m| Lesson {
                id: m.id,
                title: m.title,
                position: m.position,
            })
            .collect())
    }

    async fn roster(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<BTreeSet<UserId>, CourseQueryError> {
        let rows = course_members::Entity::find()
            .filter(course_members::Column::CourseId.eq(course_id.value()))
            .filter(course_members::Column::Role.eq(role.as_str()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| UserId::from(m.user_id)).collect())
    }

    async fn membership(
        &self,
        course_id: CourseId,
        user_id: UserId,
    ) -> Result<Membership, CourseQueryError> {
        let rows = course_members::Entity::find()
            .filter(course_members::Column::CourseId.eq(course_id.value()))
            .filter(course_members::Column::UserId.eq(user_id.value()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut membership = Membership::default();
        for row in rows {
            match row.role.as_str() {
                r if r == RosterRole::Lecturer.as_str() => membership.is_lecturer = true,
                r if r == RosterRole::Student.as_str() => membership.is_student = true,
                _ => {}
            }
        }

        Ok(membership)
    }
}
