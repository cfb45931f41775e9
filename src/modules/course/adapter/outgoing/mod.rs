mod course_query_postgres;
mod course_repository_postgres;
mod local_image_storage;
mod roster_repository_postgres;
pub mod sea_orm_entity;

pub use course_query_postgres::CourseQueryPostgres;
pub use course_repository_postgres::CourseRepositoryPostgres;
pub use local_image_storage::LocalImageStorage;
pub use roster_repository_postgres::RosterRepositoryPostgres;

use crate::course::application::domain::entities::{Course, CourseId};
use sea_orm_entity::courses;

pub(crate) fn map_to_course(model: courses::Model) -> Course {
    Course {
        id: CourseId::from(model.id),
        title: model.title,
        image: model.image,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}
