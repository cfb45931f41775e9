pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20260301_000001_create_table_courses;
mod m20260301_000002_create_table_course_members;
mod m20260301_000003_create_table_lessons;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20260301_000001_create_table_courses::Migration),
            Box::new(m20260301_000002_create_table_course_members::Migration),
            Box::new(m20260301_000003_create_table_lessons::Migration),
        ]
    }
}
