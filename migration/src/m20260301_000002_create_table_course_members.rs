use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create course_members join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMembers::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMembers::UserId).big_integer().not_null())
                    // "lecturer" | "student"
                    .col(ColumnDef::new(CourseMembers::Role).string_len(16).not_null())
                    .col(
                        ColumnDef::new(CourseMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A user is listed at most once per role and course
                    .primary_key(
                        Index::create()
                            .col(CourseMembers::CourseId)
                            .col(CourseMembers::UserId)
                            .col(CourseMembers::Role),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_members_course_id")
                            .from(CourseMembers::Table, CourseMembers::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_members_user_id")
                            .from(CourseMembers::Table, CourseMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE course_members
                ADD CONSTRAINT chk_course_members_role
                CHECK (role IN ('lecturer', 'student'));
                "#,
            )
            .await?;

        // Access checks look up memberships by user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_course_members_user_id
                ON course_members (user_id, course_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_course_members_user_id")
            .await?;

        manager
            .drop_table(Table::drop().table(CourseMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CourseMembers {
    Table,
    CourseId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
