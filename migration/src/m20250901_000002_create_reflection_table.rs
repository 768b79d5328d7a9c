use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reflection::Table)
                    .if_not_exists()
                    .col(pk_auto(Reflection::Id))
                    .col(integer(Reflection::CourseId))
                    .col(integer(Reflection::SequenceNumber))
                    .col(string(Reflection::DisplayName))
                    .col(date(Reflection::StartDate))
                    .col(timestamp_with_time_zone(Reflection::DueDate))
                    .col(json_null(Reflection::ContentTemplate))
                    .col(
                        timestamp_with_time_zone(Reflection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reflection_course_id")
                            .from(Reflection::Table, Reflection::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One reflection per course per calendar date
        manager
            .create_index(
                Index::create()
                    .name("idx_reflection_course_start_date")
                    .table(Reflection::Table)
                    .col(Reflection::CourseId)
                    .col(Reflection::StartDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reflection_course_start_date")
                    .table(Reflection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reflection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reflection {
    Table,
    Id,
    CourseId,
    SequenceNumber,
    DisplayName,
    StartDate,
    DueDate,
    ContentTemplate,
    CreatedAt,
}
