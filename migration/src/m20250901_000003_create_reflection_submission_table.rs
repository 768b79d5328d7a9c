use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000002_create_reflection_table::Reflection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReflectionSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ReflectionSubmission::Id))
                    .col(integer(ReflectionSubmission::ReflectionId))
                    .col(integer(ReflectionSubmission::StudentId))
                    .col(text_null(ReflectionSubmission::Content))
                    .col(text_null(ReflectionSubmission::AiFeedback))
                    .col(double_null(ReflectionSubmission::Score))
                    .col(boolean(ReflectionSubmission::DisplayFeedback).default(false))
                    .col(timestamp_with_time_zone_null(
                        ReflectionSubmission::SubmittedAt,
                    ))
                    .col(
                        timestamp_with_time_zone(ReflectionSubmission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ReflectionSubmission::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reflection_submission_reflection_id")
                            .from(
                                ReflectionSubmission::Table,
                                ReflectionSubmission::ReflectionId,
                            )
                            .to(Reflection::Table, Reflection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One submission per student per reflection
        manager
            .create_index(
                Index::create()
                    .name("idx_reflection_submission_unique")
                    .table(ReflectionSubmission::Table)
                    .col(ReflectionSubmission::ReflectionId)
                    .col(ReflectionSubmission::StudentId)
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
                    .name("idx_reflection_submission_unique")
                    .table(ReflectionSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReflectionSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReflectionSubmission {
    Table,
    Id,
    ReflectionId,
    StudentId,
    Content,
    AiFeedback,
    Score,
    DisplayFeedback,
    SubmittedAt,
    CreatedAt,
    UpdatedAt,
}
