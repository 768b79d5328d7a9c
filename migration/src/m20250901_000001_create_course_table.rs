use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Name))
                    .col(string_null(Course::CourseCode))
                    .col(string(Course::Status).default("active"))
                    .col(string_null(Course::Framework))
                    .col(date_null(Course::StartDate))
                    .col(date_null(Course::EndDate))
                    .col(integer_null(Course::ReflectionDueDays))
                    .col(integer_null(Course::RecurrenceDays))
                    .col(string_null(Course::SelectedDays))
                    .col(json_null(Course::CustomStructure))
                    .col(
                        timestamp_with_time_zone(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Name,
    CourseCode,
    Status,
    Framework,
    StartDate,
    EndDate,
    ReflectionDueDays,
    RecurrenceDays,
    SelectedDays,
    CustomStructure,
    CreatedAt,
}
