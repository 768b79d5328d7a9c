pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_course_table;
mod m20250901_000002_create_reflection_table;
mod m20250901_000003_create_reflection_submission_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_course_table::Migration),
            Box::new(m20250901_000002_create_reflection_table::Migration),
            Box::new(m20250901_000003_create_reflection_submission_table::Migration),
        ]
    }
}
