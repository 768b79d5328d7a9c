use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub course_code: Option<String>,
    pub status: String,
    pub framework: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub reflection_due_days: Option<i32>,
    pub recurrence_days: Option<i32>,
    pub selected_days: Option<String>,
    pub custom_structure: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reflection::Entity")]
    Reflection,
}

impl Related<super::reflection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reflection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
