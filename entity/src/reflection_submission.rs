use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reflection_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reflection_id: i32,
    pub student_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_feedback: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub score: Option<f64>,
    pub display_feedback: bool,
    pub submitted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reflection::Entity",
        from = "Column::ReflectionId",
        to = "super::reflection::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reflection,
}

impl Related<super::reflection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reflection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
