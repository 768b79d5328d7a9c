use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reflection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub sequence_number: i32,
    pub display_name: String,
    pub start_date: Date,
    pub due_date: DateTimeUtc,
    pub content_template: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::reflection_submission::Entity")]
    ReflectionSubmission,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::reflection_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReflectionSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
