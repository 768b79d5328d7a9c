use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::{
        course::{ConfigureCourseParam, Course, CreateCourseParam},
        schedule::CourseSchedule,
    },
    service::schedule::store::CourseConfigStore,
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new, unconfigured course with status `active`.
    ///
    /// # Arguments
    /// - `param` - Name and optional course code
    ///
    /// # Returns
    /// - `Ok(Course)` - Created course
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(param.name),
            course_code: ActiveValue::Set(param.course_code),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Gets a course by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Updates the schedule configuration of a course.
    ///
    /// Only fields present in `param` are written. A weekday selection is stored as a
    /// comma-joined string.
    ///
    /// # Arguments
    /// - `id` - ID of the course to configure
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Updated course
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn configure(
        &self,
        id: i32,
        param: ConfigureCourseParam,
    ) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.into();

        if let Some(framework) = param.framework {
            active_model.framework = ActiveValue::Set(framework);
        }
        if let Some(start_date) = param.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = param.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(reflection_due_days) = param.reflection_due_days {
            active_model.reflection_due_days = ActiveValue::Set(reflection_due_days);
        }
        if let Some(recurrence_days) = param.recurrence_days {
            active_model.recurrence_days = ActiveValue::Set(recurrence_days);
        }
        if let Some(selected_days) = param.selected_days {
            active_model.selected_days = ActiveValue::Set(selected_days.map(|days| days.join(",")));
        }
        if let Some(custom_structure) = param.custom_structure {
            active_model.custom_structure = ActiveValue::Set(custom_structure);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Course::from_entity(entity)))
    }
}

#[async_trait]
impl CourseConfigStore for CourseRepository<'_> {
    async fn read(&self, course_id: i32) -> Result<Option<CourseSchedule>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await?;

        Ok(entity.as_ref().map(CourseSchedule::from_entity))
    }
}
