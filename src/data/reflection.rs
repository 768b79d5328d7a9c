use async_trait::async_trait;
use sea_orm::{
    sea_query::SelectStatement, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionTrait,
};

use crate::{
    model::reflection::{NewReflection, Reflection},
    service::schedule::{
        plan::{PlanKind, ReconcilePlan, ReflectionUpdate},
        store::ReflectionStore,
    },
};

/// Repository for reflection instances.
///
/// Generic over the connection so the same primitives run against a plain connection
/// or inside a transaction.
///
/// Deletions and due date changes are conditional on the reflection having no
/// non-empty submission at the time of the write, whatever the caller observed
/// earlier.
pub struct ReflectionRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReflectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all reflections of a course ordered by start date.
    ///
    /// # Arguments
    /// - `course_id` - ID of the course
    ///
    /// # Returns
    /// - `Ok(Vec<Reflection>)` - Reflections of the course, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, course_id: i32) -> Result<Vec<Reflection>, DbErr> {
        let entities = entity::prelude::Reflection::find()
            .filter(entity::reflection::Column::CourseId.eq(course_id))
            .order_by_asc(entity::reflection::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reflection::from_entity).collect())
    }

    /// Gets all reflections of a course ordered by sequence number.
    pub async fn list_by_sequence(&self, course_id: i32) -> Result<Vec<Reflection>, DbErr> {
        let entities = entity::prelude::Reflection::find()
            .filter(entity::reflection::Column::CourseId.eq(course_id))
            .order_by_asc(entity::reflection::Column::SequenceNumber)
            .order_by_asc(entity::reflection::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reflection::from_entity).collect())
    }

    /// Gets a reflection by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Reflection))` - Reflection found
    /// - `Ok(None)` - No reflection with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reflection>, DbErr> {
        let entity = entity::prelude::Reflection::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reflection::from_entity))
    }

    /// Deletes every reflection of a course that has no submission.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted reflections
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn bulk_delete(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reflection::delete_many()
            .filter(entity::reflection::Column::CourseId.eq(course_id))
            .filter(entity::reflection::Column::Id.not_in_subquery(submitted_reflection_ids()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts reflections in one statement. Does nothing for an empty slice.
    pub async fn insert_many(&self, reflections: &[NewReflection]) -> Result<(), DbErr> {
        if reflections.is_empty() {
            return Ok(());
        }

        let now = chrono::Utc::now();
        let models = reflections
            .iter()
            .map(|reflection| entity::reflection::ActiveModel {
                course_id: ActiveValue::Set(reflection.course_id),
                sequence_number: ActiveValue::Set(reflection.sequence_number),
                display_name: ActiveValue::Set(reflection.display_name.clone()),
                start_date: ActiveValue::Set(reflection.start_date),
                due_date: ActiveValue::Set(reflection.due_date),
                content_template: ActiveValue::Set(reflection.content_template.clone()),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Reflection::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Writes the changed fields of a reflection. Fields absent from the update are
    /// left untouched.
    ///
    /// An update that moves the due date is only written while the reflection has no
    /// submission.
    ///
    /// # Returns
    /// - `Ok(())` - Reflection updated
    /// - `Err(DbErr::RecordNotUpdated)` - No reflection with the update's ID, or the
    ///   due date would move on a reflection that has a submission
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, update: &ReflectionUpdate) -> Result<(), DbErr> {
        let mut model = entity::reflection::ActiveModel {
            id: ActiveValue::Unchanged(update.id()),
            ..Default::default()
        };

        if let Some(sequence_number) = update.sequence_number() {
            model.sequence_number = ActiveValue::Set(sequence_number);
        }
        if let Some(content_template) = update.content_template() {
            model.content_template = ActiveValue::Set(content_template.clone());
        }
        if let Some(due_date) = update.due_date() {
            model.due_date = ActiveValue::Set(due_date);
        }

        let mut query = entity::prelude::Reflection::update_many()
            .set(model)
            .filter(entity::reflection::Column::Id.eq(update.id()));
        if update.due_date().is_some() {
            query = query
                .filter(entity::reflection::Column::Id.not_in_subquery(submitted_reflection_ids()));
        }

        let result = query.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Deletes a reflection by ID unless it has a submission.
    ///
    /// # Returns
    /// - `Ok(true)` - Reflection deleted
    /// - `Ok(false)` - No reflection with that ID, or it has a submission
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reflection::delete_many()
            .filter(entity::reflection::Column::Id.eq(id))
            .filter(entity::reflection::Column::Id.not_in_subquery(submitted_reflection_ids()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

/// IDs of reflections with at least one non-empty submission.
fn submitted_reflection_ids() -> SelectStatement {
    entity::prelude::ReflectionSubmission::find()
        .select_only()
        .column(entity::reflection_submission::Column::ReflectionId)
        .filter(entity::reflection_submission::Column::Content.is_not_null())
        .filter(entity::reflection_submission::Column::Content.ne(""))
        .into_query()
}

/// Error for a plan whose classification no longer matches the stored reflections.
fn stale_plan(course_id: i32) -> DbErr {
    DbErr::Custom(format!(
        "Reflections of course {} changed after the reconcile plan was computed",
        course_id
    ))
}

#[async_trait]
impl ReflectionStore for ReflectionRepository<'_> {
    async fn list(&self, course_id: i32) -> Result<Vec<Reflection>, DbErr> {
        ReflectionRepository::list(self, course_id).await
    }

    async fn apply(&self, plan: &ReconcilePlan) -> Result<(), DbErr> {
        if plan.is_noop() {
            return Ok(());
        }

        let txn = self.db.begin().await?;
        let repo = ReflectionRepository::new(&txn);

        match plan.kind() {
            PlanKind::Replace => {
                let deleted = repo.bulk_delete(plan.course_id()).await?;
                if deleted != plan.deletions().len() as u64
                    || !repo.list(plan.course_id()).await?.is_empty()
                {
                    return Err(stale_plan(plan.course_id()));
                }
            }
            PlanKind::Merge => {
                for deletion in plan.deletions() {
                    if !repo.delete(deletion.id()).await? {
                        return Err(stale_plan(plan.course_id()));
                    }
                }
            }
        }

        for update in plan.updates() {
            repo.update(update).await?;
        }

        repo.insert_many(plan.inserts()).await?;

        txn.commit().await
    }
}
