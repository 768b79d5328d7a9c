//! Pure reconciliation planning.
//!
//! A plan is computed from the course schedule and the classified current
//! reflections without touching storage, then handed to a
//! [`ReflectionStore`](super::store::ReflectionStore) which applies it in one
//! transaction.
//!
//! Protection is carried by the type of each existing reflection. Deleting a
//! reflection or moving its due date requires an [`Unprotected`] value, so a plan can
//! never contain such a change for a reflection that has a submission.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::model::{
    reflection::{NewReflection, Reflection},
    schedule::CourseSchedule,
};

/// A reflection with at least one non-empty submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Protected(Reflection);

/// A reflection without any non-empty submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Unprotected(Reflection);

impl Protected {
    /// Stored reflection.
    pub fn reflection(&self) -> &Reflection {
        &self.0
    }

    /// Moves the reflection to `sequence_number` and copies in `content_template`.
    fn refresh(&self, sequence_number: i32, content_template: &Option<Value>) -> Option<ReflectionUpdate> {
        ReflectionUpdate::diff(&self.0, sequence_number, content_template, None)
    }

    /// Moves the reflection to `sequence_number`, leaving its content untouched.
    fn renumber(&self, sequence_number: i32) -> Option<ReflectionUpdate> {
        ReflectionUpdate::diff(&self.0, sequence_number, &self.0.content_template, None)
    }
}

impl Unprotected {
    /// Stored reflection.
    pub fn reflection(&self) -> &Reflection {
        &self.0
    }

    /// Moves the reflection to `sequence_number`, copies in `content_template` and
    /// sets its due date.
    fn reschedule(
        &self,
        sequence_number: i32,
        content_template: &Option<Value>,
        due_date: DateTime<Utc>,
    ) -> Option<ReflectionUpdate> {
        ReflectionUpdate::diff(&self.0, sequence_number, content_template, Some(due_date))
    }

    /// Consumes the reflection into a deletion.
    fn retire(self) -> ReflectionDeletion {
        ReflectionDeletion { id: self.0.id }
    }
}

/// A stored reflection classified by whether it may be deleted or moved.
#[derive(Debug, Clone, PartialEq)]
pub enum ExistingReflection {
    Protected(Protected),
    Unprotected(Unprotected),
}

impl ExistingReflection {
    /// Classifies a stored reflection.
    ///
    /// # Arguments
    /// - `reflection` - Stored reflection
    /// - `has_submission` - Whether the reflection has a non-empty submission
    pub fn classify(reflection: Reflection, has_submission: bool) -> Self {
        if has_submission {
            Self::Protected(Protected(reflection))
        } else {
            Self::Unprotected(Unprotected(reflection))
        }
    }

    pub fn reflection(&self) -> &Reflection {
        match self {
            Self::Protected(protected) => protected.reflection(),
            Self::Unprotected(unprotected) => unprotected.reflection(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Protected(_))
    }

    /// Copies in `content_template`, leaving number and dates untouched.
    fn refresh_template(&self, content_template: &Option<Value>) -> Option<ReflectionUpdate> {
        let reflection = self.reflection();
        ReflectionUpdate::diff(reflection, reflection.sequence_number, content_template, None)
    }
}

/// Changed fields of one stored reflection. Unchanged fields are `None`.
///
/// A start date is never part of an update: a reflection is identified by its start
/// date within a course.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionUpdate {
    id: i32,
    sequence_number: Option<i32>,
    content_template: Option<Option<Value>>,
    due_date: Option<DateTime<Utc>>,
}

impl ReflectionUpdate {
    /// Returns the update that brings `current` to the given values, or `None` when
    /// nothing differs.
    fn diff(
        current: &Reflection,
        sequence_number: i32,
        content_template: &Option<Value>,
        due_date: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        let update = Self {
            id: current.id,
            sequence_number: (current.sequence_number != sequence_number).then_some(sequence_number),
            content_template: (current.content_template != *content_template)
                .then(|| content_template.clone()),
            due_date: due_date.filter(|due| *due != current.due_date),
        };

        (update.sequence_number.is_some()
            || update.content_template.is_some()
            || update.due_date.is_some())
        .then_some(update)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn sequence_number(&self) -> Option<i32> {
        self.sequence_number
    }

    pub fn content_template(&self) -> Option<&Option<Value>> {
        self.content_template.as_ref()
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}

/// Removal of one unprotected reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionDeletion {
    id: i32,
}

impl ReflectionDeletion {
    pub fn id(&self) -> i32 {
        self.id
    }
}

/// How a store must apply a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    /// Every reflection of the course is deleted and the inserts replace them.
    Replace,
    /// Listed deletions, updates and inserts are applied individually.
    Merge,
}

/// Writes needed to bring a course's reflections to the desired state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilePlan {
    course_id: i32,
    kind: PlanKind,
    inserts: Vec<NewReflection>,
    updates: Vec<ReflectionUpdate>,
    deletions: Vec<ReflectionDeletion>,
    protected: usize,
}

impl ReconcilePlan {
    pub fn course_id(&self) -> i32 {
        self.course_id
    }

    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    pub fn inserts(&self) -> &[NewReflection] {
        &self.inserts
    }

    pub fn updates(&self) -> &[ReflectionUpdate] {
        &self.updates
    }

    pub fn deletions(&self) -> &[ReflectionDeletion] {
        &self.deletions
    }

    /// Whether applying the plan would write nothing.
    pub fn is_noop(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty() && self.deletions.is_empty()
    }

    /// Counts of the writes in this plan.
    pub fn outcome(&self) -> ReconcileOutcome {
        ReconcileOutcome {
            created: self.inserts.len(),
            updated: self.updates.len(),
            deleted: self.deletions.len(),
            protected: self.protected,
        }
    }
}

/// Summary of an applied reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Reflections inserted.
    pub created: usize,
    /// Reflections updated in place.
    pub updated: usize,
    /// Reflections deleted.
    pub deleted: usize,
    /// Reflections that had submissions when the plan was computed.
    pub protected: usize,
}

fn new_reflection(schedule: &CourseSchedule, sequence_number: i32, start_date: NaiveDate) -> NewReflection {
    NewReflection::new(
        schedule.course_id,
        sequence_number,
        start_date,
        schedule.due_date_for(start_date),
        schedule.content_template.clone(),
    )
}

/// Plans a full regeneration of a course's reflections from its schedule.
///
/// Without protected reflections every existing reflection is replaced by one per
/// generated date. When any reflection is protected no reflection is deleted,
/// moved or renumbered: the plan only copies the course template into the existing
/// reflections.
pub fn plan_full_regeneration(
    schedule: &CourseSchedule,
    existing: Vec<ExistingReflection>,
) -> ReconcilePlan {
    let protected = existing.iter().filter(|e| e.is_protected()).count();

    if protected > 0 {
        let updates = existing
            .iter()
            .filter_map(|e| e.refresh_template(&schedule.content_template))
            .collect();

        return ReconcilePlan {
            course_id: schedule.course_id,
            kind: PlanKind::Merge,
            inserts: Vec::new(),
            updates,
            deletions: Vec::new(),
            protected,
        };
    }

    let deletions = existing
        .into_iter()
        .filter_map(|e| match e {
            ExistingReflection::Unprotected(unprotected) => Some(unprotected.retire()),
            ExistingReflection::Protected(_) => None,
        })
        .collect();

    let inserts = schedule
        .dates()
        .zip(1..)
        .map(|(date, rank)| new_reflection(schedule, rank, date))
        .collect();

    ReconcilePlan {
        course_id: schedule.course_id,
        kind: PlanKind::Replace,
        inserts,
        updates: Vec::new(),
        deletions,
        protected: 0,
    }
}

enum Slot {
    Stored(ExistingReflection),
    New,
}

/// Plans the reconciliation of a course's reflections to an explicit set of start
/// dates.
///
/// Target dates are deduplicated and order-independent. Each target date keeps or
/// gains a reflection carrying the course template; unprotected reflections on other
/// dates are deleted while protected ones are kept. The final set is renumbered
/// densely by start date. Only fields that differ from the stored values are
/// written, so planning the same targets again yields an empty plan.
pub fn plan_selection(
    schedule: &CourseSchedule,
    targets: &[NaiveDate],
    existing: Vec<ExistingReflection>,
) -> ReconcilePlan {
    let targets: BTreeSet<NaiveDate> = targets.iter().copied().collect();
    let protected = existing.iter().filter(|e| e.is_protected()).count();

    let mut slots: BTreeMap<NaiveDate, Slot> = BTreeMap::new();
    let mut deletions = Vec::new();

    for reflection in existing {
        let start_date = reflection.reflection().start_date;
        match reflection {
            ExistingReflection::Unprotected(unprotected) if !targets.contains(&start_date) => {
                deletions.push(unprotected.retire());
            }
            kept => {
                slots.insert(start_date, Slot::Stored(kept));
            }
        }
    }

    for date in &targets {
        slots.entry(*date).or_insert(Slot::New);
    }

    let mut inserts = Vec::new();
    let mut updates = Vec::new();

    for ((date, slot), rank) in slots.into_iter().zip(1..) {
        let update = match slot {
            Slot::New => {
                inserts.push(new_reflection(schedule, rank, date));
                None
            }
            Slot::Stored(ExistingReflection::Protected(protected)) => {
                if targets.contains(&date) {
                    protected.refresh(rank, &schedule.content_template)
                } else {
                    protected.renumber(rank)
                }
            }
            Slot::Stored(ExistingReflection::Unprotected(unprotected)) => unprotected.reschedule(
                rank,
                &schedule.content_template,
                schedule.due_date_for(date),
            ),
        };
        updates.extend(update);
    }

    ReconcilePlan {
        course_id: schedule.course_id,
        kind: PlanKind::Merge,
        inserts,
        updates,
        deletions,
        protected,
    }
}
