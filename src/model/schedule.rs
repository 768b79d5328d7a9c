//! Course schedule configuration as seen by the reconciler.
//!
//! A `CourseSchedule` is the read-only projection of a course row that drives
//! reflection generation: the inclusive date range, the recurrence mode, the due
//! offset and the content template copied into every generated reflection.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc, Weekday};
use serde_json::Value;
use tracing::debug;

/// Interval used when a course has no usable recurrence interval.
pub const DEFAULT_RECURRENCE_DAYS: u64 = 7;

/// Due offset used when a course has no usable due offset.
pub const DEFAULT_DUE_OFFSET_DAYS: u64 = 7;

/// Accepted weekday tokens. Matching is case-sensitive.
const WEEKDAY_TOKENS: &[(&str, Weekday)] = &[
    ("Monday", Weekday::Mon),
    ("Mon", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Tue", Weekday::Tue),
    ("Tues", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Wed", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Thu", Weekday::Thu),
    ("Thurs", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Fri", Weekday::Fri),
    ("Saturday", Weekday::Sat),
    ("Sat", Weekday::Sat),
    ("Sunday", Weekday::Sun),
    ("Sun", Weekday::Sun),
];

/// Looks up a single weekday token.
///
/// # Returns
/// - `Some(Weekday)` - Token is a full English weekday name or a recognized abbreviation
/// - `None` - Token is not recognized
pub fn weekday_from_token(token: &str) -> Option<Weekday> {
    WEEKDAY_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, weekday)| *weekday)
}

/// Parses a comma-separated weekday selection such as `"Mon, Wed,Friday"`.
///
/// Unrecognized tokens are dropped from the selection rather than rejected.
pub fn parse_weekdays(selection: &str) -> HashSet<Weekday> {
    selection
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let weekday = weekday_from_token(token);
            if weekday.is_none() {
                debug!("Ignoring unrecognized weekday token '{}'", token);
            }
            weekday
        })
        .collect()
}

/// How reflection start dates recur within the course date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// Every `n` days starting at the course start date.
    Interval(u64),
    /// Every day in the range whose weekday is selected.
    Weekdays(HashSet<Weekday>),
}

/// Schedule configuration of a single course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSchedule {
    /// ID of the course this schedule belongs to.
    pub course_id: i32,
    /// First day of the course. `None` while the course is not configured.
    pub start_date: Option<NaiveDate>,
    /// Last day of the course, inclusive. `None` while the course is not configured.
    pub end_date: Option<NaiveDate>,
    /// Recurrence mode used to generate start dates.
    pub recurrence: Recurrence,
    /// Days between a reflection's start date and its due date.
    pub due_offset_days: u64,
    /// Opaque template copied into every generated reflection.
    pub content_template: Option<Value>,
}

impl CourseSchedule {
    /// Converts a course entity into its schedule at the repository boundary.
    ///
    /// A non-blank `selected_days` selects weekday mode; otherwise interval mode is
    /// used. Missing or non-positive intervals fall back to
    /// [`DEFAULT_RECURRENCE_DAYS`], and missing or negative due offsets to
    /// [`DEFAULT_DUE_OFFSET_DAYS`].
    pub fn from_entity(entity: &entity::course::Model) -> Self {
        let recurrence = match entity
            .selected_days
            .as_deref()
            .filter(|days| !days.trim().is_empty())
        {
            Some(days) => Recurrence::Weekdays(parse_weekdays(days)),
            None => Recurrence::Interval(
                entity
                    .recurrence_days
                    .filter(|days| *days > 0)
                    .map(|days| days as u64)
                    .unwrap_or(DEFAULT_RECURRENCE_DAYS),
            ),
        };

        Self {
            course_id: entity.id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            recurrence,
            due_offset_days: entity
                .reflection_due_days
                .filter(|days| *days >= 0)
                .map(|days| days as u64)
                .unwrap_or(DEFAULT_DUE_OFFSET_DAYS),
            content_template: entity.custom_structure.clone(),
        }
    }

    /// Due date of a reflection starting on `start_date`: midnight UTC, `due_offset_days` later.
    pub fn due_date_for(&self, start_date: NaiveDate) -> DateTime<Utc> {
        start_date
            .checked_add_days(Days::new(self.due_offset_days))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}
