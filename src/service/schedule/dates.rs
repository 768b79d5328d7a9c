//! Lazy generation of reflection start dates.

use std::collections::HashSet;
use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::model::schedule::{CourseSchedule, Recurrence};

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
    Every(u64),
    OnWeekdays(&'a HashSet<Weekday>),
}

/// Ascending iterator over the start dates of a course schedule.
///
/// Produced by [`CourseSchedule::dates`]. Yields nothing while the schedule has no
/// date range, when the range is inverted, or when weekday mode selects no day.
#[derive(Debug, Clone)]
pub struct ReflectionDates<'a> {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Step<'a>,
}

impl<'a> ReflectionDates<'a> {
    fn empty() -> Self {
        Self {
            next: None,
            end: NaiveDate::MIN,
            step: Step::Every(1),
        }
    }
}

impl Iterator for ReflectionDates<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        match self.step {
            Step::Every(days) => {
                let current = self.next.filter(|date| *date <= self.end)?;
                self.next = current.checked_add_days(Days::new(days));
                Some(current)
            }
            Step::OnWeekdays(weekdays) => loop {
                let current = self.next.filter(|date| *date <= self.end)?;
                self.next = current.succ_opt();
                if weekdays.contains(&current.weekday()) {
                    return Some(current);
                }
            },
        }
    }
}

impl FusedIterator for ReflectionDates<'_> {}

impl CourseSchedule {
    /// Returns the start dates of this schedule in ascending order.
    ///
    /// Interval mode starts at the course start date and advances by the interval
    /// until it passes the end date. Weekday mode walks every day of the inclusive
    /// range and keeps those whose weekday is selected. Calling this again restarts
    /// the sequence.
    pub fn dates(&self) -> ReflectionDates<'_> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return ReflectionDates::empty();
        };
        if start > end {
            return ReflectionDates::empty();
        }

        let step = match &self.recurrence {
            Recurrence::Interval(days) => Step::Every((*days).max(1)),
            Recurrence::Weekdays(weekdays) if weekdays.is_empty() => {
                return ReflectionDates::empty();
            }
            Recurrence::Weekdays(weekdays) => Step::OnWeekdays(weekdays),
        };

        ReflectionDates {
            next: Some(start),
            end,
            step,
        }
    }
}
