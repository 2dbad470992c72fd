//! Notification engine: which tasks are due soon.
//!
//! A task is *critical* when its due date falls strictly within the next
//! [`CRITICAL_WINDOW_DAYS`] days of a reference date, regardless of status.
//! The display list ([`compute_critical`]) includes completed tasks; the
//! alert flag ([`has_unresolved_critical`]) does not. The reference date is
//! captured once by the caller and passed in, so every comparison within
//! one evaluation uses the same clock.

use chrono::{Days, NaiveDate};

use crate::task::{Task, TaskStatus};

/// Size of the notification window, in days.
pub const CRITICAL_WINDOW_DAYS: u64 = 7;

/// Tasks due strictly before `today + 7 days`, regardless of status.
///
/// Dateless tasks are never critical. A task due exactly 7 days out is
/// excluded (strict `<`).
pub fn compute_critical(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let limit = window_limit(today);
    tasks
        .iter()
        .filter(|task| is_critical(task, limit))
        .cloned()
        .collect()
}

/// True iff at least one critical task is not Done.
///
/// Distinct from [`compute_critical`]: the display list can be non-empty
/// while this flag is false, when every critical task is completed.
pub fn has_unresolved_critical(tasks: &[Task], today: NaiveDate) -> bool {
    let limit = window_limit(today);
    tasks
        .iter()
        .any(|task| is_critical(task, limit) && task.status != TaskStatus::Done)
}

fn is_critical(task: &Task, limit: NaiveDate) -> bool {
    task.due_date.is_some_and(|due| due < limit)
}

fn window_limit(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(CRITICAL_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX)
}
