//! Query engine: filter and sort over store snapshots.
//!
//! Both operations are pure functions over an owned snapshot; they never
//! touch the store itself.

use std::cmp::Ordering;

use regex::RegexBuilder;

use crate::error::{QueryError, QueryResult};
use crate::task::Task;

/// Filter a snapshot by a case-insensitive regex matched as a substring
/// against the title and the `dd/MM/yyyy` rendering of the due date.
///
/// Dateless tasks can only match on their title. An invalid pattern is a
/// [`QueryError::InvalidPattern`], not a panic. Suited to
/// search-as-you-type: an empty pattern matches everything.
pub fn filter_by_title_or_date(tasks: &[Task], pattern: &str) -> QueryResult<Vec<Task>> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| QueryError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    Ok(tasks
        .iter()
        .filter(|task| {
            regex.is_match(&task.title)
                || task
                    .formatted_due_date()
                    .is_some_and(|date| regex.is_match(&date))
        })
        .cloned()
        .collect())
}

/// Sort tasks by due date.
///
/// The natural date order is partial because due dates may be absent; the
/// chosen total-order substitute puts dateless tasks last regardless of
/// direction. The sort is stable, so tasks sharing a date (and dateless
/// tasks among themselves) keep their snapshot order.
pub fn sort_by_due_date(mut tasks: Vec<Task>, ascending: bool) -> Vec<Task> {
    tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => {
            if ascending {
                x.cmp(&y)
            } else {
                y.cmp(&x)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::NaiveDate;

    fn task(title: &str, due: Option<(i32, u32, u32)>) -> Task {
        let due_date = due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        Task::new(title, "", due_date, Priority::Medium)
    }

    #[test]
    fn filter_matches_title_substring_case_insensitively() {
        let tasks = vec![task("Buy Milk", None), task("Rapport", None)];
        let found = filter_by_title_or_date(&tasks, "milk").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Buy Milk");
    }

    #[test]
    fn filter_matches_formatted_date() {
        let tasks = vec![
            task("a", Some((2024, 3, 9))),
            task("b", Some((2024, 4, 1))),
        ];
        let found = filter_by_title_or_date(&tasks, "03/2024").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "a");
    }

    #[test]
    fn filter_empty_pattern_matches_all() {
        let tasks = vec![task("a", None), task("b", None)];
        assert_eq!(filter_by_title_or_date(&tasks, "").unwrap().len(), 2);
    }

    #[test]
    fn filter_invalid_pattern_is_an_error() {
        let tasks = vec![task("a", None)];
        let err = filter_by_title_or_date(&tasks, "(unclosed").unwrap_err();
        assert!(matches!(err, QueryError::InvalidPattern { .. }));
    }

    #[test]
    fn sort_ascending_then_descending() {
        let tasks = vec![
            task("late", Some((2024, 6, 1))),
            task("early", Some((2024, 1, 1))),
        ];
        let asc = sort_by_due_date(tasks.clone(), true);
        assert_eq!(asc[0].title, "early");
        let desc = sort_by_due_date(tasks, false);
        assert_eq!(desc[0].title, "late");
    }

    #[test]
    fn dateless_tasks_sort_last_both_directions() {
        let tasks = vec![
            task("none", None),
            task("dated", Some((2024, 1, 1))),
        ];
        for ascending in [true, false] {
            let sorted = sort_by_due_date(tasks.clone(), ascending);
            assert_eq!(sorted.last().unwrap().title, "none");
        }
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let tasks = vec![
            task("first", Some((2024, 1, 1))),
            task("second", Some((2024, 1, 1))),
            task("third", Some((2024, 1, 1))),
        ];
        let sorted = sort_by_due_date(tasks, true);
        let titles: Vec<_> = sorted.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }
}
