//! End-to-end integration tests for the taskdesk engine.
//!
//! These tests exercise the public API the way a host would: mutate through
//! the store or engine facade, then query, sort, and compute notifications
//! over snapshots.

use chrono::NaiveDate;

use taskdesk::engine::{Engine, EngineConfig};
use taskdesk::notify;
use taskdesk::query;
use taskdesk::store::TaskStore;
use taskdesk::task::{Priority, Task, TaskStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task(title: &str, due: Option<NaiveDate>) -> Task {
    Task::new(title, "", due, Priority::Medium)
}

#[test]
fn added_then_removed_task_is_gone_from_list() {
    let mut store = TaskStore::new();
    store.add(task("keep", None));
    let id = store.add(task("drop", None));
    assert!(store.remove(id));
    let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["keep"]);
}

#[test]
fn search_by_title_is_exact_not_substring() {
    let mut store = TaskStore::new();
    store.add(task("Buy Milk", None));
    store.add(task("Buy Milk Today", None));
    let found = store.search_by_title("buy milk");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Buy Milk");
}

#[test]
fn critical_window_boundary_dates() {
    // today = 2024-01-01: due 2024-01-05 is in, 2024-01-10 is out, and the
    // boundary at exactly 7 days (2024-01-08) is out as well.
    let today = date(2024, 1, 1);
    let tasks = vec![
        task("soon", Some(date(2024, 1, 5))),
        task("boundary", Some(date(2024, 1, 8))),
        task("later", Some(date(2024, 1, 10))),
    ];
    let critical = notify::compute_critical(&tasks, today);
    let titles: Vec<_> = critical.into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["soon"]);
}

#[test]
fn alert_flag_clears_when_all_critical_tasks_are_done() {
    let today = date(2024, 1, 1);
    let mut done = task("soon", Some(date(2024, 1, 3)));
    done.status = TaskStatus::Done;
    let tasks = vec![done, task("later", Some(date(2024, 6, 1)))];

    // Display list still shows the completed critical task...
    assert_eq!(notify::compute_critical(&tasks, today).len(), 1);
    // ...but the alert flag is down.
    assert!(!notify::has_unresolved_critical(&tasks, today));
}

#[test]
fn sort_places_dateless_tasks_last_regardless_of_input_order() {
    let permutations = [
        vec![task("none", None), task("a", Some(date(2024, 1, 1)))],
        vec![task("a", Some(date(2024, 1, 1))), task("none", None)],
    ];
    for tasks in permutations {
        for ascending in [true, false] {
            let sorted = query::sort_by_due_date(tasks.clone(), ascending);
            assert_eq!(sorted.last().unwrap().title, "none");
        }
    }
}

#[test]
fn filter_reaches_title_and_date_columns_only() {
    let mut needle_in_description = task("plain", Some(date(2024, 5, 1)));
    needle_in_description.description = "milk".into();
    let tasks = vec![needle_in_description, task("Buy milk", None)];

    let found = query::filter_by_title_or_date(&tasks, "milk").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Buy milk");
}

#[test]
fn engine_facade_mutations_flow_through_snapshots() {
    let mut engine = Engine::new(EngineConfig::default()).unwrap();
    let today = date(2024, 1, 1);

    let soon = engine.add(task("soon", Some(date(2024, 1, 4))));
    engine.add(task("later", Some(date(2024, 2, 1))));
    assert_eq!(engine.len(), 2);
    assert!(engine.has_alerts(today));

    assert!(engine.mark_done(soon));
    assert!(!engine.has_alerts(today));
    assert_eq!(engine.notifications(today).len(), 1);

    let replaced = task("renamed", Some(date(2024, 1, 4)));
    assert!(engine.update(soon, replaced));
    assert_eq!(engine.list()[0].title, "renamed");
    // update installed a fresh Pending task, so the alert is back.
    assert!(engine.has_alerts(today));

    assert!(engine.remove(soon));
    assert!(!engine.remove(soon));
    assert_eq!(engine.len(), 1);
}

#[test]
fn engine_filter_propagates_invalid_pattern() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    assert!(engine.filter("[unclosed").is_err());
    assert!(engine.filter("").is_ok());
}
