//! Engine facade: top-level API for the taskdesk system.
//!
//! The `Engine` owns the task store and composes the codec, query, and
//! notification engines behind one object. Hosts (a UI or the CLI) construct
//! an `Engine` explicitly and pass it around; there is no process-wide
//! singleton store.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::codec;
use crate::error::{EngineError, TaskdeskResult};
use crate::notify;
use crate::query;
use crate::store::TaskStore;
use crate::task::{Task, TaskId, TaskSnapshot};

/// Configuration for the taskdesk engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path of the flat task file.
    pub data_file: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(codec::DEFAULT_DATA_FILE),
        }
    }
}

/// The taskdesk engine.
///
/// Owns the authoritative [`TaskStore`]; every query/notification operation
/// works on an independent snapshot of it. All operations are synchronous
/// and complete before returning.
pub struct Engine {
    config: EngineConfig,
    store: TaskStore,
}

impl Engine {
    /// Create an engine with an empty store.
    pub fn new(config: EngineConfig) -> TaskdeskResult<Self> {
        if config.data_file.as_os_str().is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "data file path must not be empty".into(),
            }
            .into());
        }
        tracing::info!(file = %config.data_file.display(), "initializing taskdesk engine");
        Ok(Self {
            config,
            store: TaskStore::new(),
        })
    }

    /// Replace the store contents from the configured file.
    ///
    /// Returns the number of records decoded. Previously held tasks (and
    /// their ids) are superseded. Statuses come back `Pending`: the file
    /// format does not carry them.
    pub fn load(&mut self) -> TaskdeskResult<usize> {
        let tasks = codec::load(&self.config.data_file)?;
        let count = tasks.len();
        self.store = TaskStore::from_tasks(tasks);
        Ok(count)
    }

    /// Write the store contents to the configured file.
    pub fn save(&self) -> TaskdeskResult<()> {
        codec::save(&self.config.data_file, &self.store.list())?;
        Ok(())
    }

    /// Append a task to the store.
    pub fn add(&mut self, task: Task) -> TaskId {
        tracing::debug!(title = %task.title, "adding task");
        self.store.add(task)
    }

    /// Remove a task. `false` if the id is absent.
    pub fn remove(&mut self, id: TaskId) -> bool {
        self.store.remove(id)
    }

    /// Replace a task in place. `false` and no change if the id is absent.
    pub fn update(&mut self, id: TaskId, task: Task) -> bool {
        self.store.update(id, task)
    }

    /// Mark a task Done. `false` if the id is absent.
    ///
    /// This is the only status transition the engine exposes to hosts;
    /// re-opening a task means creating a new one.
    pub fn mark_done(&mut self, id: TaskId) -> bool {
        self.store.set_status(id, crate::task::TaskStatus::Done)
    }

    /// Independent copy of all tasks in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Tasks with their ids, for hosts that address rows.
    pub fn snapshot(&self) -> Vec<TaskSnapshot> {
        self.store.snapshot()
    }

    /// Case-insensitive exact title search.
    pub fn search_by_title(&self, title: &str) -> Vec<Task> {
        self.store.search_by_title(title)
    }

    /// Case-insensitive regex filter over title and due-date columns.
    pub fn filter(&self, pattern: &str) -> TaskdeskResult<Vec<Task>> {
        Ok(query::filter_by_title_or_date(&self.store.list(), pattern)?)
    }

    /// Snapshot sorted by due date; dateless tasks last.
    pub fn sorted_by_due_date(&self, ascending: bool) -> Vec<Task> {
        query::sort_by_due_date(self.store.list(), ascending)
    }

    /// Tasks due within the 7-day window of `today`, regardless of status.
    pub fn notifications(&self, today: NaiveDate) -> Vec<Task> {
        notify::compute_critical(&self.store.list(), today)
    }

    /// Whether any task in the window is still not Done.
    pub fn has_alerts(&self, today: NaiveDate) -> bool {
        notify::has_unresolved_critical(&self.store.list(), today)
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The configured data file path.
    pub fn data_file(&self) -> &std::path::Path {
        &self.config.data_file
    }
}
