//! Authoritative in-memory task collection.
//!
//! The [`TaskStore`] is the sole owner of the task sequence. Callers get
//! independent copies ([`TaskStore::list`], [`TaskStore::snapshot`]) and
//! address individual entries by store-assigned [`TaskId`], never by field
//! equality: two tasks with identical fields are distinct entries.
//!
//! Mutations on an absent id are no-ops reporting `false`, not errors.

use crate::task::{Task, TaskId, TaskSnapshot, TaskStatus};

/// In-memory task collection preserving insertion order.
#[derive(Debug)]
pub struct TaskStore {
    entries: Vec<(TaskId, Task)>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from decoded tasks, assigning ids in order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            store.add(task);
        }
        store
    }

    /// Append a task. No duplicate check; always succeeds.
    pub fn add(&mut self, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, task));
        id
    }

    /// Remove the entry with the given id, preserving the order of the rest.
    ///
    /// Returns `false` (not found) if the id is absent.
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the task at `id` in place, keeping its position and id.
    ///
    /// Returns `false` and changes nothing if the id is absent.
    pub fn update(&mut self, id: TaskId, task: Task) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index].1 = task;
                true
            }
            None => false,
        }
    }

    /// Set the status of the task at `id`.
    ///
    /// Returns `false` if the id is absent.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index].1.status = status;
                true
            }
            None => false,
        }
    }

    /// Borrow the task at `id`, if present.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.position(id).map(|index| &self.entries[index].1)
    }

    /// Independent copy of all tasks in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.entries.iter().map(|(_, task)| task.clone()).collect()
    }

    /// Like [`list`](Self::list) but carrying ids, for hosts addressing rows.
    pub fn snapshot(&self) -> Vec<TaskSnapshot> {
        self.entries
            .iter()
            .map(|(id, task)| TaskSnapshot {
                id: *id,
                task: task.clone(),
            })
            .collect()
    }

    /// All tasks whose title matches `title` case-insensitively and exactly
    /// (not substring). Empty vec when none match.
    pub fn search_by_title(&self, title: &str) -> Vec<Task> {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, task)| task.title.to_lowercase() == needle)
            .map(|(_, task)| task.clone())
            .collect()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
