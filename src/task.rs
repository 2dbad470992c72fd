//! Task domain model: the task record and its enumerated fields.
//!
//! A [`Task`] is a plain mutable record with no behavior beyond display
//! formatting. Identity is NOT derived from field values: the store assigns
//! each entry a [`TaskId`], so two tasks with identical fields are distinct
//! entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire and display format for due dates (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Task priority. Persisted as the French labels `Haute`/`Moyenne`/`Basse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// The label written to the task file.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Haute",
            Priority::Medium => "Moyenne",
            Priority::Low => "Basse",
        }
    }

    /// Parse a priority token, case-insensitively.
    ///
    /// Accepts the persisted French labels and their English equivalents.
    /// Returns `None` for anything else; the codec maps that to `Medium`
    /// rather than dropping the record.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "haute" | "high" => Some(Priority::High),
            "moyenne" | "medium" => Some(Priority::Medium),
            "basse" | "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion status. Never persisted: every decoded task is `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Done,
}

impl TaskStatus {
    /// Display label, matching the original tool's French wording.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "En cours",
            TaskStatus::Done => "Terminée",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Store-assigned identity for a task entry.
///
/// Ids are unique within one store instance and are never reused after a
/// removal. They carry the object-identity semantics that field equality
/// cannot: `remove`/`update` address exactly one entry even when several
/// tasks have identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        TaskId(raw)
    }

    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task record.
///
/// `due_date` is `None` when the persisted token failed to parse; such tasks
/// sort last and are ignored by notification checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
            status: TaskStatus::Pending,
        }
    }

    /// The due date rendered as `dd/MM/yyyy`, or `None` for dateless tasks.
    pub fn formatted_due_date(&self) -> Option<String> {
        self.due_date.map(|d| d.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.formatted_due_date();
        write!(
            f,
            "{} - {} - Date: {}",
            self.title,
            self.status,
            date.as_deref().unwrap_or("?")
        )
    }
}

/// A task paired with its store id, for hosts that need to address rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub task: Task,
}
