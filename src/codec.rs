//! Line codec and flat-file persistence for task records.
//!
//! One task per line, comma-separated, no quoting or escaping:
//!
//! ```text
//! title,description,dd/MM/yyyy,priority
//! ```
//!
//! The format carries three deliberate fragilities inherited from the file's
//! original producers, preserved here as documented contract rather than
//! silently fixed:
//!
//! - **Status is not persisted.** Every decoded task comes back `Pending`,
//!   so completion state is lost on each save/reload cycle.
//! - **The header is data.** [`save`] writes a header line whose four tokens
//!   make it indistinguishable from a record, so [`load`] decodes it as a
//!   bogus `Titre` task with no due date.
//! - **No escaping.** An embedded comma in a title or description shifts the
//!   field boundaries and the line is silently skipped (or misread).

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{CodecError, CodecResult};
use crate::task::{DATE_FORMAT, Priority, Task, TaskStatus};

/// Header line written by [`save`].
pub const HEADER: &str = "Titre,Description,Date d'échéance,Priorité";

/// Default task file name.
pub const DEFAULT_DATA_FILE: &str = "tasklistframe.csv";

/// A line is a record iff it splits into exactly this many fields.
const FIELD_COUNT: usize = 4;

/// Encode one task as a file line. Status is intentionally omitted.
///
/// A `None` due date is written as an empty token, which decodes back to
/// `None` (empty strings never parse as `dd/MM/yyyy`).
pub fn encode_line(task: &Task) -> String {
    format!(
        "{},{},{},{}",
        task.title,
        task.description,
        task.formatted_due_date().unwrap_or_default(),
        task.priority.label()
    )
}

/// Decode one file line into a task.
///
/// Returns `None` for lines that do not split into exactly 4 fields; such
/// lines are the caller's to skip. An unparsable date token yields a task
/// with `due_date = None` rather than dropping the record, and an
/// unrecognized priority token falls back to `Medium`. Decoded tasks are
/// always `Pending`.
pub fn decode_line(line: &str) -> Option<Task> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }
    let due_date = NaiveDate::parse_from_str(parts[2], DATE_FORMAT).ok();
    if due_date.is_none() && !parts[2].is_empty() {
        tracing::debug!(token = parts[2], "unparsable due date, keeping record without one");
    }
    let priority = Priority::parse(parts[3]).unwrap_or(Priority::Medium);
    Some(Task {
        title: parts[0].to_string(),
        description: parts[1].to_string(),
        due_date,
        priority,
        status: TaskStatus::Pending,
    })
}

/// Write the header and one line per task to `path`, replacing the file.
///
/// The file handle is scoped to this call and released before return, even
/// on error. I/O failure surfaces as [`CodecError::Write`], never a panic.
pub fn save(path: &Path, tasks: &[Task]) -> CodecResult<()> {
    let mut out = String::with_capacity(HEADER.len() + 1 + tasks.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for task in tasks {
        out.push_str(&encode_line(task));
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| CodecError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(count = tasks.len(), path = %path.display(), "saved tasks");
    Ok(())
}

/// Read `path` and decode every 4-field line as a task.
///
/// Malformed lines (wrong field count) are skipped without aborting the
/// rest of the read; only a trace-level log records them. There is no
/// header detection: a header line present in the file decodes as a record
/// (see the module docs). A missing or unreadable file surfaces as
/// [`CodecError::Read`].
pub fn load(path: &Path) -> CodecResult<Vec<Task>> {
    let text = fs::read_to_string(path).map_err(|source| CodecError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let mut tasks = Vec::new();
    for line in text.lines() {
        match decode_line(line) {
            Some(task) => tasks.push(task),
            None => tracing::debug!(line, "skipping malformed record"),
        }
    }
    tracing::info!(count = tasks.len(), path = %path.display(), "loaded tasks");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn encode_formats_date_and_priority_label() {
        let task = Task::new("Rapport", "chapitre 3", Some(date(2024, 3, 9)), Priority::High);
        assert_eq!(encode_line(&task), "Rapport,chapitre 3,09/03/2024,Haute");
    }

    #[test]
    fn decode_accepts_exactly_four_fields() {
        assert!(decode_line("Title,OnlyTwoFields").is_none());
        assert!(decode_line("a,b,c,d,e").is_none());
        assert!(decode_line("a,b,01/01/2024,Basse").is_some());
    }

    #[test]
    fn decode_keeps_record_on_bad_date() {
        let task = decode_line("Rapport,,pas-une-date,Haute").unwrap();
        assert_eq!(task.title, "Rapport");
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn decode_always_yields_pending() {
        let task = decode_line("Rapport,,09/03/2024,Haute").unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn decode_unknown_priority_falls_back_to_medium() {
        let task = decode_line("Rapport,,09/03/2024,urgent").unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn header_splits_into_four_fields() {
        // The header is indistinguishable from a record; load() relies on this
        // staying true.
        let bogus = decode_line(HEADER).unwrap();
        assert_eq!(bogus.title, "Titre");
        assert_eq!(bogus.due_date, None);
    }

    #[test]
    fn none_due_date_round_trips_through_empty_token() {
        let task = Task::new("Misc", "", None, Priority::Low);
        let decoded = decode_line(&encode_line(&task)).unwrap();
        assert_eq!(decoded.due_date, None);
        assert_eq!(decoded.priority, Priority::Low);
    }
}
