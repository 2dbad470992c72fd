//! # taskdesk
//!
//! The core engine of a single-user desktop task tracker: an in-memory task
//! store, query/search/sort operations, due-date notification computation,
//! and the line-oriented flat-file format the tasks round-trip through.
//! Presentation (windows, tables, dialogs) is a host concern; hosts call
//! into this engine and render its results.
//!
//! ## Architecture
//!
//! - **Task entity** (`task`): the record itself plus `Priority`/`TaskStatus`
//! - **Codec** (`codec`): `title,description,dd/MM/yyyy,priority` lines
//! - **Store** (`store`): authoritative in-memory collection, id-addressed
//! - **Query engine** (`query`): regex filter and due-date sort over snapshots
//! - **Notification engine** (`notify`): 7-day critical window
//! - **Engine facade** (`engine`): one object composing the above
//!
//! ## Library usage
//!
//! ```
//! use taskdesk::store::TaskStore;
//! use taskdesk::task::{Priority, Task};
//!
//! let mut store = TaskStore::new();
//! let id = store.add(Task::new("Buy milk", "2L, semi-skimmed", None, Priority::High));
//! assert_eq!(store.list().len(), 1);
//! assert!(store.remove(id));
//! assert!(store.is_empty());
//! ```

pub mod codec;
pub mod engine;
pub mod error;
pub mod notify;
pub mod query;
pub mod store;
pub mod task;
