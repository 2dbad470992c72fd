//! Rich diagnostic error types for the taskdesk engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly what went wrong and
//! how to fix it. No error here is fatal to the process: the host surfaces them
//! as messages and keeps running.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the taskdesk engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, sources) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum TaskdeskError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

/// Result type used across the crate.
pub type TaskdeskResult<T> = std::result::Result<T, TaskdeskError>;

// ---------------------------------------------------------------------------
// Codec errors
// ---------------------------------------------------------------------------

/// Errors from loading or saving the task file.
///
/// Unparsable dates and malformed lines are NOT errors: the codec absorbs
/// them (null date, skipped line) per the file-format contract. Only I/O
/// failures surface here.
#[derive(Debug, Error, Diagnostic)]
pub enum CodecError {
    #[error("failed to read task file {path}")]
    #[diagnostic(
        code(taskdesk::codec::read),
        help(
            "Check that the file exists and is readable. A fresh install has no \
             task file yet; save once to create it."
        )
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write task file {path}")]
    #[diagnostic(
        code(taskdesk::codec::write),
        help("Check that the target directory exists and is writable.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// Errors specific to the query engine.
#[derive(Debug, Error, Diagnostic)]
pub enum QueryError {
    #[error("invalid filter pattern `{pattern}`: {message}")]
    #[diagnostic(
        code(taskdesk::query::invalid_pattern),
        help(
            "Filter patterns are case-insensitive regular expressions matched \
             against the title and due-date columns. Escape special characters \
             like `(` and `[` to match them literally."
        )
    )]
    InvalidPattern { pattern: String, message: String },
}

/// Result type for query operations.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// Errors from engine configuration and lifecycle.
#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("invalid engine configuration: {message}")]
    #[diagnostic(
        code(taskdesk::engine::invalid_config),
        help("Check the EngineConfig fields, in particular the data file path.")
    )]
    InvalidConfig { message: String },
}
