//! Error types for the sticky-notes application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during note management operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// A specialized Result type for sticky-notes operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// The main error type for the sticky-notes application.
#[derive(Error, Debug)]
pub enum NoteError {
    /// A note field failed domain validation. Raised before any I/O.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Note was not found when performing an operation.
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file operation on a single note record failed.
    #[error("failed to {operation} note {id}: {source}")]
    Storage {
        operation: &'static str,
        id: String,
        #[source]
        source: io::Error,
    },

    /// The notes directory could not be created or read.
    #[error("failed to create or access directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record file exists but its content is not a valid note.
    #[error("failed to decode note file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// for mutex lock acquisition issues
    #[error("{message}")]
    LockAcquisitionFailed { message: String },
}
