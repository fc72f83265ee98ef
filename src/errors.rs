//! Unified application error type.
//! Parsing and loading have their own error enums so callers can tell the
//! failure kinds apart; everything else is funneled into AppError.

use chrono::NaiveDateTime;
use std::io;
use thiserror::Error;

/// Why a single input line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("There is a line with illegal length! Expected 4 fields, found {found}")]
    InvalidRowLength { found: usize },

    #[error("Invalid {field} ID: '{value}' (must be a non-negative integer)")]
    InvalidId { field: &'static str, value: String },

    #[error("Date format is not supported: '{value}'")]
    UnsupportedDateFormat { value: String },

    #[error("Start date {from} is after end date {to}")]
    DateAnomaly {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

/// Why a whole dataset was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("line {line}: Duplicate entry found for employee {employee_id} in project {project_id}")]
    DuplicateOverlap {
        line: usize,
        employee_id: u32,
        project_id: u32,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset
    // ---------------------------
    #[error("The data could not be loaded! {0}")]
    Load(#[from] LoadError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
