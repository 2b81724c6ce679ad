//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook-related
    // ---------------------------
    #[error("Unable to read workbook: {0}")]
    Workbook(String),

    #[error("Unexpected course sheet layout: {0}")]
    UnexpectedLayout(String),

    #[error("Missing course field: {0}")]
    MissingField(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Year {year} is outside the selectable range {first}..={last}")]
    InvalidYear { year: i32, first: i32, last: i32 },

    #[error("Invalid date selection mode: {0}")]
    InvalidMode(String),

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

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Workbook(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
