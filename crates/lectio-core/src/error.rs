//! Error types for the reading plan library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

use crate::models::PlanType;

/// Error type for all reading plan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The plan's end date falls before its start date
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidDateRange { start: Date, end: Date },
    /// The resolved book range holds no chapters
    #[error("No chapters available for plan type '{plan_type}'")]
    EmptyCorpus { plan_type: PlanType },
    /// No persisted plan exists yet
    #[error("No reading plan has been created")]
    PlanNotFound,
    /// Persistence store errors, surfaced without retry
    #[error("Store I/O error: {message}")]
    StoreIo {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Chapter reference not present in the content catalog
    #[error("Unknown chapter: book {book}, chapter {chapter}")]
    UnknownChapter { book: u16, chapter: u16 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating store errors with context.
pub struct StoreErrorBuilder {
    message: String,
}

impl StoreErrorBuilder {
    /// Create a new store error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlanError {
        PlanError::StoreIo {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for store errors.
    pub fn store(message: impl Into<String>) -> StoreErrorBuilder {
        StoreErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error only signals that no plan exists yet.
    pub fn is_plan_not_found(&self) -> bool {
        matches!(self, PlanError::PlanNotFound)
    }
}

/// Specialized extension trait for store-related Results.
pub trait StoreResultExt<T> {
    /// Map store errors with a message.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanError::store(message).with_source(e))
    }
}

/// Result type alias for reading plan operations
pub type Result<T> = std::result::Result<T, PlanError>;
