//! Error types for the estimator library.
//!
//! The validation variants double as user-facing notices: their `Display`
//! text is what the builder surfaces when an operation is refused.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::StageId;

/// Comprehensive error type for all estimator operations.
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Submission attempted with a blank project name
    #[error("Please enter a project name")]
    EmptyProjectName,
    /// Submission attempted while a stage is missing a required field
    #[error("Please complete all stage details: stage {position} is missing {field}")]
    IncompleteStage { position: usize, field: &'static str },
    /// Removal would leave the scenario without stages
    #[error("At least one stage is required")]
    LastStage,
    /// Stage not found for the given ID
    #[error("Stage with ID {id} not found")]
    StageNotFound { id: StageId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Pending prediction was cancelled before it produced results
    #[error("Prediction was cancelled")]
    Cancelled,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
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
    pub fn with_reason(self, reason: impl Into<String>) -> EstimatorError {
        EstimatorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl EstimatorError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a user-correctable notice rather than a fault.
    ///
    /// Notices leave the scenario untouched and are shown to the user as-is.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            Self::EmptyProjectName
                | Self::IncompleteStage { .. }
                | Self::LastStage
                | Self::StageNotFound { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
