//! Error types for taskdoc.
//!
//! Uses thiserror for derive macros. Each variant maps to one exit code.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for taskdoc operations.
#[derive(Error, Debug)]
pub enum TaskdocError {
    /// Bad arguments, missing input files, or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// A template could not be rendered for a single document.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// One or more documents in a batch failed to render or write.
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// One or more schema conformance checks failed.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl TaskdocError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskdocError::UserError(_) => exit_codes::USER_ERROR,
            TaskdocError::Template(_) => exit_codes::GENERATION_FAILURE,
            TaskdocError::GenerationError(_) => exit_codes::GENERATION_FAILURE,
            TaskdocError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for taskdoc operations.
pub type Result<T> = std::result::Result<T, TaskdocError>;
