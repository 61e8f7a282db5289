//! Error types shared across the ffkit core library.
//!
//! All user-input validation happens before any external process is spawned;
//! once ffmpeg has been started, a failure is terminal for that operation and
//! surfaces as [`CoreError::CommandFailed`] with the captured detail.

use std::fmt;

use thiserror::Error;

/// A single rejected user-supplied field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: &'static str, problem: FieldProblem) -> Self {
        Self { field, problem }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Blank => write!(f, "'{}' is blank", self.field),
            FieldProblem::LeadingWhitespace => {
                write!(f, "'{}' starts with whitespace", self.field)
            }
            FieldProblem::NotNumeric => write!(f, "'{}' is not a whole number", self.field),
            FieldProblem::MalformedTimestamp => {
                write!(f, "'{}' is not a HH:MM:SS timestamp", self.field)
            }
        }
    }
}

/// What was wrong with a rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Blank,
    LeadingWhitespace,
    NotNumeric,
    MalformedTimestamp,
}

/// Every invalid field from one validation pass, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

/// Custom error types for ffkit
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("Input extension \"{0}\" is not supported")]
    UnsupportedInputExtension(String),

    #[error("Output extension \"{0}\" is not supported")]
    UnsupportedOutputExtension(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command {tool} failed with status {status}: {detail}")]
    CommandFailed {
        tool: String,
        status: std::process::ExitStatus,
        detail: String,
    },
}

impl CoreError {
    /// Wraps a non-empty list of field errors; panics on an empty list,
    /// which would indicate a reporting bug in the caller.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        assert!(!errors.is_empty(), "validation error with no fields");
        CoreError::Validation(FieldErrors(errors))
    }
}

/// Result type for ffkit core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
