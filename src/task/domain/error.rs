//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or updating domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// A required field was absent from the submitted payload.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// The unit test language identifier is empty after trimming.
    #[error("unit test language must not be empty")]
    EmptyLanguage,

    /// The score factor is negative, infinite, or not a number.
    #[error("invalid score factor {0}, expected a finite non-negative number")]
    InvalidScoreFactor(f64),
}

/// Error returned while parsing task or unit test identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(pub String);
