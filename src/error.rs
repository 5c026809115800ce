//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors returned by the scheduler facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Input snapshot violates a data-model precondition.
    ///
    /// Carries every detected issue, not just the first.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl ScheduleError {
    /// Validation errors behind this failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}
