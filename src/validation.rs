//! Input validation for print-queue snapshots.
//!
//! Checks the data-model preconditions before any allocation runs.
//! Detects:
//! - Jobs with a negative page count
//! - Resources with a negative capacity
//!
//! Duplicate IDs are allowed: the allocator works on positions, not IDs.

use std::fmt;

use crate::models::{Job, Resource};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job asks for fewer than zero pages.
    NegativePages,
    /// A resource offers fewer than zero pages.
    NegativeCapacity,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a job/resource snapshot.
///
/// Checks:
/// 1. Every job has `pages >= 0`
/// 2. Every resource has `capacity >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// jobs first, each group in input order.
pub fn validate_input(jobs: &[Job], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        if job.pages < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePages,
                format!("Job {} has negative page count {}", job.id, job.pages),
            ));
        }
    }

    for r in resources {
        if r.capacity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCapacity,
                format!("Resource {} has negative capacity {}", r.id, r.capacity),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let jobs = vec![Job::new(1, 1, 4), Job::new(2, 2, 0)];
        let resources = vec![Resource::new(1, 3), Resource::new(2, 0)];
        assert!(validate_input(&jobs, &resources).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_input(&[], &[]).is_ok());
    }

    #[test]
    fn test_negative_pages() {
        let jobs = vec![Job::new(1, 1, -4)];
        let errors = validate_input(&jobs, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativePages);
        assert!(errors[0].message.contains("Job 1"));
    }

    #[test]
    fn test_negative_capacity() {
        let resources = vec![Resource::new(9, -1)];
        let errors = validate_input(&[], &resources).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeCapacity);
        assert!(errors[0].message.contains("Resource 9"));
    }

    #[test]
    fn test_duplicate_ids_allowed() {
        let jobs = vec![Job::new(1, 1, 4), Job::new(1, 1, 4)];
        let resources = vec![Resource::new(1, 3), Resource::new(1, 3)];
        assert!(validate_input(&jobs, &resources).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![Job::new(1, 1, -1), Job::new(2, 1, 2), Job::new(3, 1, -3)];
        let resources = vec![Resource::new(1, -5)];

        let errors = validate_input(&jobs, &resources).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativePages);
        assert_eq!(errors[1].kind, ValidationErrorKind::NegativePages);
        assert_eq!(errors[2].kind, ValidationErrorKind::NegativeCapacity);
    }
}
