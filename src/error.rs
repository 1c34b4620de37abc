//! Error types produced by the catalog core.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`StoreError::Conflict`] | [`Store::insert`](crate::Store::insert) | title already stored |
//! | [`ValidationErrors`] | [`validate`](crate::validate::validate) | record fails required-field rules |
//! | [`CodecError`] | [`decode_record`](crate::decode_record) / [`encode_records`](crate::encode_records) | malformed payload or encode failure |
//!
//! Searching never fails: an empty result is a successful outcome.

use std::fmt;
use thiserror::Error;

/// Errors returned by [`Store`](crate::Store) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Another stored record already uses this title.
    #[error("an application with title {title} already exists")]
    Conflict { title: String },
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} has invalid value {value}")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `maintainers[1].email`.
    pub field: String,
    /// The rejected value as received.
    pub value: String,
    /// Which rule failed.
    pub reason: ValidationRule,
}

/// The rule a [`ValidationError`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    Email,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Required => f.write_str("required"),
            ValidationRule::Email => f.write_str("email"),
        }
    }
}

/// Every rule a record failed, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("failed to validate {} field(s){}", .0.len(), list_failures(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn list_failures(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| format!("; {e}")).collect()
}

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field paths that failed, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Wire format failures.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not a YAML document of the expected shape.
    #[error("failed to parse payload: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// Matches could not be rendered.
    #[error("failed to encode records: {0}")]
    Encode(#[source] serde_yaml::Error),
}
