//! Input validation primitives.
//!
//! API adapters validate each input shape with an explicit function that
//! collects every offending field into a [`ValidationErrors`] before any
//! domain input is constructed. The helpers here implement the individual
//! field rules.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::Settings;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All violations found in one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in the order they were recorded.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{} {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Text must contain at least one non-whitespace character.
pub fn require_non_empty(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    }
}

/// Length of the canonical `8-4-4-4-12` text form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Text must be a UUID in hyphenated `8-4-4-4-12` form.
///
/// The simple, braced and `urn:uuid:` forms that `Uuid::parse_str` also
/// accepts are rejected.
pub fn require_uuid(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    } else if value.len() != HYPHENATED_UUID_LEN || Uuid::parse_str(value).is_err() {
        errors.push(field, "must be a UUID");
    }
}

/// Value must be a JSON object; returns the object when it is.
pub fn require_object(errors: &mut ValidationErrors, field: &str, value: Value) -> Option<Settings> {
    match value {
        Value::Object(map) => Some(map),
        _ => {
            errors.push(field, "must be an object");
            None
        }
    }
}
