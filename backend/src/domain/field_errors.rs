//! Accumulated per-field validation failures.
//!
//! Both form validators report every violated rule at once; this map is the
//! failure side of their `Result`. The HTTP adapter renders it under
//! `details.fieldErrors`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::json;

use super::Error;

/// Machine-readable reason attached to a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// Value missing or blank.
    Required,
    /// Value is malformed or, for e-mail, already taken.
    Invalid,
    /// Another account already uses the value.
    Unique,
    /// Value is shorter than the field minimum.
    MinLength,
    /// Value is longer than the field maximum.
    MaxLength,
    /// Password fails the strength predicate.
    WeakPassword,
    /// Confirmation differs from the password.
    PasswordMismatch,
    /// Whole number below zero.
    Negative,
    /// Whole number above the largest storable value.
    MaxValue,
    /// Input does not parse as a whole number.
    NotWholeNumber,
    /// Value is not one of the enumerated choices.
    InvalidChoice,
}

/// One failed rule for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    code: FieldErrorCode,
    message: String,
}

impl FieldError {
    /// Build a field error from its code and human-readable message.
    pub fn new(code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> FieldErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Field name to ordered failures.
///
/// Fields are kept in name order and each field keeps its messages in the
/// order the rules were evaluated, so validating the same input twice yields
/// an identical map.
///
/// # Examples
/// ```
/// use cookbook::domain::{FieldErrorCode, FieldErrors};
///
/// let mut errors = FieldErrors::default();
/// errors.push("title", FieldErrorCode::MinLength, "too short");
/// assert!(errors.contains("title", FieldErrorCode::MinLength));
/// assert_eq!(errors.messages("title"), vec!["too short"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<FieldError>>);

impl FieldErrors {
    /// Record a failure against `field`.
    pub fn push(&mut self, field: &'static str, code: FieldErrorCode, message: impl Into<String>) {
        self.0
            .entry(field)
            .or_default()
            .push(FieldError::new(code, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failures recorded for `field`, empty when the field passed.
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages recorded for `field`, in evaluation order.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field).iter().map(FieldError::message).collect()
    }

    /// Whether `field` failed with `code`.
    pub fn contains(&self, field: &str, code: FieldErrorCode) -> bool {
        self.get(field).iter().any(|error| error.code == code)
    }

    /// Names of the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(value)` when nothing failed, otherwise the accumulated errors.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// `field: message; field: message`, in the same order as the map.
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for (field, failures) in &self.0 {
            for failure in failures {
                write!(f, "{separator}{field}: {}", failure.message)?;
                separator = "; ";
            }
        }
        Ok(())
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::invalid_request("validation failed").with_details(json!({ "fieldErrors": errors }))
    }
}
