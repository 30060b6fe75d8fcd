// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Errors raised by domain operations that are not field validation results.
///
/// Field validation never produces a `DomainError`; failing fields are
/// reported through [`FieldError`] values inside an error record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string did not name a known variant of an enumeration.
    UnknownValue {
        /// The enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
    /// An edit named a field the form does not have.
    UnknownField {
        /// The form receiving the edit.
        form: &'static str,
        /// The unrecognized field key.
        field: String,
    },
    /// An edit carried a value of the wrong shape for its field.
    FieldTypeMismatch {
        /// The field key.
        field: String,
        /// The value shape the field expects.
        expected: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownValue { kind, value } => {
                write!(f, "Unknown {kind} value '{value}'")
            }
            Self::UnknownField { form, field } => {
                write!(f, "Form '{form}' has no field '{field}'")
            }
            Self::FieldTypeMismatch { field, expected } => {
                write!(f, "Field '{field}' expects a {expected} value")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// The kind of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required value is empty or absent.
    Missing,
    /// A value does not have the expected shape.
    InvalidFormat,
    /// A value is shorter than the minimum length.
    TooShort,
    /// An end value is not after its start value, or a bound failed to parse.
    InvalidRange,
    /// A value repeats an earlier entry of the same list.
    Duplicate,
    /// A requested amount exceeds the remaining balance.
    QuotaExceeded,
}

impl ValidationErrorKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidFormat => "invalid_format",
            Self::TooShort => "too_short",
            Self::InvalidRange => "invalid_range",
            Self::Duplicate => "duplicate",
            Self::QuotaExceeded => "quota_exceeded",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single failed field, as shown next to the field in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The rule that failed.
    kind: ValidationErrorKind,
    /// The human-readable message.
    message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The rule that failed
    /// * `message` - The message to display for the field
    #[must_use]
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the rule that failed.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this error carries a message worth showing.
    ///
    /// An error with a blank message does not block submission.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
