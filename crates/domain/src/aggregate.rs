// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error aggregation for validation error records.

use crate::error::FieldError;

/// One entry of a validation error record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorEntry<'a> {
    /// A scalar field.
    Single(Option<&'a FieldError>),
    /// A repeatable field, index-aligned with its source list.
    Repeated(&'a [Option<FieldError>]),
}

impl ErrorEntry<'_> {
    /// Returns whether this entry holds at least one blocking error.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Single(error) => error.is_some_and(FieldError::is_blocking),
            Self::Repeated(errors) => errors
                .iter()
                .any(|error| error.as_ref().is_some_and(FieldError::is_blocking)),
        }
    }
}

/// A validation error record whose keys mirror a form's field keys.
pub trait ValidationErrors {
    /// Returns every field of the record, keyed by the form's field key.
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)>;

    /// Clears the error recorded for `field`, if any.
    ///
    /// Repeatable fields are cleared as a whole. Unknown keys are ignored.
    fn clear_field(&mut self, field: &str);
}

/// Returns whether an error record contains any blocking error.
///
/// Scalar fields count when they hold a non-blank message; repeatable fields
/// count when any element does. An empty list, or a list of empty slots, is
/// not an error.
#[must_use]
pub fn has_errors<E: ValidationErrors + ?Sized>(errors: &E) -> bool {
    errors.entries().iter().any(|(_, entry)| entry.is_set())
}

/// Lists every blocking message in an error record.
///
/// Repeatable fields are reported as `key[index]`.
#[must_use]
pub fn error_messages<E: ValidationErrors + ?Sized>(errors: &E) -> Vec<(String, String)> {
    let mut messages: Vec<(String, String)> = Vec::new();
    for (key, entry) in errors.entries() {
        match entry {
            ErrorEntry::Single(Some(error)) if error.is_blocking() => {
                messages.push((key.to_string(), error.message().to_string()));
            }
            ErrorEntry::Single(_) => {}
            ErrorEntry::Repeated(list) => {
                for (index, error) in list.iter().enumerate() {
                    if let Some(error) = error.as_ref().filter(|e| e.is_blocking()) {
                        messages.push((format!("{key}[{index}]"), error.message().to_string()));
                    }
                }
            }
        }
    }
    messages
}
