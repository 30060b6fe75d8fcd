// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form states, their error records and their validators.
//!
//! Each form has a fixed field list and a fixed combination of field
//! validators. Error records use the same camelCase keys as the form so the
//! UI can bind an error to the field it belongs to.

mod auth;
mod employee;
mod event;
mod profile;
mod project;
mod share;
mod time_log;

pub use auth::{
    SignInErrors, SignInForm, SignUpErrors, SignUpForm, SignUpStep, StepFourErrors,
    StepOneErrors, StepThreeErrors, StepTwoErrors, validate_sign_in, validate_step_four,
    validate_step_one, validate_step_three, validate_step_two,
};
pub use employee::{AddEmployeeErrors, AddEmployeeForm, validate_add_employee};
pub use event::{AddEventErrors, AddEventForm, validate_add_event};
pub use profile::{AddRequestErrors, AddRequestForm, RequestContext, validate_add_request};
pub use project::{
    AddProjectErrors, AddProjectForm, AddTaskErrors, AddTaskForm, validate_add_project,
    validate_add_task, validate_status_selection,
};
pub use share::{ShareFolderErrors, ShareFolderForm, validate_share_folder};
pub use time_log::{TimeLogErrors, TimeLogForm, validate_time_log};

use crate::aggregate::ValidationErrors;
use crate::error::DomainError;
use std::str::FromStr;

/// A form whose state can be edited field by field and validated as a whole.
pub trait Form: Clone + Default {
    /// The error record produced by validation.
    type Errors: ValidationErrors + Clone + Default + PartialEq + std::fmt::Debug;

    /// Outside information validation needs (e.g. remaining vacation days).
    type Context;

    /// A short name used in logs and error messages.
    const NAME: &'static str;

    /// Validates every field and returns a complete error record.
    fn validate(&self, context: &Self::Context) -> Self::Errors;

    /// Returns a copy of this form with one field replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the form has no field named `field`, or if
    /// `value` has the wrong shape or an unknown enumeration value.
    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError>;
}

/// A new value for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// A toggle.
    Flag(bool),
    /// A picker selection, or `None` when cleared.
    Choice(Option<String>),
    /// A list of strings (invite rows, repeat days, code cells).
    List(Vec<String>),
    /// A list of picker selections that may individually be unset.
    Choices(Vec<Option<String>>),
    /// A list of day numbers.
    Days(Vec<u32>),
}

impl FieldValue {
    pub(crate) fn into_text(self, field: &str) -> Result<String, DomainError> {
        match self {
            Self::Text(value) => Ok(value),
            _ => Err(mismatch(field, "text")),
        }
    }

    pub(crate) fn into_flag(self, field: &str) -> Result<bool, DomainError> {
        match self {
            Self::Flag(value) => Ok(value),
            _ => Err(mismatch(field, "flag")),
        }
    }

    pub(crate) fn into_choice(self, field: &str) -> Result<Option<String>, DomainError> {
        match self {
            Self::Choice(value) => Ok(value),
            _ => Err(mismatch(field, "choice")),
        }
    }

    /// Parses a choice into a typed enumeration value.
    pub(crate) fn into_parsed<T>(self, field: &str) -> Result<Option<T>, DomainError>
    where
        T: FromStr<Err = DomainError>,
    {
        self.into_choice(field)?
            .map(|value| value.parse::<T>())
            .transpose()
    }

    /// Parses a choice that must be present.
    pub(crate) fn into_required<T>(self, field: &str) -> Result<T, DomainError>
    where
        T: FromStr<Err = DomainError>,
    {
        self.into_parsed(field)?
            .ok_or_else(|| mismatch(field, "non-empty choice"))
    }

    pub(crate) fn into_list(self, field: &str) -> Result<Vec<String>, DomainError> {
        match self {
            Self::List(value) => Ok(value),
            _ => Err(mismatch(field, "list")),
        }
    }

    pub(crate) fn into_choices(self, field: &str) -> Result<Vec<Option<String>>, DomainError> {
        match self {
            Self::Choices(value) => Ok(value),
            _ => Err(mismatch(field, "choice list")),
        }
    }

    pub(crate) fn into_days(self, field: &str) -> Result<Vec<u32>, DomainError> {
        match self {
            Self::Days(value) => Ok(value),
            _ => Err(mismatch(field, "day list")),
        }
    }
}

fn mismatch(field: &str, expected: &'static str) -> DomainError {
    DomainError::FieldTypeMismatch {
        field: field.to_string(),
        expected,
    }
}

pub(crate) fn unknown_field(form: &'static str, field: &str) -> DomainError {
    DomainError::UnknownField {
        form,
        field: field.to_string(),
    }
}

