// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError};
use crate::rules::{TextRule, apply_text_rules};
use serde::{Deserialize, Serialize};

const WORK_DESCRIPTION_RULES: &[TextRule] = &[
    TextRule::Required("Work description is required."),
    TextRule::MinLength {
        min: 10,
        message: "Add at least 10 characters.",
    },
];

/// The log-time form attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeLogForm {
    /// Time spent, e.g. `2h 30m`.
    pub time_spent: String,
    /// Date label.
    pub date: String,
    /// Time label.
    pub time: String,
    /// What was done.
    pub work_description: String,
}

/// Errors for [`TimeLogForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeLogErrors {
    /// Error for `timeSpent`.
    pub time_spent: Option<FieldError>,
    /// Error for `date`.
    pub date: Option<FieldError>,
    /// Error for `time`.
    pub time: Option<FieldError>,
    /// Error for `workDescription`.
    pub work_description: Option<FieldError>,
}

impl ValidationErrors for TimeLogErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("timeSpent", ErrorEntry::Single(self.time_spent.as_ref())),
            ("date", ErrorEntry::Single(self.date.as_ref())),
            ("time", ErrorEntry::Single(self.time.as_ref())),
            (
                "workDescription",
                ErrorEntry::Single(self.work_description.as_ref()),
            ),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "timeSpent" => self.time_spent = None,
            "date" => self.date = None,
            "time" => self.time = None,
            "workDescription" => self.work_description = None,
            _ => {}
        }
    }
}

/// Validates the log-time form.
#[must_use]
pub fn validate_time_log(form: &TimeLogForm) -> TimeLogErrors {
    TimeLogErrors {
        time_spent: apply_text_rules(
            &form.time_spent,
            &[TextRule::Required("Time spent is required.")],
        ),
        date: apply_text_rules(&form.date, &[TextRule::Required("Date is required.")]),
        time: apply_text_rules(&form.time, &[TextRule::Required("Time is required.")]),
        work_description: apply_text_rules(&form.work_description, WORK_DESCRIPTION_RULES),
    }
}

impl Form for TimeLogForm {
    type Errors = TimeLogErrors;
    type Context = ();

    const NAME: &'static str = "time-log";

    fn validate(&self, _context: &()) -> TimeLogErrors {
        validate_time_log(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let text: String = value.into_text(field)?;
        let mut next: Self = self.clone();
        match field {
            "timeSpent" => next.time_spent = text,
            "date" => next.date = text,
            "time" => next.time = text,
            "workDescription" => next.work_description = text,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}
