// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The time-off request form on the profile page.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError, ValidationErrorKind};
use crate::rules::{check_time_range, check_vacation_quota, duration_label, require_text};
use crate::types::{VacationMode, VacationRequestType};
use serde::{Deserialize, Serialize};

/// Outside information the add-request validator depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    /// Vacation days remaining in the user's balance.
    pub vacation_days_left: u32,
}

impl RequestContext {
    /// Creates a context with the given vacation balance.
    #[must_use]
    pub const fn new(vacation_days_left: u32) -> Self {
        Self { vacation_days_left }
    }

    /// Returns the balance left once `form` has been accepted.
    ///
    /// Only vacation requests in days mode draw down the balance, one day
    /// per selected day, stopping at zero.
    #[must_use]
    pub fn after_request(self, form: &AddRequestForm) -> Self {
        if !form.request_type.is_quota_limited() || form.mode != VacationMode::Days {
            return self;
        }
        let requested: u32 = u32::try_from(form.selected_days.len()).unwrap_or(u32::MAX);
        Self::new(self.vacation_days_left.saturating_sub(requested))
    }
}

/// The add-request form.
///
/// In `days` mode the request is a set of calendar days; in `hours` mode it
/// is a single window between `fromTime` and `toTime` on one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRequestForm {
    /// Request category.
    #[serde(rename = "type")]
    pub request_type: VacationRequestType,
    /// Whole days or an hour window.
    pub mode: VacationMode,
    /// Picked days of the month.
    pub selected_days: Vec<u32>,
    /// Window start, e.g. `9:00 AM`.
    pub from_time: String,
    /// Window end, e.g. `1:30 PM`.
    pub to_time: String,
    /// Optional note for the approver.
    pub comment: String,
}

impl AddRequestForm {
    /// Returns the hour window as a label such as `4h 30m`.
    ///
    /// Returns `0h` when the window is missing or not increasing.
    #[must_use]
    pub fn requested_hours_label(&self) -> String {
        duration_label(&self.from_time, &self.to_time)
    }
}

/// Errors for [`AddRequestForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRequestErrors {
    /// Error for `selectedDays`.
    pub selected_days: Option<FieldError>,
    /// Error for `fromTime`.
    pub from_time: Option<FieldError>,
    /// Error for `toTime`.
    pub to_time: Option<FieldError>,
}

impl ValidationErrors for AddRequestErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("selectedDays", ErrorEntry::Single(self.selected_days.as_ref())),
            ("fromTime", ErrorEntry::Single(self.from_time.as_ref())),
            ("toTime", ErrorEntry::Single(self.to_time.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "selectedDays" => self.selected_days = None,
            "fromTime" => self.from_time = None,
            "toTime" => self.to_time = None,
            _ => {}
        }
    }
}

/// Validates the add-request form.
///
/// # Arguments
///
/// * `form` - The form state
/// * `context` - The user's remaining vacation balance
///
/// # Returns
///
/// In `days` mode only `selectedDays` can be set: an empty selection wins
/// over the quota check. In `hours` mode both bounds are required, and when
/// both are present `toTime` carries the range error.
#[must_use]
pub fn validate_add_request(form: &AddRequestForm, context: &RequestContext) -> AddRequestErrors {
    match form.mode {
        VacationMode::Days => {
            let selected_days: Option<FieldError> = if form.selected_days.is_empty() {
                Some(FieldError::new(
                    ValidationErrorKind::Missing,
                    "Select at least one day.",
                ))
            } else {
                check_vacation_quota(
                    form.request_type,
                    form.selected_days.len(),
                    context.vacation_days_left,
                )
            };
            AddRequestErrors {
                selected_days,
                ..AddRequestErrors::default()
            }
        }
        VacationMode::Hours => {
            let from_time: Option<FieldError> = require_text(&form.from_time, "Select start time.");
            let mut to_time: Option<FieldError> = require_text(&form.to_time, "Select end time.");

            if from_time.is_none() && to_time.is_none() {
                to_time = check_time_range(
                    &form.from_time,
                    &form.to_time,
                    "End time must be after start time.",
                );
            }

            AddRequestErrors {
                selected_days: None,
                from_time,
                to_time,
            }
        }
    }
}

impl Form for AddRequestForm {
    type Errors = AddRequestErrors;
    type Context = RequestContext;

    const NAME: &'static str = "add-request";

    fn validate(&self, context: &RequestContext) -> AddRequestErrors {
        validate_add_request(self, context)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "type" => next.request_type = value.into_required(field)?,
            "mode" => next.mode = value.into_required(field)?,
            "selectedDays" => next.selected_days = value.into_days(field)?,
            "fromTime" => next.from_time = value.into_text(field)?,
            "toTime" => next.to_time = value.into_text(field)?,
            "comment" => next.comment = value.into_text(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}
