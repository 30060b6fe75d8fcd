// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError, ValidationErrorKind};
use crate::rules::{TextRule, apply_text_rules, require_choice};
use crate::types::RepeatCadence;
use serde::{Deserialize, Serialize};

/// The add-event form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddEventForm {
    /// Event title.
    pub event_name: String,
    /// Event category.
    pub category: Option<String>,
    /// Event priority.
    pub priority: Option<String>,
    /// Date label.
    pub date: Option<String>,
    /// Time label.
    pub time: Option<String>,
    /// Free-form description.
    pub description: String,
    /// Whether the event repeats.
    pub repeat_enabled: bool,
    /// How often the event repeats.
    pub repeat_cadence: RepeatCadence,
    /// Weekdays the event repeats on.
    pub repeat_days: Vec<String>,
    /// Repeat on every day instead of picking days.
    pub repeat_every_day: bool,
    /// Time of day for repeats.
    pub repeat_time: Option<String>,
}

/// Errors for [`AddEventForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddEventErrors {
    /// Error for `eventName`.
    pub event_name: Option<FieldError>,
    /// Error for `category`.
    pub category: Option<FieldError>,
    /// Error for `priority`.
    pub priority: Option<FieldError>,
    /// Error for `date`.
    pub date: Option<FieldError>,
    /// Error for `time`.
    pub time: Option<FieldError>,
    /// Error for `repeatDays`.
    pub repeat_days: Option<FieldError>,
    /// Error for `repeatTime`.
    pub repeat_time: Option<FieldError>,
}

impl ValidationErrors for AddEventErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("eventName", ErrorEntry::Single(self.event_name.as_ref())),
            ("category", ErrorEntry::Single(self.category.as_ref())),
            ("priority", ErrorEntry::Single(self.priority.as_ref())),
            ("date", ErrorEntry::Single(self.date.as_ref())),
            ("time", ErrorEntry::Single(self.time.as_ref())),
            ("repeatDays", ErrorEntry::Single(self.repeat_days.as_ref())),
            ("repeatTime", ErrorEntry::Single(self.repeat_time.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "eventName" => self.event_name = None,
            "category" => self.category = None,
            "priority" => self.priority = None,
            "date" => self.date = None,
            "time" => self.time = None,
            "repeatDays" => self.repeat_days = None,
            "repeatTime" => self.repeat_time = None,
            _ => {}
        }
    }
}

/// Validates the add-event form.
///
/// Repeat settings are only checked when `repeatEnabled` is set. Repeat
/// days may be left empty when `repeatEveryDay` is set.
#[must_use]
pub fn validate_add_event(form: &AddEventForm) -> AddEventErrors {
    let mut errors: AddEventErrors = AddEventErrors {
        event_name: apply_text_rules(
            &form.event_name,
            &[TextRule::Required("Event name is required.")],
        ),
        category: require_choice(form.category.as_deref(), "Event category is required."),
        priority: require_choice(form.priority.as_deref(), "Priority is required."),
        date: require_choice(form.date.as_deref(), "Date is required."),
        time: require_choice(form.time.as_deref(), "Time is required."),
        ..AddEventErrors::default()
    };

    if form.repeat_enabled {
        errors.repeat_time =
            require_choice(form.repeat_time.as_deref(), "Repeat time is required.");

        if !form.repeat_every_day && form.repeat_days.is_empty() {
            errors.repeat_days = Some(FieldError::new(
                ValidationErrorKind::Missing,
                "Select at least one day or enable repeat every day.",
            ));
        }
    }

    errors
}

impl Form for AddEventForm {
    type Errors = AddEventErrors;
    type Context = ();

    const NAME: &'static str = "add-event";

    fn validate(&self, _context: &()) -> AddEventErrors {
        validate_add_event(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "eventName" => next.event_name = value.into_text(field)?,
            "category" => next.category = value.into_choice(field)?,
            "priority" => next.priority = value.into_choice(field)?,
            "date" => next.date = value.into_choice(field)?,
            "time" => next.time = value.into_choice(field)?,
            "description" => next.description = value.into_text(field)?,
            "repeatEnabled" => next.repeat_enabled = value.into_flag(field)?,
            "repeatCadence" => next.repeat_cadence = value.into_required(field)?,
            "repeatDays" => next.repeat_days = value.into_list(field)?,
            "repeatEveryDay" => next.repeat_every_day = value.into_flag(field)?,
            "repeatTime" => next.repeat_time = value.into_choice(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}
