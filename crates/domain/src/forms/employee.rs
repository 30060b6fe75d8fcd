// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError};
use crate::rules::{DuplicateTracker, TextRule, apply_text_rules};
use serde::{Deserialize, Serialize};

const EMPLOYEE_EMAIL_RULES: &[TextRule] = &[
    TextRule::Required("Email is required."),
    TextRule::Email("Enter a valid email."),
];

/// The add-employee form: a list of emails to invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddEmployeeForm {
    /// One email per invite row.
    pub emails: Vec<String>,
}

impl Default for AddEmployeeForm {
    fn default() -> Self {
        Self {
            emails: vec![String::new()],
        }
    }
}

/// Errors for [`AddEmployeeForm`], index-aligned with the email rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddEmployeeErrors {
    /// One slot per email row.
    pub emails: Vec<Option<FieldError>>,
}

impl ValidationErrors for AddEmployeeErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![("emails", ErrorEntry::Repeated(&self.emails))]
    }

    fn clear_field(&mut self, field: &str) {
        if field == "emails" {
            self.emails.iter_mut().for_each(|slot| *slot = None);
        }
    }
}

/// Validates the add-employee form.
///
/// Every row is required and must be a valid email. Rows repeating an
/// earlier valid row (ignoring case and surrounding spaces) are duplicates.
#[must_use]
pub fn validate_add_employee(form: &AddEmployeeForm) -> AddEmployeeErrors {
    let mut seen: DuplicateTracker = DuplicateTracker::new();
    let emails: Vec<Option<FieldError>> = form
        .emails
        .iter()
        .map(|email| {
            apply_text_rules(email, EMPLOYEE_EMAIL_RULES)
                .or_else(|| seen.check(email, "Duplicate email."))
        })
        .collect();

    AddEmployeeErrors { emails }
}

impl Form for AddEmployeeForm {
    type Errors = AddEmployeeErrors;
    type Context = ();

    const NAME: &'static str = "add-employee";

    fn validate(&self, _context: &()) -> AddEmployeeErrors {
        validate_add_employee(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        match field {
            "emails" => Ok(Self {
                emails: value.into_list(field)?,
            }),
            _ => Err(unknown_field(Self::NAME, field)),
        }
    }
}
