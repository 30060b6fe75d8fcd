// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError};
use crate::rules::{DuplicateTracker, require_choice};
use serde::{Deserialize, Serialize};

/// The share-folder form: the members a folder is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareFolderForm {
    /// One picker per row; `None` until a member is picked.
    pub member_ids: Vec<Option<String>>,
}

impl Default for ShareFolderForm {
    fn default() -> Self {
        Self {
            member_ids: vec![None],
        }
    }
}

impl ShareFolderForm {
    /// Returns the picked member ids, skipping empty rows.
    #[must_use]
    pub fn selected_member_ids(&self) -> Vec<String> {
        self.member_ids.iter().flatten().cloned().collect()
    }
}

/// Errors for [`ShareFolderForm`], index-aligned with the member rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareFolderErrors {
    /// One slot per member row.
    pub member_ids: Vec<Option<FieldError>>,
}

impl ValidationErrors for ShareFolderErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![("memberIds", ErrorEntry::Repeated(&self.member_ids))]
    }

    fn clear_field(&mut self, field: &str) {
        if field == "memberIds" {
            self.member_ids.iter_mut().for_each(|slot| *slot = None);
        }
    }
}

/// Validates the share-folder form.
///
/// Every row needs a member, and a member may only be added once.
#[must_use]
pub fn validate_share_folder(form: &ShareFolderForm) -> ShareFolderErrors {
    let mut seen: DuplicateTracker = DuplicateTracker::new();
    let member_ids: Vec<Option<FieldError>> = form
        .member_ids
        .iter()
        .map(|member_id| match member_id.as_deref() {
            Some(id) if !id.is_empty() => seen.check(id, "Member already added."),
            other => require_choice(other, "Select a member."),
        })
        .collect();

    ShareFolderErrors { member_ids }
}

impl Form for ShareFolderForm {
    type Errors = ShareFolderErrors;
    type Context = ();

    const NAME: &'static str = "share-folder";

    fn validate(&self, _context: &()) -> ShareFolderErrors {
        validate_share_folder(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        match field {
            "memberIds" => Ok(Self {
                member_ids: value.into_choices(field)?,
            }),
            _ => Err(unknown_field(Self::NAME, field)),
        }
    }
}
