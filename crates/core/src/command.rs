// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workroom_domain::FieldValue;

/// A command represents user intent against an open form as data only.
///
/// Commands are the only way to change a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the value of one field.
    Edit {
        /// The camelCase field key.
        field: String,
        /// The new value.
        value: FieldValue,
    },
    /// Validate the whole draft and decide whether it may be sent.
    Submit,
    /// Discard the draft and every recorded error.
    Reset,
}

impl Command {
    /// Creates an edit command.
    #[must_use]
    pub fn edit(field: impl Into<String>, value: FieldValue) -> Self {
        Self::Edit {
            field: field.into(),
            value,
        }
    }
}
