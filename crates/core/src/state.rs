// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workroom_domain::{Form, has_errors};

/// An open form: the draft being edited and the errors shown next to it.
///
/// Sessions are values. Every transition builds a new session and leaves the
/// previous one untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession<F: Form> {
    /// The draft the user is editing.
    pub draft: F,
    /// Errors from the last submit attempt, minus fields edited since.
    pub errors: F::Errors,
    /// How many times submit has been attempted.
    pub submit_attempts: u32,
}

impl<F: Form> FormSession<F> {
    /// Creates a session around an existing draft with no errors.
    ///
    /// # Arguments
    ///
    /// * `draft` - The initial form state
    #[must_use]
    pub fn new(draft: F) -> Self {
        Self {
            draft,
            errors: F::Errors::default(),
            submit_attempts: 0,
        }
    }

    /// Returns whether any shown error would block submission.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_errors(&self.errors)
    }
}

impl<F: Form> Default for FormSession<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// The result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<F: Form> {
    /// The draft is clean and may be sent to the gateway.
    Ready(F),
    /// The draft failed validation; nothing may be sent.
    Blocked {
        /// Number of `(key, message)` pairs reported.
        error_count: usize,
    },
}

impl<F: Form> SubmitOutcome<F> {
    /// Returns whether the draft may be sent.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// The result of applying a command to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult<F: Form> {
    /// The session after the command.
    pub new_session: FormSession<F>,
    /// Present only for `Submit` commands.
    pub submit_outcome: Option<SubmitOutcome<F>>,
}
