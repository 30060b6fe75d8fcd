// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{FormSession, SubmitOutcome, TransitionResult};
use tracing::debug;
use workroom_domain::{FieldValue, Form, ValidationErrors, error_messages};

/// Applies a command to a form session, producing a new session.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `context` - Outside information the form's validator needs
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session, plus the submit
///   outcome for `Submit` commands
/// * `Err(CoreError)` if an edit is rejected
///
/// # Errors
///
/// Returns an error if an edit names an unknown field or carries a value of
/// the wrong shape. The original session is unaffected.
pub fn apply<F: Form>(
    session: &FormSession<F>,
    command: Command,
    context: &F::Context,
) -> Result<TransitionResult<F>, CoreError> {
    match command {
        Command::Edit { field, value } => Ok(TransitionResult {
            new_session: apply_edit(session, &field, value)?,
            submit_outcome: None,
        }),
        Command::Submit => {
            let (new_session, outcome) = submit(session, context);
            Ok(TransitionResult {
                new_session,
                submit_outcome: Some(outcome),
            })
        }
        Command::Reset => Ok(TransitionResult {
            new_session: FormSession::default(),
            submit_outcome: None,
        }),
    }
}

/// Replaces one field of the draft and clears that field's stale error.
///
/// Errors on other fields are kept until the next submit.
///
/// # Errors
///
/// Returns an error if the form has no such field or the value has the
/// wrong shape.
pub fn apply_edit<F: Form>(
    session: &FormSession<F>,
    field: &str,
    value: FieldValue,
) -> Result<FormSession<F>, CoreError> {
    let draft: F = session.draft.with_edit(field, value)?;

    let mut errors: F::Errors = session.errors.clone();
    errors.clear_field(field);

    Ok(FormSession {
        draft,
        errors,
        submit_attempts: session.submit_attempts,
    })
}

/// Validates the whole draft and gates submission on the result.
///
/// The returned session always carries the complete error record from this
/// attempt, so every failing field is shown at once.
#[must_use]
pub fn submit<F: Form>(
    session: &FormSession<F>,
    context: &F::Context,
) -> (FormSession<F>, SubmitOutcome<F>) {
    let errors: F::Errors = session.draft.validate(context);
    let error_count: usize = error_messages(&errors).len();
    let attempts: u32 = session.submit_attempts.saturating_add(1);

    debug!(form = F::NAME, error_count, attempts, "Validated form submit");

    let outcome: SubmitOutcome<F> = if error_count == 0 {
        SubmitOutcome::Ready(session.draft.clone())
    } else {
        SubmitOutcome::Blocked { error_count }
    };

    let new_session: FormSession<F> = FormSession {
        draft: session.draft.clone(),
        errors,
        submit_attempts: attempts,
    };

    (new_session, outcome)
}
