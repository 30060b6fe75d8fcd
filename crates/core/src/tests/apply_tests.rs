// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_project_form;
use crate::{Command, CoreError, FormSession, TransitionResult, apply, apply_edit, submit};
use workroom_domain::{
    AddProjectErrors, AddProjectForm, DomainError, FieldValue, SignInForm, TaskPriority,
};

#[test]
fn test_edit_command_returns_new_session() {
    let session: FormSession<AddProjectForm> = FormSession::default();
    let command: Command =
        Command::edit("projectName", FieldValue::Text(String::from("Food Delivery")));

    let result: Result<TransitionResult<AddProjectForm>, CoreError> = apply(&session, command, &());

    let transition: TransitionResult<AddProjectForm> = result.unwrap();
    assert_eq!(transition.new_session.draft.project_name, "Food Delivery");
    assert!(transition.submit_outcome.is_none());
    assert_eq!(session.draft.project_name, "");
}

#[test]
fn test_edit_clears_only_the_edited_fields_error() {
    let (session, _) = submit(&FormSession::<AddProjectForm>::default(), &());
    assert!(session.errors.project_name.is_some());
    assert!(session.errors.priority.is_some());

    let edited: FormSession<AddProjectForm> = apply_edit(
        &session,
        "priority",
        FieldValue::Choice(Some(String::from("low"))),
    )
    .unwrap();

    assert!(edited.errors.priority.is_none());
    assert!(edited.errors.project_name.is_some());
    assert_eq!(edited.draft.priority, Some(TaskPriority::Low));
    assert_eq!(edited.submit_attempts, 1);
}

#[test]
fn test_edit_does_not_revalidate() {
    let session: FormSession<AddProjectForm> = FormSession::default();

    let edited: FormSession<AddProjectForm> =
        apply_edit(&session, "projectName", FieldValue::Text(String::new())).unwrap();

    assert_eq!(edited.errors, AddProjectErrors::default());
}

#[test]
fn test_edit_unknown_field_is_rejected() {
    let session: FormSession<SignInForm> = FormSession::default();
    let command: Command = Command::edit("username", FieldValue::Text(String::from("oscar")));

    let result: Result<TransitionResult<SignInForm>, CoreError> = apply(&session, command, &());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownField { .. }))
    ));
}

#[test]
fn test_edit_wrong_shape_is_rejected() {
    let session: FormSession<SignInForm> = FormSession::default();

    let result: Result<FormSession<SignInForm>, CoreError> =
        apply_edit(&session, "email", FieldValue::Flag(true));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::FieldTypeMismatch { .. }))
    ));
}

#[test]
fn test_reset_discards_draft_and_errors() {
    let session: FormSession<AddProjectForm> = FormSession::new(create_test_project_form());
    let (session, _) = submit(&session, &());

    let transition: TransitionResult<AddProjectForm> =
        apply(&session, Command::Reset, &()).unwrap();

    assert_eq!(transition.new_session, FormSession::default());
}

#[test]
fn test_error_display() {
    let err: CoreError = CoreError::RecordNotFound {
        kind: "task",
        id: String::from("t99"),
    };
    assert_eq!(err.to_string(), "No task with id 't99'");

    let domain: CoreError = CoreError::from(DomainError::UnknownValue {
        kind: "priority",
        value: String::from("urgent"),
    });
    assert_eq!(
        domain.to_string(),
        "Domain violation: Unknown priority value 'urgent'"
    );
}
