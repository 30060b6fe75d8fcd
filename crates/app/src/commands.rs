// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cli::{FormKind, TaskArgs};
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use workroom::{FormSession, SubmitOutcome, submit};
use workroom_domain::{
    AddEmployeeForm, AddEventForm, AddProjectForm, AddRequestForm, AddTaskForm,
    ConversationSummary, Form, RequestContext, ShareFolderForm, SignInForm, SignUpForm,
    SignUpStep, Task, TaskFilter, TimeLogForm, apply_task_filters, error_messages, search,
    tasks_by_group,
};
use workroom_gateway::{MessengerSnapshot, ProjectsSnapshot, WorkroomGateway};

/// Result of validating one draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Form name as typed on the command line.
    pub form: &'static str,
    /// Whether the draft would be accepted.
    pub valid: bool,
    /// The full error record, keyed like the form.
    pub errors: serde_json::Value,
}

/// One board column in the `tasks` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskColumn {
    /// Task group id.
    pub group_id: String,
    /// Column heading.
    pub label: String,
    /// Matching tasks in board order.
    pub tasks: Vec<Task>,
}

/// Validates a JSON draft as if the user pressed submit.
///
/// # Errors
///
/// Returns an error if the draft is not valid JSON for the form, or if
/// `step` is not a sign-up step.
pub fn validate(
    form: FormKind,
    json: &str,
    step: u8,
    vacation_days_left: u32,
) -> Result<ValidationReport> {
    match form {
        FormKind::SignIn => check::<SignInForm>(json, &()),
        FormKind::SignUp => {
            let step: SignUpStep = SignUpStep::try_from(step)?;
            check::<SignUpForm>(json, &step)
        }
        FormKind::AddEvent => check::<AddEventForm>(json, &()),
        FormKind::AddProject => check::<AddProjectForm>(json, &()),
        FormKind::AddTask => check::<AddTaskForm>(json, &()),
        FormKind::TimeLog => check::<TimeLogForm>(json, &()),
        FormKind::AddEmployee => check::<AddEmployeeForm>(json, &()),
        FormKind::ShareFolder => check::<ShareFolderForm>(json, &()),
        FormKind::AddRequest => {
            check::<AddRequestForm>(json, &RequestContext::new(vacation_days_left))
        }
    }
}

fn check<F>(json: &str, context: &F::Context) -> Result<ValidationReport>
where
    F: Form + DeserializeOwned,
    F::Errors: Serialize,
{
    let draft: F =
        serde_json::from_str(json).wrap_err_with(|| format!("Failed to parse {} draft", F::NAME))?;
    let (session, outcome) = submit(&FormSession::new(draft), context);

    for (field, message) in error_messages(&session.errors) {
        debug!(form = F::NAME, field = %field, message = %message, "Field error");
    }

    Ok(ValidationReport {
        form: F::NAME,
        valid: matches!(outcome, SubmitOutcome::Ready(_)),
        errors: serde_json::to_value(&session.errors)
            .wrap_err("Failed to serialize validation errors")?,
    })
}

/// Loads the projects snapshot, stores the filter and returns matching
/// tasks grouped by board column.
///
/// # Errors
///
/// Returns an error if the gateway fails or the project does not exist.
pub async fn list_tasks(gateway: &dyn WorkroomGateway, args: &TaskArgs) -> Result<Vec<TaskColumn>> {
    let snapshot: ProjectsSnapshot = gateway.fetch_projects_snapshot().await?;
    let tasks: Vec<Task> = match &args.project {
        Some(project_id) => {
            if snapshot.project(project_id).is_none() {
                return Err(eyre!("No project with id '{project_id}'"));
            }
            snapshot.tasks_for_project(project_id)
        }
        None => snapshot.tasks.clone(),
    };

    let filter: TaskFilter = gateway.save_projects_filter(&args.to_filter()).await?;
    let matching: Vec<Task> = apply_task_filters(&tasks, &filter);
    info!(
        total = tasks.len(),
        matching = matching.len(),
        filtered = !filter.is_empty(),
        "Filtered tasks"
    );

    Ok(tasks_by_group(&matching)
        .into_iter()
        .map(|(group_id, tasks)| {
            let label: String = snapshot
                .task_groups
                .iter()
                .find(|group| group.id == group_id)
                .map_or_else(|| group_id.clone(), |group| group.label.clone());
            TaskColumn {
                group_id,
                label,
                tasks,
            }
        })
        .collect())
}

/// Returns conversations whose title or preview contains `query`.
///
/// # Errors
///
/// Returns an error if the gateway fails.
pub async fn find_conversations(
    gateway: &dyn WorkroomGateway,
    query: &str,
) -> Result<Vec<ConversationSummary>> {
    let snapshot: MessengerSnapshot = gateway.fetch_messenger_snapshot().await?;
    let matches: Vec<ConversationSummary> = search(&snapshot.conversations(), query);
    info!(query, matches = matches.len(), "Searched conversations");
    Ok(matches)
}
