// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process gateway that serves fixtures after a simulated delay.
//!
//! The only mutable state is the id counter. Records created through the
//! mock are not stored, and calls that reference a record by id accept any
//! id without looking it up.

use crate::config::{GatewayConfig, RequestCalendar};
use crate::error::GatewayError;
use crate::fixtures;
use crate::gateway::WorkroomGateway;
use crate::snapshot::{
    MessengerSnapshot, ProfileSnapshot, ProjectsSnapshot, SavedEvent, SharedFolder,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};
use tracing::{debug, info};
use workroom_domain::{
    AddEventForm, AddProjectForm, AddRequestForm, AddTaskForm, AuthSession, Employee, Project,
    Seniority, SignInForm, SignUpForm, Task, TaskActivity, TaskFilter, TaskGroup, TaskPriority,
    TaskStatus, TimeLogForm, VacationMode, VacationRequest, VacationStatus,
    display_name_from_email,
};

const NO_DESCRIPTION: &str = "No description added yet.";
const DEFAULT_PROJECT_DEADLINE: &str = "Sep 21, 2020";
const DEFAULT_PROJECT_CREATED_AT: &str = "Sep 15, 2020";
const DEFAULT_TASK_ESTIMATE: &str = "2h";
const FALLBACK_GROUP_ID: &str = "backlog";
const FALLBACK_GROUP_LABEL: &str = "Backlog";
const INVITED_POSITION: &str = "Product Designer";

const DAY_LABEL: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// A [`WorkroomGateway`] backed by canned data.
#[derive(Debug)]
pub struct MockGateway {
    config: GatewayConfig,
    next_id: AtomicU64,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl MockGateway {
    /// Creates a mock gateway.
    #[must_use]
    pub const fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn next_suffix(&self) -> String {
        format!("{:06}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl WorkroomGateway for MockGateway {
    async fn sign_in(&self, form: &SignInForm) -> Result<AuthSession, GatewayError> {
        simulate("sign_in", self.config.latency_ms.sign_in).await;
        info!(email = %form.email, "Signed in");
        Ok(AuthSession {
            token: String::from("dummy-auth-token"),
            user_id: String::from("user-001"),
        })
    }

    async fn complete_sign_up(&self, form: &SignUpForm) -> Result<AuthSession, GatewayError> {
        simulate("complete_sign_up", self.config.latency_ms.sign_up).await;
        info!(
            email = %form.email,
            company = %form.company_name,
            invites = form.invites.iter().filter(|invite| !invite.trim().is_empty()).count(),
            "Completed sign-up"
        );
        Ok(AuthSession {
            token: String::from("dummy-signup-token"),
            user_id: String::from("user-new-001"),
        })
    }

    async fn save_event(&self, form: &AddEventForm) -> Result<SavedEvent, GatewayError> {
        simulate("save_event", self.config.latency_ms.save_event).await;
        let id: String = format!("evt-{}", self.next_suffix());
        info!(event_id = %id, "Saved event");
        Ok(SavedEvent {
            id,
            payload: form.clone(),
        })
    }

    async fn save_project(
        &self,
        form: &AddProjectForm,
        reporter_id: &str,
    ) -> Result<Project, GatewayError> {
        simulate("save_project", self.config.latency_ms.save_project).await;

        let suffix: String = self.next_suffix();
        let project: Project = Project {
            id: format!("p-{suffix}"),
            name: form.project_name.trim().to_string(),
            number: format!("PN{suffix}"),
            description: description_or_placeholder(&form.description),
            start_date: form.starts_date.clone(),
            reporter_id: reporter_id.to_string(),
            assignee_ids: vec![reporter_id.to_string()],
            priority: form.priority.unwrap_or(TaskPriority::Medium),
            deadline: form
                .dead_line
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_PROJECT_DEADLINE)),
            created_at: form
                .starts_date
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_PROJECT_CREATED_AT)),
            avatar_preset: form.avatar_preset.clone(),
        };
        info!(project_id = %project.id, reporter_id, "Saved project");
        Ok(project)
    }

    async fn save_task(
        &self,
        form: &AddTaskForm,
        project_id: &str,
        reporter_id: &str,
        groups: &[TaskGroup],
    ) -> Result<Task, GatewayError> {
        simulate("save_task", self.config.latency_ms.save_task).await;

        let suffix: String = self.next_suffix();
        let group: Option<&TaskGroup> = form
            .task_group_id
            .as_deref()
            .and_then(|wanted| groups.iter().find(|group| group.id == wanted))
            .or_else(|| groups.first());
        let (group_id, group_label) = group.map_or((FALLBACK_GROUP_ID, FALLBACK_GROUP_LABEL), |g| {
            (g.id.as_str(), g.label.as_str())
        });
        let estimate: String = form
            .estimate
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_TASK_ESTIMATE));

        let task: Task = Task {
            id: format!("t-{suffix}"),
            project_id: project_id.to_string(),
            reporter_id: reporter_id.to_string(),
            group_id: group_id.to_string(),
            name: form.task_name.trim().to_string(),
            task_number: format!("TSK{suffix}"),
            estimate: estimate.clone(),
            spent_time: String::from("0h"),
            assignee_id: form
                .assignee_id
                .clone()
                .unwrap_or_else(|| reporter_id.to_string()),
            priority: form.priority.unwrap_or(TaskPriority::Medium),
            status: TaskStatus::ToDo,
            description: description_or_placeholder(&form.description),
            logged_time: String::from("0h"),
            original_estimate: estimate,
            attachments: Vec::new(),
            activities: vec![TaskActivity {
                id: format!("activity-{suffix}-1"),
                user_id: reporter_id.to_string(),
                title: String::from("Task created"),
                subtitle: format!("Added in {group_label}"),
            }],
        };
        info!(task_id = %task.id, project_id, group_id = %task.group_id, "Saved task");
        Ok(task)
    }

    async fn fetch_projects_snapshot(&self) -> Result<ProjectsSnapshot, GatewayError> {
        simulate("fetch_projects_snapshot", self.config.latency_ms.fetch_projects).await;
        fixtures::projects_snapshot()
    }

    async fn save_projects_filter(&self, filter: &TaskFilter) -> Result<TaskFilter, GatewayError> {
        simulate("save_projects_filter", self.config.latency_ms.save_filter).await;
        debug!(empty = filter.is_empty(), period = %filter.period, "Saved task filter");
        Ok(filter.clone())
    }

    async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), GatewayError> {
        simulate("update_task_status", self.config.latency_ms.update_status).await;
        info!(task_id, status = %status, "Updated task status");
        Ok(())
    }

    async fn save_time_log(&self, task_id: &str, log: &TimeLogForm) -> Result<(), GatewayError> {
        simulate("save_time_log", self.config.latency_ms.save_time_log).await;
        info!(task_id, time_spent = %log.time_spent, "Saved time log");
        Ok(())
    }

    async fn invite_employees(&self, emails: &[String]) -> Result<Vec<Employee>, GatewayError> {
        simulate("invite_employees", self.config.latency_ms.invite_employees).await;

        let batch: String = self.next_suffix();
        let employees: Vec<Employee> = emails
            .iter()
            .enumerate()
            .map(|(index, email)| {
                let email: &str = email.trim();
                Employee {
                    id: format!("emp-{batch}-{index}"),
                    name: display_name_from_email(email, index),
                    email: email.to_string(),
                    position: String::from(INVITED_POSITION),
                    seniority: Seniority::for_invite_index(index),
                    backlog_tasks: 0,
                    in_progress_tasks: 0,
                    in_review_tasks: 0,
                }
            })
            .collect();
        info!(count = employees.len(), "Invited employees");
        Ok(employees)
    }

    async fn share_folder(
        &self,
        folder_id: &str,
        member_ids: &[String],
    ) -> Result<SharedFolder, GatewayError> {
        simulate("share_folder", self.config.latency_ms.share_folder).await;
        info!(folder_id, members = member_ids.len(), "Shared folder");
        Ok(SharedFolder {
            folder_id: folder_id.to_string(),
            member_ids: member_ids.to_vec(),
        })
    }

    async fn fetch_profile_snapshot(&self) -> Result<ProfileSnapshot, GatewayError> {
        simulate("fetch_profile_snapshot", self.config.latency_ms.fetch_profile).await;
        fixtures::profile_snapshot()
    }

    async fn submit_vacation_request(
        &self,
        form: &AddRequestForm,
    ) -> Result<VacationRequest, GatewayError> {
        simulate("submit_vacation_request", self.config.latency_ms.submit_vacation).await;
        let id: String = format!("vr-{}", self.next_suffix());
        let request: VacationRequest =
            build_vacation_request(form, id, self.config.request_calendar)?;
        info!(
            request_id = %request.id,
            period = %request.period_label,
            duration = %request.duration_label,
            "Submitted vacation request"
        );
        Ok(request)
    }

    async fn fetch_messenger_snapshot(&self) -> Result<MessengerSnapshot, GatewayError> {
        simulate("fetch_messenger_snapshot", self.config.latency_ms.fetch_messenger).await;
        fixtures::messenger_snapshot()
    }
}

async fn simulate(operation: &'static str, latency_ms: u64) {
    debug!(operation, latency_ms, "Simulating gateway call");
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
}

fn description_or_placeholder(description: &str) -> String {
    let trimmed: &str = description.trim();
    if trimmed.is_empty() {
        String::from(NO_DESCRIPTION)
    } else {
        trimmed.to_string()
    }
}

/// Builds the pending request a submitted add-request form turns into.
///
/// Days mode spans the first to the last picked day and counts the picked
/// days. Hours mode is labelled with the first picked day, or the 1st when
/// none is picked, and the hour window length.
fn build_vacation_request(
    form: &AddRequestForm,
    id: String,
    calendar: RequestCalendar,
) -> Result<VacationRequest, GatewayError> {
    let mut days: Vec<u32> = form.selected_days.clone();
    days.sort_unstable();
    let first: u32 = days.first().copied().unwrap_or(1);
    let last: u32 = days.last().copied().unwrap_or(first);

    let (period_label, duration_label) = match form.mode {
        VacationMode::Days => (
            format!(
                "{} - {}",
                day_label(calendar, first)?,
                day_label(calendar, last)?
            ),
            format!("{}d", days.len().max(1)),
        ),
        VacationMode::Hours => (day_label(calendar, first)?, form.requested_hours_label()),
    };

    Ok(VacationRequest {
        id,
        request_type: form.request_type,
        period_label,
        duration_label,
        status: VacationStatus::Pending,
    })
}

fn day_label(calendar: RequestCalendar, day: u32) -> Result<String, GatewayError> {
    let month: Month = Month::try_from(calendar.month).map_err(invalid)?;
    let day: u8 = u8::try_from(day).map_err(invalid)?;
    let date: Date = Date::from_calendar_date(calendar.year, month, day).map_err(invalid)?;
    date.format(DAY_LABEL).map_err(invalid)
}

fn invalid(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::InvalidPayload(err.to_string())
}
