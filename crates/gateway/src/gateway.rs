// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::GatewayError;
use crate::snapshot::{
    MessengerSnapshot, ProfileSnapshot, ProjectsSnapshot, SavedEvent, SharedFolder,
};
use async_trait::async_trait;
use workroom_domain::{
    AddEventForm, AddProjectForm, AddRequestForm, AddTaskForm, AuthSession, Employee, Project,
    SignInForm, SignUpForm, Task, TaskFilter, TaskGroup, TaskStatus, TimeLogForm,
    VacationRequest,
};

/// The backend the screens talk to.
///
/// Callers validate forms before handing them over; implementations do
/// not re-validate.
#[async_trait]
pub trait WorkroomGateway: Send + Sync {
    /// Signs in with email and password.
    async fn sign_in(&self, form: &SignInForm) -> Result<AuthSession, GatewayError>;

    /// Creates an account from a completed sign-up flow.
    async fn complete_sign_up(&self, form: &SignUpForm) -> Result<AuthSession, GatewayError>;

    /// Saves a calendar event.
    async fn save_event(&self, form: &AddEventForm) -> Result<SavedEvent, GatewayError>;

    /// Creates a project reported by `reporter_id`.
    async fn save_project(
        &self,
        form: &AddProjectForm,
        reporter_id: &str,
    ) -> Result<Project, GatewayError>;

    /// Creates a task inside a project.
    ///
    /// `groups` are the board columns the task may land in.
    async fn save_task(
        &self,
        form: &AddTaskForm,
        project_id: &str,
        reporter_id: &str,
        groups: &[TaskGroup],
    ) -> Result<Task, GatewayError>;

    /// Loads projects, tasks, members and task groups.
    async fn fetch_projects_snapshot(&self) -> Result<ProjectsSnapshot, GatewayError>;

    /// Persists the task filter sheet and returns what was stored.
    async fn save_projects_filter(&self, filter: &TaskFilter) -> Result<TaskFilter, GatewayError>;

    /// Moves a task to another workflow status.
    async fn update_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), GatewayError>;

    /// Records logged time on a task.
    async fn save_time_log(&self, task_id: &str, log: &TimeLogForm) -> Result<(), GatewayError>;

    /// Invites employees and returns their new directory entries.
    async fn invite_employees(&self, emails: &[String]) -> Result<Vec<Employee>, GatewayError>;

    /// Shares a folder with a set of members.
    async fn share_folder(
        &self,
        folder_id: &str,
        member_ids: &[String],
    ) -> Result<SharedFolder, GatewayError>;

    /// Loads the signed-in user's profile.
    async fn fetch_profile_snapshot(&self) -> Result<ProfileSnapshot, GatewayError>;

    /// Files a vacation, sick-leave or remote-work request.
    async fn submit_vacation_request(
        &self,
        form: &AddRequestForm,
    ) -> Result<VacationRequest, GatewayError>;

    /// Loads conversations and messages.
    async fn fetch_messenger_snapshot(&self) -> Result<MessengerSnapshot, GatewayError>;
}
