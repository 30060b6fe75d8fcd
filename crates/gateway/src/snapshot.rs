// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payloads returned by the gateway.

use serde::{Deserialize, Serialize};
use workroom_domain::{
    AddEventForm, AddRequestForm, ChatMessage, ConversationSummary, Project, RequestContext, Task, TaskGroup,
    TeamMember, VacationRequest,
};

/// Everything the projects screen loads at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSnapshot {
    /// Every project.
    pub projects: Vec<Project>,
    /// Every task across all projects.
    pub tasks: Vec<Task>,
    /// Team members.
    pub members: Vec<TeamMember>,
    /// Board columns in display order.
    pub task_groups: Vec<TaskGroup>,
}

impl ProjectsSnapshot {
    /// Looks up a project by id.
    #[must_use]
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    /// Returns the tasks that belong to one project, in snapshot order.
    #[must_use]
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect()
    }
}

/// The signed-in user's profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    /// Vacation days remaining.
    pub vacation_days_left: u32,
    /// Submitted requests, newest first.
    pub vacation_requests: Vec<VacationRequest>,
}

impl ProfileSnapshot {
    /// The context the add-request validator needs.
    #[must_use]
    pub const fn request_context(&self) -> RequestContext {
        RequestContext::new(self.vacation_days_left)
    }

    /// Returns a new snapshot with `request` listed first and the vacation
    /// balance reduced for `form`.
    #[must_use]
    pub fn with_submitted_request(&self, form: &AddRequestForm, request: VacationRequest) -> Self {
        let mut vacation_requests: Vec<VacationRequest> =
            Vec::with_capacity(self.vacation_requests.len() + 1);
        vacation_requests.push(request);
        vacation_requests.extend(self.vacation_requests.iter().cloned());

        Self {
            vacation_days_left: self.request_context().after_request(form).vacation_days_left,
            vacation_requests,
        }
    }
}

/// Conversations and messages for the messenger screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessengerSnapshot {
    /// The signed-in member.
    pub current_user_id: String,
    /// Team members.
    pub members: Vec<TeamMember>,
    /// Group chats.
    pub group_conversations: Vec<ConversationSummary>,
    /// One-to-one chats.
    pub direct_conversations: Vec<ConversationSummary>,
    /// Messages across all conversations.
    pub messages: Vec<ChatMessage>,
}

impl MessengerSnapshot {
    /// Group conversations followed by direct ones.
    #[must_use]
    pub fn conversations(&self) -> Vec<ConversationSummary> {
        self.group_conversations
            .iter()
            .chain(&self.direct_conversations)
            .cloned()
            .collect()
    }

    /// Messages posted in one conversation, oldest first.
    #[must_use]
    pub fn messages_in(&self, conversation_id: &str) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .filter(|message| message.conversation_id == conversation_id)
            .cloned()
            .collect()
    }
}

/// An event accepted by the backend, echoed with its new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEvent {
    /// Generated id, e.g. `evt-000001`.
    pub id: String,
    /// The submitted form.
    pub payload: AddEventForm,
}

/// The result of sharing a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFolder {
    /// The shared folder.
    pub folder_id: String,
    /// Members the folder was shared with.
    pub member_ids: Vec<String>,
}
