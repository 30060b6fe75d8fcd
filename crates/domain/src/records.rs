// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain records returned by the gateway.
//!
//! Records are immutable snapshots identified by a string id. Lists of
//! records are updated by building a new list, never in place.

use crate::types::{ConversationType, MessageKind, TaskPriority, TaskStatus, VacationRequestType};
use serde::{Deserialize, Serialize};

/// A record with a stable string identifier.
pub trait Record {
    /// Returns the record's identifier.
    fn id(&self) -> &str;
}

/// A person who can report or be assigned work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar background color (CSS hex).
    pub avatar_color: String,
}

/// A column of the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    /// Group identifier (e.g. `backlog`).
    pub id: String,
    /// Display label.
    pub label: String,
}

/// A project on the projects screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Human-facing project number (e.g. `PN0001245`).
    pub number: String,
    /// Free-form description.
    pub description: String,
    /// Start date label, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Member who created the project.
    pub reporter_id: String,
    /// Members working on the project.
    pub assignee_ids: Vec<String>,
    /// Project priority.
    pub priority: TaskPriority,
    /// Deadline label.
    pub deadline: String,
    /// Creation date label.
    pub created_at: String,
    /// Avatar preset chosen at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_preset: Option<String>,
}

/// A file attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAttachment {
    /// Attachment identifier.
    pub id: String,
    /// File name.
    pub name: String,
    /// Size label (e.g. `1.1 MB`).
    pub size: String,
}

/// An entry in a task's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskActivity {
    /// Activity identifier.
    pub id: String,
    /// Member who performed the activity.
    pub user_id: String,
    /// Headline.
    pub title: String,
    /// Detail line.
    pub subtitle: String,
}

/// A task within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier.
    pub id: String,
    /// Owning project.
    pub project_id: String,
    /// Member who reported the task.
    pub reporter_id: String,
    /// Board column.
    pub group_id: String,
    /// Task name.
    pub name: String,
    /// Human-facing task number.
    pub task_number: String,
    /// Remaining estimate label (e.g. `2d 4h`).
    pub estimate: String,
    /// Time spent label.
    pub spent_time: String,
    /// Member the task is assigned to.
    pub assignee_id: String,
    /// Task priority.
    pub priority: TaskPriority,
    /// Workflow status.
    pub status: TaskStatus,
    /// Free-form description.
    pub description: String,
    /// Logged time label.
    pub logged_time: String,
    /// Estimate at creation.
    pub original_estimate: String,
    /// Attached files.
    #[serde(default)]
    pub attachments: Vec<TaskAttachment>,
    /// Activity feed, newest last.
    #[serde(default)]
    pub activities: Vec<TaskActivity>,
}

/// Seniority level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seniority {
    /// Junior.
    Junior,
    /// Middle.
    Middle,
    /// Senior.
    Senior,
}

impl Seniority {
    const ROTATION: [Self; 3] = [Self::Junior, Self::Middle, Self::Senior];

    /// Picks a seniority for the `index`-th invited employee.
    #[must_use]
    pub const fn for_invite_index(index: usize) -> Self {
        Self::ROTATION[index % Self::ROTATION.len()]
    }
}

/// An employee in the company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Work email.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Seniority level.
    pub seniority: Seniority,
    /// Number of backlog tasks.
    pub backlog_tasks: u32,
    /// Number of tasks in progress.
    pub in_progress_tasks: u32,
    /// Number of tasks in review.
    pub in_review_tasks: u32,
}

/// Derives a display name for an invited employee from their email address.
///
/// The local part is stripped of characters other than ASCII letters,
/// digits, `.`, `_` and `-`, split on those separators, and each part is
/// capitalized. A single part gets a ` User` suffix so the name reads as
/// two words; an email with no usable parts falls back to `Member {n}`
/// where `n` is the one-based position in the invite list.
///
/// # Arguments
///
/// * `email` - The invited email address
/// * `index` - Zero-based position of the email in the invite list
#[must_use]
pub fn display_name_from_email(email: &str, index: usize) -> String {
    let local: &str = email.split('@').next().unwrap_or_default();
    let cleaned: String = local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let parts: Vec<String> = cleaned
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();

    match parts.len() {
        0 => format!("Member {}", index + 1),
        1 => format!("{} User", parts[0]),
        _ => parts.join(" "),
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}

/// A row of the messenger's conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    /// Conversation identifier.
    pub id: String,
    /// Group or direct.
    #[serde(rename = "type")]
    pub conversation_type: ConversationType,
    /// Conversation title.
    pub title: String,
    /// Secondary line (member count or role).
    pub subtitle: String,
    /// Preview of the latest message.
    pub last_message_preview: String,
    /// Time label of the latest message.
    pub last_message_time: String,
    /// Unread message count.
    pub unread_count: u32,
    /// Participants.
    pub member_ids: Vec<String>,
}

/// A message inside a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message identifier.
    pub id: String,
    /// Owning conversation.
    pub conversation_id: String,
    /// Author.
    pub sender_id: String,
    /// Time label.
    pub time_label: String,
    /// Payload kind.
    pub kind: MessageKind,
    /// Text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Shared file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Shared file size or type label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_meta: Option<String>,
    /// Shared link label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
}

/// Approval state of a time-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VacationStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

/// A submitted time-off request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    /// Request identifier.
    pub id: String,
    /// Request category.
    #[serde(rename = "type")]
    pub request_type: VacationRequestType,
    /// Period label (dates or time window).
    pub period_label: String,
    /// Duration label (e.g. `3 days`, `4h`).
    pub duration_label: String,
    /// Approval state.
    pub status: VacationStatus,
}

/// The session returned after signing in or signing up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Opaque session token.
    pub token: String,
    /// The signed-in user.
    pub user_id: String,
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TaskGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ConversationSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ChatMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for VacationRequest {
    fn id(&self) -> &str {
        &self.id
    }
}
