// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project and task creation forms, and the task status picker.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError};
use crate::rules::{TextRule, apply_text_rules, require_choice, require_selection};
use crate::types::{TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// The add-project form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddProjectForm {
    /// Project name.
    pub project_name: String,
    /// Start date label.
    pub starts_date: Option<String>,
    /// Deadline label.
    pub dead_line: Option<String>,
    /// Project priority.
    pub priority: Option<TaskPriority>,
    /// Free-form description.
    pub description: String,
    /// Chosen avatar preset.
    pub avatar_preset: Option<String>,
}

/// Errors for [`AddProjectForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddProjectErrors {
    /// Error for `projectName`.
    pub project_name: Option<FieldError>,
    /// Error for `startsDate`.
    pub starts_date: Option<FieldError>,
    /// Error for `deadLine`.
    pub dead_line: Option<FieldError>,
    /// Error for `priority`.
    pub priority: Option<FieldError>,
}

impl ValidationErrors for AddProjectErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("projectName", ErrorEntry::Single(self.project_name.as_ref())),
            ("startsDate", ErrorEntry::Single(self.starts_date.as_ref())),
            ("deadLine", ErrorEntry::Single(self.dead_line.as_ref())),
            ("priority", ErrorEntry::Single(self.priority.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "projectName" => self.project_name = None,
            "startsDate" => self.starts_date = None,
            "deadLine" => self.dead_line = None,
            "priority" => self.priority = None,
            _ => {}
        }
    }
}

/// Validates the add-project form.
#[must_use]
pub fn validate_add_project(form: &AddProjectForm) -> AddProjectErrors {
    AddProjectErrors {
        project_name: apply_text_rules(
            &form.project_name,
            &[TextRule::Required("Project name is required.")],
        ),
        starts_date: require_choice(form.starts_date.as_deref(), "Start date is required."),
        dead_line: require_choice(form.dead_line.as_deref(), "Deadline is required."),
        priority: require_selection(form.priority.as_ref(), "Priority is required."),
    }
}

impl Form for AddProjectForm {
    type Errors = AddProjectErrors;
    type Context = ();

    const NAME: &'static str = "add-project";

    fn validate(&self, _context: &()) -> AddProjectErrors {
        validate_add_project(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "projectName" => next.project_name = value.into_text(field)?,
            "startsDate" => next.starts_date = value.into_choice(field)?,
            "deadLine" => next.dead_line = value.into_choice(field)?,
            "priority" => next.priority = value.into_parsed(field)?,
            "description" => next.description = value.into_text(field)?,
            "avatarPreset" => next.avatar_preset = value.into_choice(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}

/// The add-task form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddTaskForm {
    /// Task name.
    pub task_name: String,
    /// Board column.
    pub task_group_id: Option<String>,
    /// Estimate label (e.g. `2d 4h`).
    pub estimate: Option<String>,
    /// Deadline label.
    pub dead_line: Option<String>,
    /// Task priority.
    pub priority: Option<TaskPriority>,
    /// Assigned member.
    pub assignee_id: Option<String>,
    /// Free-form description.
    pub description: String,
}

/// Errors for [`AddTaskForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddTaskErrors {
    /// Error for `taskName`.
    pub task_name: Option<FieldError>,
    /// Error for `taskGroupId`.
    pub task_group_id: Option<FieldError>,
    /// Error for `estimate`.
    pub estimate: Option<FieldError>,
    /// Error for `deadLine`.
    pub dead_line: Option<FieldError>,
    /// Error for `priority`.
    pub priority: Option<FieldError>,
    /// Error for `assigneeId`.
    pub assignee_id: Option<FieldError>,
}

impl ValidationErrors for AddTaskErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("taskName", ErrorEntry::Single(self.task_name.as_ref())),
            ("taskGroupId", ErrorEntry::Single(self.task_group_id.as_ref())),
            ("estimate", ErrorEntry::Single(self.estimate.as_ref())),
            ("deadLine", ErrorEntry::Single(self.dead_line.as_ref())),
            ("priority", ErrorEntry::Single(self.priority.as_ref())),
            ("assigneeId", ErrorEntry::Single(self.assignee_id.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "taskName" => self.task_name = None,
            "taskGroupId" => self.task_group_id = None,
            "estimate" => self.estimate = None,
            "deadLine" => self.dead_line = None,
            "priority" => self.priority = None,
            "assigneeId" => self.assignee_id = None,
            _ => {}
        }
    }
}

/// Validates the add-task form.
#[must_use]
pub fn validate_add_task(form: &AddTaskForm) -> AddTaskErrors {
    AddTaskErrors {
        task_name: apply_text_rules(
            &form.task_name,
            &[TextRule::Required("Task name is required.")],
        ),
        task_group_id: require_choice(form.task_group_id.as_deref(), "Task group is required."),
        estimate: require_choice(form.estimate.as_deref(), "Estimate is required."),
        dead_line: require_choice(form.dead_line.as_deref(), "Deadline is required."),
        priority: require_selection(form.priority.as_ref(), "Priority is required."),
        assignee_id: require_choice(form.assignee_id.as_deref(), "Assignee is required."),
    }
}

impl Form for AddTaskForm {
    type Errors = AddTaskErrors;
    type Context = ();

    const NAME: &'static str = "add-task";

    fn validate(&self, _context: &()) -> AddTaskErrors {
        validate_add_task(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "taskName" => next.task_name = value.into_text(field)?,
            "taskGroupId" => next.task_group_id = value.into_choice(field)?,
            "estimate" => next.estimate = value.into_choice(field)?,
            "deadLine" => next.dead_line = value.into_choice(field)?,
            "priority" => next.priority = value.into_parsed(field)?,
            "assigneeId" => next.assignee_id = value.into_choice(field)?,
            "description" => next.description = value.into_text(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}

/// Validates the status picked when moving a task during review.
#[must_use]
pub fn validate_status_selection(status: Option<TaskStatus>) -> Option<FieldError> {
    require_selection(status.as_ref(), "Select task status.")
}
