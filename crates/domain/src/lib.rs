// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod error;
mod filter;
mod forms;
mod records;
mod rules;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{ErrorEntry, ValidationErrors, error_messages, has_errors};
pub use error::{DomainError, FieldError, ValidationErrorKind};
pub use filter::{
    EstimateBucket, ListFilter, Period, PriorityFilter, TaskFilter, apply_task_filters, day_count,
    tasks_by_group,
};
pub use search::{Searchable, matches_query, search};

// Forms and their validators
pub use forms::{
    AddEmployeeErrors, AddEmployeeForm, AddEventErrors, AddEventForm, AddProjectErrors,
    AddProjectForm, AddRequestErrors, AddRequestForm, AddTaskErrors, AddTaskForm, FieldValue,
    Form, RequestContext, ShareFolderErrors, ShareFolderForm, SignInErrors, SignInForm,
    SignUpErrors, SignUpForm, SignUpStep, StepFourErrors, StepOneErrors, StepThreeErrors,
    StepTwoErrors, TimeLogErrors, TimeLogForm, validate_add_employee, validate_add_event,
    validate_add_project, validate_add_request, validate_add_task, validate_share_folder,
    validate_sign_in, validate_status_selection, validate_step_four, validate_step_one,
    validate_step_three, validate_step_two, validate_time_log,
};

// Re-export public types
pub use records::{
    AuthSession, ChatMessage, ConversationSummary, Employee, Project, Record, Seniority, Task,
    TaskActivity, TaskAttachment, TaskGroup, TeamMember, VacationRequest, VacationStatus,
    display_name_from_email,
};
pub use rules::{
    DuplicateTracker, TextRule, apply_text_rules, check_digit_code, check_email,
    check_min_length, check_time_range, check_vacation_quota, duration_label, is_valid_email,
    minutes_since_midnight, parse_clock_time, require_choice, require_selection, require_text,
};
pub use types::{
    ConversationType, MessageKind, RepeatCadence, TaskPriority, TaskStatus, VacationMode,
    VacationRequestType, YesNo,
};
