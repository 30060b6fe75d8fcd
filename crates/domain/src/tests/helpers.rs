// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AddEmployeeForm, AddEventForm, AddProjectForm, AddRequestForm, AddTaskForm,
    ConversationSummary, ConversationType, ShareFolderForm, SignInForm, SignUpForm, Task,
    TaskPriority, TaskStatus, TimeLogForm, VacationMode, VacationRequestType, YesNo,
};

pub fn create_test_task(
    id: &str,
    group_id: &str,
    estimate: &str,
    assignee_id: &str,
    reporter_id: &str,
    priority: TaskPriority,
) -> Task {
    Task {
        id: id.to_string(),
        project_id: String::from("p1"),
        reporter_id: reporter_id.to_string(),
        group_id: group_id.to_string(),
        name: format!("Task {id}"),
        task_number: format!("TS-{id}"),
        estimate: estimate.to_string(),
        spent_time: String::from("0h"),
        assignee_id: assignee_id.to_string(),
        priority,
        status: TaskStatus::ToDo,
        description: String::from("Test task"),
        logged_time: String::from("0h"),
        original_estimate: estimate.to_string(),
        attachments: Vec::new(),
        activities: Vec::new(),
    }
}

/// Eight tasks shaped like the projects board fixture.
pub fn create_test_tasks() -> Vec<Task> {
    vec![
        create_test_task("t1", "active", "2d 4h", "m4", "m1", TaskPriority::Medium),
        create_test_task("t2", "active", "1d 2h", "m7", "m1", TaskPriority::Medium),
        create_test_task("t3", "active", "4d", "m7", "m7", TaskPriority::Low),
        create_test_task("t4", "active", "2d", "m1", "m7", TaskPriority::Low),
        create_test_task("t5", "active", "6d", "m8", "m1", TaskPriority::Medium),
        create_test_task("t6", "development", "2d 6h", "m2", "m2", TaskPriority::High),
        create_test_task("t7", "backlog", "8h", "m7", "m7", TaskPriority::Medium),
        create_test_task("t8", "backlog", "2h", "m8", "m8", TaskPriority::Low),
    ]
}

pub fn create_test_conversation(id: &str, title: &str, preview: &str) -> ConversationSummary {
    ConversationSummary {
        id: id.to_string(),
        conversation_type: ConversationType::Group,
        title: title.to_string(),
        subtitle: String::from("3 members"),
        last_message_preview: preview.to_string(),
        last_message_time: String::from("10:00 AM"),
        unread_count: 0,
        member_ids: vec![String::from("m1"), String::from("m2")],
    }
}

pub fn create_valid_sign_in_form() -> SignInForm {
    SignInForm {
        email: String::from("oscar@workroom.dev"),
        password: String::from("secret1"),
        remember_me: true,
    }
}

pub fn create_valid_sign_up_form() -> SignUpForm {
    SignUpForm {
        country_code: String::from("+1"),
        phone_number: String::from("5550100"),
        sms_code: vec![
            String::from("1"),
            String::from("2"),
            String::from("3"),
            String::from("4"),
        ],
        email: String::from("oscar@workroom.dev"),
        password: String::from("longpassword"),
        usage_reason: Some(String::from("work")),
        user_role: Some(String::from("designer")),
        onboarding_preference: Some(YesNo::Yes),
        company_name: String::from("Workroom"),
        business_direction: Some(String::from("it")),
        team_size: Some(String::from("2-5")),
        invites: vec![String::from("violet@workroom.dev"), String::new()],
    }
}

pub fn create_valid_event_form() -> AddEventForm {
    AddEventForm {
        event_name: String::from("Sprint review"),
        category: Some(String::from("meeting")),
        priority: Some(String::from("medium")),
        date: Some(String::from("Sep 12, 2026")),
        time: Some(String::from("10:00 AM")),
        ..AddEventForm::default()
    }
}

pub fn create_valid_project_form() -> AddProjectForm {
    AddProjectForm {
        project_name: String::from("Medical App"),
        starts_date: Some(String::from("Sep 1, 2026")),
        dead_line: Some(String::from("Dec 1, 2026")),
        priority: Some(TaskPriority::High),
        ..AddProjectForm::default()
    }
}

pub fn create_valid_task_form() -> AddTaskForm {
    AddTaskForm {
        task_name: String::from("Design login"),
        task_group_id: Some(String::from("active")),
        estimate: Some(String::from("2d")),
        dead_line: Some(String::from("Oct 1, 2026")),
        priority: Some(TaskPriority::Medium),
        assignee_id: Some(String::from("m2")),
        description: String::new(),
    }
}

pub fn create_valid_time_log_form() -> TimeLogForm {
    TimeLogForm {
        time_spent: String::from("2h 30m"),
        date: String::from("Sep 12, 2026"),
        time: String::from("4:00 PM"),
        work_description: String::from("Reviewed the onboarding flow."),
    }
}

pub fn create_valid_employee_form() -> AddEmployeeForm {
    AddEmployeeForm {
        emails: vec![
            String::from("wayne@workroom.dev"),
            String::from("evan@workroom.dev"),
        ],
    }
}

pub fn create_valid_share_form() -> ShareFolderForm {
    ShareFolderForm {
        member_ids: vec![Some(String::from("m1")), Some(String::from("m2"))],
    }
}

pub fn create_days_request(request_type: VacationRequestType, days: usize) -> AddRequestForm {
    AddRequestForm {
        request_type,
        mode: VacationMode::Days,
        selected_days: (1..=u32::try_from(days).unwrap()).collect(),
        ..AddRequestForm::default()
    }
}

pub fn create_hours_request(from_time: &str, to_time: &str) -> AddRequestForm {
    AddRequestForm {
        request_type: VacationRequestType::WorkRemotely,
        mode: VacationMode::Hours,
        from_time: from_time.to_string(),
        to_time: to_time.to_string(),
        ..AddRequestForm::default()
    }
}
