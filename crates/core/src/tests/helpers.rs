// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workroom_domain::{AddProjectForm, Task, TaskGroup, TaskPriority, TaskStatus};

pub fn create_test_project_form() -> AddProjectForm {
    AddProjectForm {
        project_name: String::from("Medical App"),
        starts_date: Some(String::from("Sep 1, 2026")),
        dead_line: Some(String::from("Dec 1, 2026")),
        priority: Some(TaskPriority::High),
        description: String::new(),
        avatar_preset: None,
    }
}

pub fn create_test_task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        project_id: String::from("p1"),
        reporter_id: String::from("m1"),
        group_id: String::from("active"),
        name: format!("Task {id}"),
        task_number: format!("TS-{id}"),
        estimate: String::from("1d"),
        spent_time: String::from("0h"),
        assignee_id: String::from("m2"),
        priority: TaskPriority::Medium,
        status,
        description: String::from("Test task"),
        logged_time: String::from("0h"),
        original_estimate: String::from("1d"),
        attachments: Vec::new(),
        activities: Vec::new(),
    }
}

pub fn create_test_tasks() -> Vec<Task> {
    vec![
        create_test_task("t1", TaskStatus::Done),
        create_test_task("t2", TaskStatus::InProgress),
        create_test_task("t3", TaskStatus::ToDo),
    ]
}

pub fn create_test_group(id: &str, label: &str) -> TaskGroup {
    TaskGroup {
        id: id.to_string(),
        label: label.to_string(),
    }
}
