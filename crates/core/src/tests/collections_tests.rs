// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_group, create_test_task, create_test_tasks};
use crate::{
    CoreError, prepend_all, record_time_log, remove_by_id, update_task_status, upsert_by_id,
};
use workroom_domain::{Task, TaskGroup, TaskStatus, TimeLogForm};

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn test_upsert_prepends_new_record() {
    let tasks: Vec<Task> = create_test_tasks();

    let next: Vec<Task> = upsert_by_id(&tasks, create_test_task("t4", TaskStatus::ToDo));

    assert_eq!(ids(&next), vec!["t4", "t1", "t2", "t3"]);
    assert_eq!(tasks.len(), 3);
}

#[test]
fn test_upsert_replaces_existing_record_in_place() {
    let tasks: Vec<Task> = create_test_tasks();
    let replacement: Task = Task {
        name: String::from("Renamed"),
        ..create_test_task("t2", TaskStatus::InReview)
    };

    let next: Vec<Task> = upsert_by_id(&tasks, replacement);

    assert_eq!(ids(&next), vec!["t1", "t2", "t3"]);
    assert_eq!(next[1].name, "Renamed");
    assert_eq!(tasks[1].name, "Task t2");
}

#[test]
fn test_prepend_all_keeps_batch_order() {
    let groups: Vec<TaskGroup> = vec![create_test_group("backlog", "Backlog")];
    let created: Vec<TaskGroup> = vec![
        create_test_group("active", "Active"),
        create_test_group("development", "Development"),
    ];

    let next: Vec<TaskGroup> = prepend_all(&groups, &created);

    let labels: Vec<&str> = next.iter().map(|group| group.label.as_str()).collect();
    assert_eq!(labels, vec!["Active", "Development", "Backlog"]);
}

#[test]
fn test_remove_by_id() {
    let tasks: Vec<Task> = create_test_tasks();

    let next: Vec<Task> = remove_by_id(&tasks, "task", "t1").unwrap();
    assert_eq!(ids(&next), vec!["t2", "t3"]);

    let missing: Result<Vec<Task>, CoreError> = remove_by_id(&tasks, "task", "t9");
    assert!(matches!(missing, Err(CoreError::RecordNotFound { .. })));
}

#[test]
fn test_update_task_status_copies_list() {
    let tasks: Vec<Task> = create_test_tasks();

    let next: Vec<Task> = update_task_status(&tasks, "t3", TaskStatus::InReview).unwrap();

    assert_eq!(next[2].status, TaskStatus::InReview);
    assert_eq!(tasks[2].status, TaskStatus::ToDo);
    assert_eq!(next[0], tasks[0]);
}

#[test]
fn test_update_task_status_unknown_task() {
    let result: Result<Vec<Task>, CoreError> =
        update_task_status(&create_test_tasks(), "t42", TaskStatus::Done);

    assert_eq!(
        result,
        Err(CoreError::RecordNotFound {
            kind: "task",
            id: String::from("t42"),
        })
    );
}

#[test]
fn test_record_time_log_sets_logged_and_spent_time() {
    let tasks: Vec<Task> = create_test_tasks();
    let log: TimeLogForm = TimeLogForm {
        time_spent: String::from("3h 15m"),
        date: String::from("Sep 12, 2026"),
        time: String::from("4:00 PM"),
        work_description: String::from("Pairing on the filter sheet."),
    };

    let next: Vec<Task> = record_time_log(&tasks, "t2", &log).unwrap();

    assert_eq!(next[1].logged_time, "3h 15m");
    assert_eq!(next[1].spent_time, "3h 15m");
    assert_eq!(next[1].estimate, tasks[1].estimate);
}
