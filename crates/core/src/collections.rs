// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Copy-on-write updates to in-memory record lists.
//!
//! Every function borrows the current list and returns a new one. Newly
//! saved records go to the front, matching how the screens show the most
//! recent record first.

use crate::error::CoreError;
use workroom_domain::{Record, Task, TaskStatus, TimeLogForm};

/// Replaces the record with the same id, or prepends it when none exists.
///
/// # Arguments
///
/// * `records` - The current list
/// * `record` - The saved record
///
/// # Returns
///
/// A new list containing `record` exactly once.
#[must_use]
pub fn upsert_by_id<R: Record + Clone>(records: &[R], record: R) -> Vec<R> {
    if records.iter().any(|existing| existing.id() == record.id()) {
        return records
            .iter()
            .map(|existing| {
                if existing.id() == record.id() {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
    }

    let mut next: Vec<R> = Vec::with_capacity(records.len() + 1);
    next.push(record);
    next.extend_from_slice(records);
    next
}

/// Prepends a batch of new records, keeping the batch order.
#[must_use]
pub fn prepend_all<R: Clone>(records: &[R], created: &[R]) -> Vec<R> {
    created.iter().chain(records).cloned().collect()
}

/// Removes the record with the given id.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record has that id.
pub fn remove_by_id<R: Record + Clone>(
    records: &[R],
    kind: &'static str,
    id: &str,
) -> Result<Vec<R>, CoreError> {
    if !records.iter().any(|record| record.id() == id) {
        return Err(not_found(kind, id));
    }
    Ok(records
        .iter()
        .filter(|record| record.id() != id)
        .cloned()
        .collect())
}

/// Moves a task to a new workflow status.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no task has that id.
pub fn update_task_status(
    tasks: &[Task],
    task_id: &str,
    status: TaskStatus,
) -> Result<Vec<Task>, CoreError> {
    map_task(tasks, task_id, |task| Task { status, ..task.clone() })
}

/// Records logged time on a task.
///
/// Both the logged and spent time labels take the form's `timeSpent` value.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no task has that id.
pub fn record_time_log(
    tasks: &[Task],
    task_id: &str,
    log: &TimeLogForm,
) -> Result<Vec<Task>, CoreError> {
    map_task(tasks, task_id, |task| Task {
        logged_time: log.time_spent.clone(),
        spent_time: log.time_spent.clone(),
        ..task.clone()
    })
}

fn map_task(
    tasks: &[Task],
    task_id: &str,
    update: impl Fn(&Task) -> Task,
) -> Result<Vec<Task>, CoreError> {
    if !tasks.iter().any(|task| task.id == task_id) {
        return Err(not_found("task", task_id));
    }
    Ok(tasks
        .iter()
        .map(|task| if task.id == task_id { update(task) } else { task.clone() })
        .collect())
}

fn not_found(kind: &'static str, id: &str) -> CoreError {
    CoreError::RecordNotFound {
        kind,
        id: id.to_string(),
    }
}
