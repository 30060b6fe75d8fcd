// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_tasks;
use crate::{
    DomainError, EstimateBucket, ListFilter, Period, PriorityFilter, Task, TaskFilter,
    TaskPriority, apply_task_filters, day_count, tasks_by_group,
};

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn test_empty_criteria_return_full_source_in_order() {
    let tasks: Vec<Task> = create_test_tasks();
    let filter: TaskFilter = TaskFilter::default();

    assert!(filter.is_empty());
    assert_eq!(apply_task_filters(&tasks, &filter), tasks);
}

#[test]
fn test_filtering_is_idempotent_and_leaves_source_unchanged() {
    let tasks: Vec<Task> = create_test_tasks();
    let snapshot: Vec<Task> = tasks.clone();
    let filter: TaskFilter = TaskFilter {
        assignee_ids: vec![String::from("m7")],
        ..TaskFilter::default()
    };

    let first: Vec<Task> = apply_task_filters(&tasks, &filter);
    let second: Vec<Task> = apply_task_filters(&tasks, &filter);

    assert_eq!(first, second);
    assert_eq!(tasks, snapshot);
    assert_eq!(ids(&first), vec!["t2", "t3", "t7"]);
}

#[test]
fn test_group_and_reporter_sets() {
    let tasks: Vec<Task> = create_test_tasks();
    let filter: TaskFilter = TaskFilter {
        task_group_ids: vec![String::from("active"), String::from("backlog")],
        reporter_ids: vec![String::from("m7")],
        ..TaskFilter::default()
    };

    assert_eq!(ids(&apply_task_filters(&tasks, &filter)), vec!["t3", "t4", "t7"]);
}

#[test]
fn test_priority_filter() {
    let tasks: Vec<Task> = create_test_tasks();
    let filter: TaskFilter = TaskFilter {
        priority: PriorityFilter::Only(TaskPriority::Low),
        ..TaskFilter::default()
    };

    assert_eq!(ids(&apply_task_filters(&tasks, &filter)), vec!["t3", "t4", "t8"]);
}

#[test]
fn test_estimate_bucket_filters() {
    let tasks: Vec<Task> = create_test_tasks();
    let by_bucket = |bucket: EstimateBucket| -> Vec<String> {
        let filter: TaskFilter = TaskFilter {
            estimate: Some(bucket),
            ..TaskFilter::default()
        };
        apply_task_filters(&tasks, &filter)
            .into_iter()
            .map(|task| task.id)
            .collect()
    };

    assert_eq!(by_bucket(EstimateBucket::UpToEightHours), vec!["t7", "t8"]);
    assert_eq!(by_bucket(EstimateBucket::OneToTwoDays), vec!["t1", "t2", "t4", "t6"]);
    assert_eq!(by_bucket(EstimateBucket::ThreeDaysPlus), vec!["t3", "t5"]);
}

#[test]
fn test_estimate_bucket_matches() {
    assert!(EstimateBucket::UpToEightHours.matches("4h"));
    assert!(!EstimateBucket::OneToTwoDays.matches("4h"));
    assert!(EstimateBucket::OneToTwoDays.matches("2d"));
    assert!(!EstimateBucket::UpToEightHours.matches("2d"));
    assert!(EstimateBucket::ThreeDaysPlus.matches("5d"));
    assert!(!EstimateBucket::ThreeDaysPlus.matches("12h"));
    assert!(!EstimateBucket::OneToTwoDays.matches("12d"));
}

#[test]
fn test_day_count() {
    assert_eq!(day_count("2d 4h"), Some(2));
    assert_eq!(day_count("10D"), Some(10));
    assert_eq!(day_count("6h"), None);
}

#[test]
fn test_period_truncates_after_predicates() {
    let tasks: Vec<Task> = create_test_tasks();
    let today: TaskFilter = TaskFilter {
        period: Period::Today,
        ..TaskFilter::default()
    };
    let week_medium: TaskFilter = TaskFilter {
        priority: PriorityFilter::Only(TaskPriority::Medium),
        period: Period::Week,
        ..TaskFilter::default()
    };
    let month: TaskFilter = TaskFilter {
        period: Period::Month,
        ..TaskFilter::default()
    };

    assert_eq!(ids(&apply_task_filters(&tasks, &today)), vec!["t1", "t2", "t3"]);
    assert_eq!(
        ids(&apply_task_filters(&tasks, &week_medium)),
        vec!["t1", "t2", "t5", "t7"]
    );
    assert_eq!(apply_task_filters(&tasks, &month).len(), tasks.len());
}

#[test]
fn test_filter_deserializes_wire_values() {
    let json: &str = r#"{"taskGroupIds":["active"],"priority":"high","estimate":"1-2d","period":"week"}"#;
    let filter: TaskFilter = serde_json::from_str(json).unwrap();

    assert_eq!(filter.priority, PriorityFilter::Only(TaskPriority::High));
    assert_eq!(filter.estimate, Some(EstimateBucket::OneToTwoDays));
    assert_eq!(filter.period, Period::Week);
    assert!(filter.reporter_ids.is_empty());
}

#[test]
fn test_priority_filter_parses_all_sentinel() {
    assert_eq!("all".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
    assert!(matches!(
        "urgent".parse::<PriorityFilter>(),
        Err(DomainError::UnknownValue { .. })
    ));
    assert_eq!(PriorityFilter::Only(TaskPriority::Low).to_string(), "low");
}

#[test]
fn test_list_filter_combines_predicates_and_limit() {
    let numbers: Vec<u32> = (1..=10).collect();
    let filter: ListFilter<'_, u32> = ListFilter::new()
        .keep(|n: &u32| n % 2 == 0)
        .keep_when(false, |_: &u32| false)
        .limit(Some(3));

    assert_eq!(filter.apply(&numbers), vec![2, 4, 6]);
    assert!(filter.matches(&8));
}

#[test]
fn test_tasks_by_group_preserves_order() {
    let tasks: Vec<Task> = create_test_tasks();
    let groups: Vec<(String, Vec<Task>)> = tasks_by_group(&tasks);

    let summary: Vec<(&str, usize)> = groups
        .iter()
        .map(|(id, members)| (id.as_str(), members.len()))
        .collect();
    assert_eq!(
        summary,
        vec![("active", 5), ("development", 1), ("backlog", 2)]
    );
    assert_eq!(ids(&groups[0].1), vec!["t1", "t2", "t3", "t4", "t5"]);
}
