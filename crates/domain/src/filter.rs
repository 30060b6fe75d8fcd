// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived-list filtering.
//!
//! Filters never touch their source: every call borrows a slice and returns
//! a fresh vector holding the records that survived, in source order.

use crate::error::DomainError;
use crate::records::Task;
use crate::types::TaskPriority;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static DAY_COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)d").expect("day count pattern compiles"));

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// An ordered list of predicates followed by an optional prefix limit.
///
/// A record survives when every predicate accepts it. The limit is applied
/// after all predicates have run.
pub struct ListFilter<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
    limit: Option<usize>,
}

impl<T> Default for ListFilter<'_, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            limit: None,
        }
    }
}

impl<T> fmt::Debug for ListFilter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFilter")
            .field("predicates", &self.predicates.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl<'a, T> ListFilter<'a, T> {
    /// Creates a filter that keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate records must satisfy.
    #[must_use]
    pub fn keep(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Adds a predicate only when `active` is true.
    #[must_use]
    pub fn keep_when(self, active: bool, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        if active { self.keep(predicate) } else { self }
    }

    /// Keeps at most `limit` records after the predicates have run.
    #[must_use]
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Returns whether a single record passes every predicate.
    #[must_use]
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Applies the filter to `items`.
    #[must_use]
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items
            .iter()
            .filter(|item| self.matches(item))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// A reporting period preset.
///
/// Periods are placeholders: they keep a fixed-size prefix of the list
/// rather than comparing dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// No restriction.
    #[default]
    All,
    /// First three records.
    Today,
    /// First five records.
    Week,
    /// No restriction.
    Month,
}

impl Period {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Returns how many records this period keeps, or `None` for all of them.
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Today => Some(3),
            Self::Week => Some(5),
            Self::All | Self::Month => None,
        }
    }
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(DomainError::UnknownValue {
                kind: "period",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An estimate size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimateBucket {
    /// Hour-only estimates.
    #[serde(rename = "8h")]
    UpToEightHours,
    /// One or two days.
    #[serde(rename = "1-2d")]
    OneToTwoDays,
    /// Three days or more.
    #[serde(rename = "3d+")]
    ThreeDaysPlus,
}

impl EstimateBucket {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpToEightHours => "8h",
            Self::OneToTwoDays => "1-2d",
            Self::ThreeDaysPlus => "3d+",
        }
    }

    /// Returns whether an estimate label such as `2d 4h` falls in this bucket.
    #[must_use]
    pub fn matches(self, estimate: &str) -> bool {
        match self {
            Self::UpToEightHours => estimate.contains('h') && !estimate.contains('d'),
            Self::OneToTwoDays => matches!(day_count(estimate), Some(1 | 2)),
            Self::ThreeDaysPlus => day_count(estimate).is_some_and(|days| days >= 3),
        }
    }
}

impl FromStr for EstimateBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8h" => Ok(Self::UpToEightHours),
            "1-2d" => Ok(Self::OneToTwoDays),
            "3d+" => Ok(Self::ThreeDaysPlus),
            _ => Err(DomainError::UnknownValue {
                kind: "estimate bucket",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EstimateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracts the day component of an estimate label.
///
/// # Returns
///
/// The number before the first `d` (e.g. `2` for `2d 4h`), or `None` if the
/// label has no day component or the number does not fit.
#[must_use]
pub fn day_count(estimate: &str) -> Option<u32> {
    DAY_COUNT_PATTERN
        .captures(estimate)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// A priority criterion: everything, or one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    /// No restriction.
    #[default]
    All,
    /// Only tasks with this priority.
    Only(TaskPriority),
}

impl PriorityFilter {
    /// Returns whether a task priority passes this criterion.
    #[must_use]
    pub fn matches(self, priority: TaskPriority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriorityFilter> for String {
    fn from(value: PriorityFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(priority) => write!(f, "{priority}"),
        }
    }
}

/// Criteria for the task board filter sheet.
///
/// Empty id lists, `PriorityFilter::All`, no estimate bucket and
/// `Period::All` each mean "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    /// Allowed task groups.
    pub task_group_ids: Vec<String>,
    /// Allowed reporters.
    pub reporter_ids: Vec<String>,
    /// Allowed assignees.
    pub assignee_ids: Vec<String>,
    /// Priority criterion.
    pub priority: PriorityFilter,
    /// Estimate bucket.
    pub estimate: Option<EstimateBucket>,
    /// Period preset.
    pub period: Period,
}

impl TaskFilter {
    /// Returns whether no criterion restricts the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the list filter for these criteria.
    ///
    /// Predicates run in a fixed order: task group, reporter, assignee,
    /// priority, estimate. The period limit is applied last.
    #[must_use]
    pub fn to_list_filter(&self) -> ListFilter<'_, Task> {
        let priority: PriorityFilter = self.priority;
        let estimate: Option<EstimateBucket> = self.estimate;
        ListFilter::new()
            .keep_when(!self.task_group_ids.is_empty(), |task: &Task| {
                self.task_group_ids.contains(&task.group_id)
            })
            .keep_when(!self.reporter_ids.is_empty(), |task: &Task| {
                self.reporter_ids.contains(&task.reporter_id)
            })
            .keep_when(!self.assignee_ids.is_empty(), |task: &Task| {
                self.assignee_ids.contains(&task.assignee_id)
            })
            .keep_when(priority != PriorityFilter::All, move |task: &Task| {
                priority.matches(task.priority)
            })
            .keep_when(estimate.is_some(), move |task: &Task| {
                estimate.is_some_and(|bucket| bucket.matches(&task.estimate))
            })
            .limit(self.period.limit())
    }
}

/// Applies task board criteria to a task list.
///
/// # Arguments
///
/// * `tasks` - The source list, left untouched
/// * `filter` - The criteria
///
/// # Returns
///
/// The surviving tasks in source order.
#[must_use]
pub fn apply_task_filters(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    filter.to_list_filter().apply(tasks)
}

/// Groups tasks by task group id, keeping first-seen group order and the
/// task order within each group.
#[must_use]
pub fn tasks_by_group(tasks: &[Task]) -> Vec<(String, Vec<Task>)> {
    let mut groups: Vec<(String, Vec<Task>)> = Vec::new();
    for task in tasks {
        match groups.iter_mut().find(|(id, _)| *id == task.group_id) {
            Some((_, members)) => members.push(task.clone()),
            None => groups.push((task.group_id.clone(), vec![task.clone()])),
        }
    }
    groups
}
