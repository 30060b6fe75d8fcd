// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validators.
//!
//! Every validator is a pure function of a field value (and sometimes a
//! sibling value or outside context) that returns `None` when the field is
//! valid and `Some(FieldError)` otherwise. Unparseable input is reported as
//! an error, never as a panic.

use crate::error::{FieldError, ValidationErrorKind};
use crate::types::VacationRequestType;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use time::Time;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[allow(clippy::expect_used)]
static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*(AM|PM)$").expect("clock pattern compiles")
});

/// A declarative rule for a free-text field.
///
/// Rules are applied in order and the first failing rule wins. When a rule
/// list has no `Required` entry, a blank value passes all remaining rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    /// The trimmed value must not be empty.
    Required(&'static str),
    /// The trimmed value must look like `local@domain.tld`.
    Email(&'static str),
    /// The trimmed value must have at least `min` characters.
    MinLength {
        /// Minimum number of characters.
        min: usize,
        /// Message shown when the value is too short.
        message: &'static str,
    },
}

/// Applies a list of text rules to a value.
///
/// # Arguments
///
/// * `value` - The raw field value
/// * `rules` - The rules to apply, in order
///
/// # Returns
///
/// The error from the first failing rule, or `None`.
#[must_use]
pub fn apply_text_rules(value: &str, rules: &[TextRule]) -> Option<FieldError> {
    if value.trim().is_empty() {
        return rules.iter().find_map(|rule| match rule {
            TextRule::Required(message) => require_text(value, message),
            TextRule::Email(_) | TextRule::MinLength { .. } => None,
        });
    }

    rules.iter().find_map(|rule| match *rule {
        TextRule::Required(message) => require_text(value, message),
        TextRule::Email(message) => check_email(value, message),
        TextRule::MinLength { min, message } => check_min_length(value, min, message),
    })
}

/// Fails with `Missing` when the trimmed value is empty.
#[must_use]
pub fn require_text(value: &str, message: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(ValidationErrorKind::Missing, message))
}

/// Fails with `Missing` when no value has been selected.
#[must_use]
pub fn require_selection<T>(value: Option<&T>, message: &str) -> Option<FieldError> {
    value
        .is_none()
        .then(|| FieldError::new(ValidationErrorKind::Missing, message))
}

/// Fails with `Missing` when no option has been picked.
///
/// An empty string counts as no selection.
#[must_use]
pub fn require_choice(value: Option<&str>, message: &str) -> Option<FieldError> {
    value
        .is_none_or(str::is_empty)
        .then(|| FieldError::new(ValidationErrorKind::Missing, message))
}

/// Returns whether the trimmed value has the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Fails with `InvalidFormat` when the value is not an email address.
///
/// Blank values fail as well; combine with [`require_text`] (or use
/// [`apply_text_rules`]) to report them as `Missing` instead.
#[must_use]
pub fn check_email(value: &str, message: &str) -> Option<FieldError> {
    (!is_valid_email(value)).then(|| FieldError::new(ValidationErrorKind::InvalidFormat, message))
}

/// Fails with `TooShort` when the trimmed value has fewer than `min` characters.
#[must_use]
pub fn check_min_length(value: &str, min: usize, message: &str) -> Option<FieldError> {
    (value.trim().chars().count() < min)
        .then(|| FieldError::new(ValidationErrorKind::TooShort, message))
}

/// Fails with `InvalidFormat` unless the joined cells form exactly `len` ASCII digits.
///
/// # Arguments
///
/// * `cells` - One entry per code input box
/// * `len` - Required number of digits
/// * `message` - Message shown on failure
#[must_use]
pub fn check_digit_code(cells: &[String], len: usize, message: &str) -> Option<FieldError> {
    let code: String = cells.concat();
    let code: &str = code.trim();
    let valid: bool = code.len() == len && code.bytes().all(|b| b.is_ascii_digit());
    (!valid).then(|| FieldError::new(ValidationErrorKind::InvalidFormat, message))
}

/// Converts a 12-hour clock string such as `9:05 AM` or `12:30pm` to
/// minutes since midnight.
///
/// Input is trimmed and upper-cased first. Only the shape is checked: any
/// one or two digit hour and two digit minute are accepted, `12 AM` is
/// midnight and `12 PM` is noon.
#[must_use]
pub fn minutes_since_midnight(value: &str) -> Option<u16> {
    let normalized: String = value.trim().to_uppercase();
    let captures = CLOCK_PATTERN.captures(&normalized)?;

    let hours: u16 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u16 = captures.get(2)?.as_str().parse().ok()?;
    let hours_24: u16 = match (captures.get(3)?.as_str(), hours) {
        ("AM", 12) => 0,
        ("PM", h) if h != 12 => h + 12,
        (_, h) => h,
    };

    Some(hours_24 * 60 + minutes)
}

/// Parses a 12-hour clock string into a time of day.
///
/// Stricter than [`minutes_since_midnight`]: hours must be 1 through 12
/// and minutes 0 through 59.
#[must_use]
pub fn parse_clock_time(value: &str) -> Option<Time> {
    let normalized: String = value.trim().to_uppercase();
    let captures = CLOCK_PATTERN.captures(&normalized)?;
    let hours: u8 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u8 = captures.get(2)?.as_str().parse().ok()?;
    if !(1..=12).contains(&hours) || minutes > 59 {
        return None;
    }

    let total: u16 = minutes_since_midnight(&normalized)?;
    Time::from_hms(u8::try_from(total / 60).ok()?, u8::try_from(total % 60).ok()?, 0).ok()
}

/// Fails with `InvalidRange` unless `to` is strictly after `from`.
///
/// Either bound failing to parse also fails the range.
#[must_use]
pub fn check_time_range(from: &str, to: &str, message: &str) -> Option<FieldError> {
    match (minutes_since_midnight(from), minutes_since_midnight(to)) {
        (Some(start), Some(end)) if end > start => None,
        _ => Some(FieldError::new(ValidationErrorKind::InvalidRange, message)),
    }
}

/// Formats the length of a time window as `4h` or `1h 30m`.
///
/// Returns `0h` when either bound fails to parse or the window is not
/// increasing.
#[must_use]
pub fn duration_label(from: &str, to: &str) -> String {
    let (Some(start), Some(end)) = (minutes_since_midnight(from), minutes_since_midnight(to))
    else {
        return String::from("0h");
    };
    if end <= start {
        return String::from("0h");
    }

    let duration: u16 = end - start;
    let hours: u16 = duration / 60;
    let minutes: u16 = duration % 60;
    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}m")
    }
}

/// Fails with `QuotaExceeded` when a vacation request asks for more days than remain.
///
/// Only quota-limited request types are checked; other types always pass.
///
/// # Arguments
///
/// * `request_type` - The request category
/// * `requested` - Number of days requested
/// * `remaining` - Days left in the balance
#[must_use]
pub fn check_vacation_quota(
    request_type: VacationRequestType,
    requested: usize,
    remaining: u32,
) -> Option<FieldError> {
    let remaining_days: usize = usize::try_from(remaining).unwrap_or(usize::MAX);
    (request_type.is_quota_limited() && requested > remaining_days).then(|| {
        FieldError::new(
            ValidationErrorKind::QuotaExceeded,
            format!("You have {remaining} days of Vacation left"),
        )
    })
}

/// Tracks values already seen in a repeatable field.
///
/// Values are compared after trimming and lower-casing, in source order, so
/// the second occurrence of a value is the one reported.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen: HashSet<String>,
}

impl DuplicateTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` and fails with `Duplicate` if it was already recorded.
    pub fn check(&mut self, value: &str, message: &str) -> Option<FieldError> {
        let key: String = value.trim().to_lowercase();
        (!self.seen.insert(key)).then(|| FieldError::new(ValidationErrorKind::Duplicate, message))
    }
}
