// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EstimateBucket, Period, RepeatCadence, TaskPriority, TaskStatus, VacationMode,
    VacationRequestType, YesNo,
};
use std::str::FromStr;

#[test]
fn test_task_status_wire_values() {
    for status in [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
    ] {
        assert_eq!(TaskStatus::from_str(status.as_str()), Ok(status));
    }
    assert_eq!(TaskStatus::ToDo.to_string(), "to-do");
}

#[test]
fn test_unknown_value_is_a_typed_error() {
    let result: Result<TaskPriority, DomainError> = "urgent".parse();

    assert_eq!(
        result,
        Err(DomainError::UnknownValue {
            kind: "priority",
            value: String::from("urgent"),
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Unknown priority value 'urgent'"
    );
}

#[test]
fn test_request_type_quota() {
    assert!(VacationRequestType::Vacation.is_quota_limited());
    assert!(!VacationRequestType::SickLeave.is_quota_limited());
    assert!(!VacationRequestType::WorkRemotely.is_quota_limited());
    assert_eq!(
        "sick-leave".parse::<VacationRequestType>(),
        Ok(VacationRequestType::SickLeave)
    );
}

#[test]
fn test_defaults() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
    assert_eq!(VacationMode::default(), VacationMode::Days);
    assert_eq!(RepeatCadence::default(), RepeatCadence::Weekly);
    assert_eq!(Period::default(), Period::All);
}

#[test]
fn test_serde_uses_wire_values() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InReview).unwrap(),
        "\"in-review\""
    );
    assert_eq!(
        serde_json::to_string(&EstimateBucket::ThreeDaysPlus).unwrap(),
        "\"3d+\""
    );
    let answer: YesNo = serde_json::from_str("\"no\"").unwrap();
    assert_eq!(answer, YesNo::No);
}

#[test]
fn test_period_limits() {
    assert_eq!(Period::Today.limit(), Some(3));
    assert_eq!(Period::Week.limit(), Some(5));
    assert_eq!(Period::Month.limit(), None);
    assert_eq!("month".parse::<Period>(), Ok(Period::Month));
}
