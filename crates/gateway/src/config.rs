// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mock gateway configuration.
//!
//! Every field has a default, so a config file only needs to name the
//! values it overrides.

use serde::{Deserialize, Serialize};

/// Simulated round-trip latency per gateway operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyConfig {
    /// Delay before [`crate::WorkroomGateway::sign_in`] returns.
    pub sign_in: u64,
    /// Delay before [`crate::WorkroomGateway::complete_sign_up`] returns.
    pub sign_up: u64,
    /// Delay before [`crate::WorkroomGateway::save_event`] returns.
    pub save_event: u64,
    /// Delay before [`crate::WorkroomGateway::save_project`] returns.
    pub save_project: u64,
    /// Delay before [`crate::WorkroomGateway::save_task`] returns.
    pub save_task: u64,
    /// Delay before [`crate::WorkroomGateway::fetch_projects_snapshot`] returns.
    pub fetch_projects: u64,
    /// Delay before [`crate::WorkroomGateway::save_projects_filter`] returns.
    pub save_filter: u64,
    /// Delay before [`crate::WorkroomGateway::update_task_status`] returns.
    pub update_status: u64,
    /// Delay before [`crate::WorkroomGateway::save_time_log`] returns.
    pub save_time_log: u64,
    /// Delay before [`crate::WorkroomGateway::invite_employees`] returns.
    pub invite_employees: u64,
    /// Delay before [`crate::WorkroomGateway::share_folder`] returns.
    pub share_folder: u64,
    /// Delay before [`crate::WorkroomGateway::fetch_profile_snapshot`] returns.
    pub fetch_profile: u64,
    /// Delay before [`crate::WorkroomGateway::submit_vacation_request`] returns.
    pub submit_vacation: u64,
    /// Delay before [`crate::WorkroomGateway::fetch_messenger_snapshot`] returns.
    pub fetch_messenger: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            sign_in: 650,
            sign_up: 900,
            save_event: 650,
            save_project: 700,
            save_task: 650,
            fetch_projects: 500,
            save_filter: 350,
            update_status: 300,
            save_time_log: 650,
            invite_employees: 380,
            share_folder: 320,
            fetch_profile: 450,
            submit_vacation: 600,
            fetch_messenger: 450,
        }
    }
}

impl LatencyConfig {
    /// All latencies set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sign_in: 0,
            sign_up: 0,
            save_event: 0,
            save_project: 0,
            save_task: 0,
            fetch_projects: 0,
            save_filter: 0,
            update_status: 0,
            save_time_log: 0,
            invite_employees: 0,
            share_folder: 0,
            fetch_profile: 0,
            submit_vacation: 0,
            fetch_messenger: 0,
        }
    }
}

/// The month shown by the vacation request day picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestCalendar {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 through 12.
    pub month: u8,
}

impl Default for RequestCalendar {
    fn default() -> Self {
        Self {
            year: 2020,
            month: 9,
        }
    }
}

/// Configuration for [`crate::MockGateway`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayConfig {
    /// Per-operation latency.
    pub latency_ms: LatencyConfig,
    /// Calendar used to label submitted vacation requests.
    pub request_calendar: RequestCalendar,
}

impl GatewayConfig {
    /// A configuration with every latency zeroed.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency_ms: LatencyConfig::zero(),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
