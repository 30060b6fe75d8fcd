// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend boundary for Workroom.
//!
//! Screens talk to the backend through the async [`WorkroomGateway`]
//! trait. [`MockGateway`] serves canned fixtures after a configurable
//! delay and hands out sequential ids for created records.

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

mod config;
mod error;
mod fixtures;
mod gateway;
mod mock;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types
pub use config::{GatewayConfig, LatencyConfig, RequestCalendar};
pub use error::GatewayError;
pub use fixtures::{messenger_snapshot, profile_snapshot, projects_snapshot};
pub use gateway::WorkroomGateway;
pub use mock::MockGateway;
pub use snapshot::{
    MessengerSnapshot, ProfileSnapshot, ProjectsSnapshot, SavedEvent, SharedFolder,
};
