// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canned data served by the mock gateway.
//!
//! Fixtures are compiled into the binary and decoded on every call, so
//! each caller gets an independent copy.

use crate::error::GatewayError;
use crate::snapshot::{MessengerSnapshot, ProfileSnapshot, ProjectsSnapshot};
use serde::de::DeserializeOwned;

const PROJECTS: &str = include_str!("../fixtures/projects.json");
const PROFILE: &str = include_str!("../fixtures/profile.json");
const MESSENGER: &str = include_str!("../fixtures/messenger.json");

fn decode<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, GatewayError> {
    serde_json::from_str(json)
        .map_err(|err| GatewayError::InvalidPayload(format!("{name} fixture: {err}")))
}

/// Decodes the projects fixture.
///
/// # Errors
///
/// Returns `GatewayError::InvalidPayload` if the fixture does not decode.
pub fn projects_snapshot() -> Result<ProjectsSnapshot, GatewayError> {
    decode("projects", PROJECTS)
}

/// Decodes the profile fixture.
///
/// # Errors
///
/// Returns `GatewayError::InvalidPayload` if the fixture does not decode.
pub fn profile_snapshot() -> Result<ProfileSnapshot, GatewayError> {
    decode("profile", PROFILE)
}

/// Decodes the messenger fixture.
///
/// # Errors
///
/// Returns `GatewayError::InvalidPayload` if the fixture does not decode.
pub fn messenger_snapshot() -> Result<MessengerSnapshot, GatewayError> {
    decode("messenger", MESSENGER)
}
