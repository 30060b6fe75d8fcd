// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors returned by a [`crate::WorkroomGateway`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The referenced record does not exist on the backend.
    ///
    /// [`crate::MockGateway`] never returns this; every id is accepted.
    #[error("No {kind} with id '{id}'")]
    NotFound {
        /// Record kind, e.g. `task`.
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },
    /// A payload could not be decoded or built.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

