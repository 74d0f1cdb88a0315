// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Callboard workspace.
//!
//! Every accessor call either resolves with data or fails with exactly one
//! [`CallboardError`]. View controllers inspect [`CallboardError::kind`] to
//! decide whether a failure is tolerable for the view they are loading.

use std::time::Duration;

use thiserror::Error;

/// Operator-facing text for transport failures.
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Operator-facing text for server-side failures.
pub const SERVER_FAILURE_MESSAGE: &str = "The server failed to process the request.";

/// The primary error type used across the accessors, controllers and console.
#[derive(Debug, Error)]
pub enum CallboardError {
    /// The request never produced an HTTP response (DNS, refused connection, reset).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request did not complete within the client timeout.
    #[error("request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// The backend answered 404.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The backend rejected the request with a 4xx other than 404.
    #[error("request rejected ({status}): {message}")]
    Client { status: u16, message: String },

    /// The backend answered 5xx.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Client construction or configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse failure classes that view policies are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// Timeout or unreachable network.
    Transport,
    /// 404 from the backend.
    NotFound,
    /// Any other 4xx, or a local validation failure.
    Client,
    /// 5xx or an undecodable success body.
    Server,
    /// Problems on this side that are not request outcomes.
    Internal,
}

impl CallboardError {
    /// Classifies the error into the failure taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            CallboardError::Transport { .. } | CallboardError::Timeout { .. } => {
                FailureKind::Transport
            }
            CallboardError::NotFound { .. } => FailureKind::NotFound,
            CallboardError::Client { .. } | CallboardError::Validation(_) => FailureKind::Client,
            CallboardError::Server { .. } | CallboardError::Decode { .. } => FailureKind::Server,
            CallboardError::Config(_) | CallboardError::Internal(_) => FailureKind::Internal,
        }
    }

    /// Returns true when the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CallboardError::NotFound { .. })
    }

    /// HTTP status carried by the failure, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CallboardError::NotFound { .. } => Some(404),
            CallboardError::Client { status, .. } | CallboardError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Text to show the operator.
    ///
    /// Client rejections and validation failures carry the backend (or local)
    /// message verbatim; transport and server failures use generic wording.
    pub fn user_message(&self) -> String {
        match self {
            CallboardError::Transport { .. } | CallboardError::Timeout { .. } => {
                CONNECTIVITY_MESSAGE.to_string()
            }
            CallboardError::NotFound { message }
            | CallboardError::Client { message, .. }
            | CallboardError::Validation(message) => message.clone(),
            CallboardError::Server { .. } | CallboardError::Decode { .. } => {
                SERVER_FAILURE_MESSAGE.to_string()
            }
            CallboardError::Config(message) | CallboardError::Internal(message) => message.clone(),
        }
    }
}
