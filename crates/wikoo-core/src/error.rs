// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Wikoo wellness companion.

use thiserror::Error;

/// The primary error type used across all Wikoo adapters and services.
///
/// None of these are fatal to the companion: callers in the report and chat
/// flows convert them into displayable fallback states.
#[derive(Debug, Error)]
pub enum WikooError {
    /// Configuration errors (invalid TOML, unsupported values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value could not be serialized for persistence or transport.
    #[error("serialization error: {source}")]
    Serialization {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A remote companion service call failed (transport error or non-success status).
    #[error("service unavailable: {message}")]
    Service {
        message: String,
        status: Option<u16>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A host capability (speech synthesis, recognition) is not available.
    #[error("capability unsupported: {0}")]
    CapabilityUnsupported(String),

    /// Caller-supplied input was rejected.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WikooError {
    /// Returns true if this error came from a remote service call.
    pub fn is_service(&self) -> bool {
        matches!(self, WikooError::Service { .. })
    }

    /// HTTP status of a failed service call, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            WikooError::Service { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WikooError {
    fn from(e: serde_json::Error) -> Self {
        WikooError::Serialization {
            source: Box::new(e),
        }
    }
}
