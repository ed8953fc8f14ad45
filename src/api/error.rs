//! Unified error handling for StockChef API calls.
//!
//! Every failure surfaced by the client maps onto one of four variants:
//! a rejected or expired session, input refused before any request was
//! sent, a non-success response from the server, or a transport failure
//! underneath (connect, timeout, body decode).

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 401. Any stored session token is stale.
    #[error("authentication failed: {message}")]
    Unauthorized { message: String },

    /// Input rejected locally, before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Any other non-success response from the server.
    #[error("server error {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout, or response decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Unauthorized error (401) - credentials rejected or session expired
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
        }
    }

    /// Validation error - request never left the client
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Server rejection with its HTTP status
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ApiError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }
}

/// Error envelope used by the server: `{"detail": ...}` where `detail`
/// is either a plain message or a list of field errors.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Extract a printable message from an error response body.
///
/// Returns `None` when the body is not the expected envelope, in which
/// case callers fall back to a generic message.
pub(crate) fn detail_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg"))
                .filter_map(|msg| msg.as_str())
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
