//! Uniform service response envelope
//!
//! Every public lookup operation returns one of these — success, domain
//! not-found, or internal error — so the web layer never has to interpret
//! anything beyond the stored status code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// Whether the lookup resolved a non-empty result
    pub success: bool,
    /// Fixed per-outcome message (e.g. "Brand found", "Brand not found")
    pub message: String,
    /// HTTP status code as u16 (200, 404, 500)
    pub status_code: u16,
    /// Resolved payload, `None` on not-found and error outcomes
    pub payload: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            status_code: 200,
            payload: Some(payload),
        }
    }

    /// Domain-level empty result. Not an error: a valid query that
    /// legitimately matched nothing.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status_code: 404,
            payload: None,
        }
    }

    /// Unexpected failure, already logged at the service boundary. The
    /// message stays generic; internal detail never leaves the core.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status_code: 500,
            payload: None,
        }
    }
}
