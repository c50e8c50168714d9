//! POS gateway error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the TouchBistro gateway.
///
/// Every variant maps to one failure class of the single outbound request:
/// a non-success HTTP status, an unparseable body, a network-level failure,
/// or a query string that could not be encoded.
#[derive(Debug, Error)]
pub enum PosError {
    /// The API answered with a non-success status. The upstream diagnostic
    /// is preserved verbatim in the message.
    #[error("TouchBistro API error: {status} {status_text} - {body}")]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The response body claimed JSON but failed to parse.
    #[error("Invalid JSON in API response: {0}")]
    Parse(#[source] serde_json::Error),

    /// Network-level failure reaching the API host.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Query parameters could not be encoded.
    #[error("Failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl PosError {
    /// Create an upstream error from a status code and raw body text.
    pub fn upstream(status: StatusCode, body: String) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        }
    }
}
