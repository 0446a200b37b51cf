//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses carry a human-readable `message` field which is surfaced
//! verbatim. When the body has none, the per-endpoint fallback text is used so
//! callers always have something to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The configured base URL cannot carry the requested path.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from a raw response body, preferring its `message` field.
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        Self::Rejected { status, message: rejection_message(body, fallback) }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected { status: 404, .. })
    }
}

/// Extract the `message` field from an error body, or fall back.
pub fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
