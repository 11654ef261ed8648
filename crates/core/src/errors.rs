use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport / API ─────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({service}): {message}")]
    Api {
        service: String,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Client-side ─────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("No portfolio is selected")]
    NoPortfolioSelected,
}

impl CoreError {
    /// The server-provided business message, when this error carries one.
    /// Used by the dashboard to build user-facing alerts for failed writes.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CoreError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // token or query secret never ends up in the log sink.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
