use serde::{Deserialize, Serialize};

/// Connection settings for the backend REST gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the API gateway (e.g., "http://localhost:8080/api").
    /// Service clients append their own path segments to this.
    pub api_base_url: String,

    /// Per-request timeout in seconds. Applied on native targets only;
    /// on WASM the browser owns request timeouts.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Build settings from the environment, falling back to defaults.
    /// Honors `PORTFOLIO_API_URL` for the gateway base URL.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("PORTFOLIO_API_URL") {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }
        settings
    }
}
