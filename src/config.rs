//! Build-time client configuration.
//!
//! A static WASM bundle has no process environment at runtime, so the API
//! base URL is baked in from `VIDHYARDHI_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Connection settings for the external REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the `VIDHYARDHI_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("VIDHYARDHI_API_URL"))
    }

    /// Build config from an optional raw base URL, falling back to the default
    /// when absent or blank.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Join an API path (leading slash expected) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
