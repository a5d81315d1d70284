//! Where the analysis service lives and how long to wait for it.

use std::time::Duration;

/// Build-time service URL, e.g. `ANALYZER_API_URL=https://api.example.com trunk build`.
const BUILD_API_URL: Option<&str> = option_env!("ANALYZER_API_URL");

/// Preference key for the runtime override set on the Settings page.
pub const API_URL_PREFERENCE: &str = "api_base_url";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pick the base URL: saved override, then build-time value, then the
    /// page origin.
    pub fn resolve(saved_override: Option<&str>, build_value: Option<&str>, origin: &str) -> Self {
        let chosen = [saved_override, build_value]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(origin);
        Self::new(chosen)
    }

    /// Resolve against the running page.
    pub fn from_environment(saved_override: Option<&str>) -> Self {
        Self::resolve(saved_override, BUILD_API_URL, &default_origin())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn default_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

// Native builds only run tests and tooling; point them at the dev server.
#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> String {
    "http://localhost:8000".to_string()
}
