//! Backend client configuration
//!
//! Resolves the backend origin and request deadline from environment
//! variables. Resolution never fails: missing or blank values fall back to
//! defaults.

use std::time::Duration;
use tracing::warn;

/// Server-side override of the backend origin
pub const API_URL_OVERRIDE_VAR: &str = "MOT_API_URL";

/// Public build-time backend origin
pub const PUBLIC_API_URL_VAR: &str = "PUBLIC_API_URL";

/// Request deadline in seconds
pub const API_TIMEOUT_VAR: &str = "API_TIMEOUT_SECS";

/// Origin used when neither variable is set
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

/// Deadline applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the backend REST client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Deadline for a single request
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for an explicit origin with the default deadline
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_origin(&base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Replace the request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `MOT_API_URL`: explicit server-side origin override
    /// - `PUBLIC_API_URL`: public origin (used when no override is set)
    /// - `API_TIMEOUT_SECS`: request deadline in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a new ApiConfig from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = present(API_URL_OVERRIDE_VAR)
            .or_else(|| present(PUBLIC_API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());

        let timeout_seconds = match present(API_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => seconds,
                _ => {
                    warn!(
                        "Invalid {} value {:?}, using default of {} seconds",
                        API_TIMEOUT_VAR, raw, DEFAULT_TIMEOUT_SECONDS
                    );
                    DEFAULT_TIMEOUT_SECONDS
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Self::new(base_url).with_timeout(Duration::from_secs(timeout_seconds))
    }

    /// Turn a path template into a fully qualified URL
    ///
    /// Absolute `http://` and `https://` inputs are returned untouched.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}

/// Resolve a path template against the origin configured in the environment
pub fn resolve_url(path: &str) -> String {
    ApiConfig::from_env().resolve_url(path)
}

fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}
