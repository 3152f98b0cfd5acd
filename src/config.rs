//! API client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable               | Default                       |
//! |------------------------|-------------------------------|
//! | `NHL_API_URL`          | `https://api-web.nhle.com/v1` |
//! | `NHL_API_TIMEOUT_SECS` | `10`                          |
//! | `NHL_API_USER_AGENT`   | `nhl-goals/<version>`         |

use std::time::Duration;

use crate::error::GoalsError;

/// Default base URL of the NHL web API.
pub const DEFAULT_API_URL: &str = "https://api-web.nhle.com/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for talking to the stats API.
///
/// Loaded once at startup via [`ApiConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without trailing slash.
    pub base_url: String,

    /// Timeout applied to each individual request.
    pub request_timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ApiConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Config`] if `NHL_API_URL` is set to something
    /// other than an `http(s)://` URL.
    pub fn from_env() -> Result<Self, GoalsError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("NHL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let request_timeout_secs = parse_env("NHL_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let user_agent =
            std::env::var("NHL_API_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self::new(base_url, request_timeout_secs, user_agent)
    }

    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Config`] if `base_url` is not an `http(s)://`
    /// URL or the timeout is zero.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout_secs: u64,
        user_agent: impl Into<String>,
    ) -> Result<Self, GoalsError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GoalsError::Config(format!(
                "NHL_API_URL must start with http:// or https://, got {base_url:?}"
            )));
        }
        if request_timeout_secs == 0 {
            return Err(GoalsError::Config(
                "NHL_API_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            base_url,
            request_timeout_secs,
            user_agent: user_agent.into(),
        })
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("nhl-goals/{}", env!("CARGO_PKG_VERSION"))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
