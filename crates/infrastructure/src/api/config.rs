//! Auth API client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("Keystone/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Configuration for [`crate::HttpAuthApi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthApiConfig {
    /// Base URL of the auth API, e.g. `https://api.keystone.app/`.
    pub base_url: Url,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl AuthApiConfig {
    /// Creates a configuration with default timeout and user agent.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
