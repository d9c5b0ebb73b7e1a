//! Public configuration for the OpenAI client.

use std::fmt;
use std::time::Duration;

/// Default API root, without the trailing `/chat/completions`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for [`crate::OpenAiChatClient`].
///
/// Only a connect timeout is applied. Streamed completions can run for
/// minutes, so there is no overall request timeout.
///
/// # Example
///
/// ```
/// use formate_openai::OpenAiConfig;
/// use std::time::Duration;
///
/// let config = OpenAiConfig::new()
///     .with_api_key("sk-test")
///     .with_connect_timeout(Duration::from_secs(5));
/// assert!(config.has_api_key());
/// ```
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API root, e.g. `https://api.openai.com/v1`
    pub(crate) base_url: String,
    /// Bearer credential; calls fail fast without one
    pub(crate) api_key: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// TCP connect timeout
    pub(crate) connect_timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: concat!("formate-openai/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl OpenAiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key. Blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout. Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the chat completions endpoint.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
