//! Client configuration options.

use std::env;
use std::time::Duration;

use crate::auth::Auth;
use crate::{Error, Result};

/// Default base URL of the TAPD open API.
pub const DEFAULT_BASE_URL: &str = "https://api.tapd.cn/";

/// Configuration for the TAPD client.
///
/// # Example
///
/// ```
/// use tapd_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_basic_auth("client-id", "client-secret")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.base_url, "https://api.tapd.cn/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is resolved against
    pub base_url: String,
    /// Credentials; a client cannot be built without them
    pub auth: Option<Auth>,
    /// User-Agent header value (empty to omit the header)
    pub user_agent: String,
    /// Request timeout of the default transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: None,
            user_agent: format!("tapd-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `TAPD_*` environment variables.
    ///
    /// | Variable             | Effect                              |
    /// |----------------------|-------------------------------------|
    /// | `TAPD_BASE_URL`      | overrides the base URL              |
    /// | `TAPD_ACCESS_TOKEN`  | token auth (wins over basic auth)   |
    /// | `TAPD_CLIENT_ID`     | basic auth client id                |
    /// | `TAPD_CLIENT_SECRET` | basic auth client secret            |
    /// | `TAPD_USER_AGENT`    | overrides the user agent            |
    ///
    /// Fails with [`Error::Config`] when neither a token nor a complete
    /// id/secret pair is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();

        if let Some(base_url) = var("TAPD_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(user_agent) = var("TAPD_USER_AGENT") {
            config = config.with_user_agent(user_agent);
        }

        config.auth = match (
            var("TAPD_ACCESS_TOKEN"),
            var("TAPD_CLIENT_ID"),
            var("TAPD_CLIENT_SECRET"),
        ) {
            (Some(token), _, _) => Some(Auth::token(token)),
            (None, Some(id), Some(secret)) => Some(Auth::basic(id, secret)),
            _ => {
                return Err(Error::Config(
                    "set TAPD_ACCESS_TOKEN, or both TAPD_CLIENT_ID and TAPD_CLIENT_SECRET"
                        .to_string(),
                ))
            }
        };

        Ok(config)
    }

    /// Set the base URL. A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the credentials.
    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Use basic authentication, replacing any token.
    pub fn with_basic_auth(self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.with_auth(Auth::basic(client_id, client_secret))
    }

    /// Use a personal access token, replacing any basic credentials.
    pub fn with_access_token(self, access_token: impl Into<String>) -> Self {
        self.with_auth(Auth::token(access_token))
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout of the default transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse the base URL, appending a trailing `/` when missing.
    pub(crate) fn parsed_base_url(&self) -> Result<url::Url> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        url::Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid base URL `{}`: {e}", self.base_url)))
    }
}

/// Configuration for automatic retries in [`RetryTransport`].
///
/// Idempotent requests (GET, HEAD) are retried on transient errors with
/// exponential backoff.
///
/// [`RetryTransport`]: crate::RetryTransport
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial backoff duration
    pub initial_backoff: Duration,
    /// Maximum backoff duration
    pub max_backoff: Duration,
    /// HTTP status codes to retry on
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            retry_statuses: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Backoff before retry number `attempt` (zero-based), capped at `max_backoff`.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// Check if a status code should be retried.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }
}
