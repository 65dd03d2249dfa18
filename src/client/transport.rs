//! Pluggable HTTP transport.
//!
//! The client hands every prepared request to an [`HttpTransport`]. The
//! default is a plain `reqwest::Client`; [`RetryTransport`] can be layered
//! on top of any transport to retry idempotent requests.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tracing::warn;

use super::config::RetryConfig;
use crate::Result;

/// Executes a prepared request and returns the raw HTTP response.
///
/// Implement this to route requests through a custom stack (a proxy, a
/// recording layer in tests, a shared connection pool).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the response without inspecting its body.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        (**self).execute(request).await
    }
}

/// Retries idempotent requests on transport errors and retryable statuses.
///
/// Only `GET` and `HEAD` requests are retried, with exponential backoff
/// capped by [`RetryConfig::max_backoff`]. Other methods pass straight
/// through to the wrapped transport.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use tapd_rs::{ClientConfig, RetryConfig, RetryTransport, TapdClient};
///
/// # fn example() -> tapd_rs::Result<()> {
/// let transport = RetryTransport::new(reqwest::Client::new(), RetryConfig::default());
/// let config = ClientConfig::default().with_access_token("token");
/// let client = TapdClient::with_transport(config, Arc::new(transport))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RetryTransport<T> {
    inner: T,
    config: RetryConfig,
}

impl<T: HttpTransport> RetryTransport<T> {
    /// Wrap `inner` with the given retry policy.
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// The retry policy in use.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for RetryTransport<T> {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let idempotent = matches!(*request.method(), Method::GET | Method::HEAD);
        if !idempotent || self.config.max_retries == 0 {
            return self.inner.execute(request).await;
        }

        let mut attempt = 0;
        loop {
            // Bodies that cannot be cloned (streams) get a single attempt.
            let Some(retry_copy) = request.try_clone() else {
                return self.inner.execute(request).await;
            };

            let outcome = self.inner.execute(retry_copy).await;
            let retryable = match &outcome {
                Ok(response) => self.config.should_retry_status(response.status().as_u16()),
                Err(err) => err.is_retryable(),
            };

            if !retryable || attempt >= self.config.max_retries {
                return outcome;
            }

            let backoff = self.config.backoff_for_attempt(attempt);
            match outcome {
                Ok(response) => {
                    warn!(
                        url = %request.url(),
                        status = response.status().as_u16(),
                        attempt = attempt + 1,
                        backoff_ms = backoff.as_millis() as u64,
                        "Retrying request after retryable status"
                    );
                    // Drain the discarded body so the connection can be reused.
                    let _ = response.bytes().await;
                }
                Err(err) => warn!(
                    url = %request.url(),
                    error = %err,
                    attempt = attempt + 1,
                    backoff_ms = backoff.as_millis() as u64,
                    "Retrying request after transport error"
                ),
            }

            tokio::time::sleep(backoff).await;
            attempt += 1;
        }
    }
}

