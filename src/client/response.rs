//! Response envelope and response metadata.

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// The `{status, data, info}` wrapper every TAPD response uses.
///
/// `status == 1` means success; any other value is a business-level
/// failure described by `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `1` on success
    pub status: i64,
    /// Payload, often `{}` on failure
    #[serde(default)]
    pub data: Value,
    /// Human-readable message
    #[serde(default)]
    pub info: String,
}

impl Envelope {
    /// Returns `true` if the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}

/// Metadata of a completed HTTP exchange.
///
/// The body has already been consumed by the time a `Response` is handed
/// out; the decoded payload is returned alongside it.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
}

impl Response {
    pub(crate) fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP status code as a number.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the request, after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A call the API rejected with `status != 1`.
///
/// Carries the HTTP response metadata and the raw envelope; its message is
/// the envelope's `info`.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    response: Response,
    envelope: Envelope,
}

impl ErrorResponse {
    pub(crate) fn new(response: Response, envelope: Envelope) -> Self {
        Self { response, envelope }
    }

    /// The HTTP response the envelope arrived in.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// The raw envelope.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// The envelope's `status` value.
    pub fn status(&self) -> i64 {
        self.envelope.status
    }

    /// The envelope's `info` message.
    pub fn message(&self) -> &str {
        &self.envelope.info
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.envelope.info)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_defaults() {
        let envelope: Envelope = serde_json::from_str(r#"{"status":0}"#).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.data, Value::Null);
        assert_eq!(envelope.info, "");
    }

    #[test]
    fn test_envelope_requires_status() {
        assert!(serde_json::from_str::<Envelope>(r#"{"data":{},"info":"x"}"#).is_err());
    }
}
