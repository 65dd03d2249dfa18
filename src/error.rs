//! Error types for the TAPD API client.
//!
//! This module provides a single error type covering every failure mode of
//! the request pipeline and the webhook dispatcher. Business-level failures
//! reported by the API (an envelope whose `status` is not `1`) are kept apart
//! from transport, encoding and decoding failures so callers can branch on
//! them with [`Error::is_error_response`].

use std::fmt;

use thiserror::Error;

use crate::client::ErrorResponse;
use crate::webhook::EventType;

/// A specialized `Result` type for TAPD operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by webhook listeners and custom transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for all TAPD operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client is misconfigured (missing auth mode, bad base URL).
    ///
    /// Never retried; surfaced as soon as it is detected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A payload could not be converted to JSON or query parameters, a path
    /// could not be decoded, or a header value was rejected.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport failed
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The API answered with an envelope whose `status` is not `1`.
    #[error("API error: {0}")]
    Api(Box<ErrorResponse>),

    /// The response envelope or its `data` payload was malformed,
    /// or a webhook payload did not match its event shape.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A webhook payload has no string `event` field.
    #[error("Webhook event type not found in payload")]
    MissingDiscriminator,

    /// A webhook payload names an event type outside the known set.
    #[error("Unsupported webhook event: {0}")]
    UnsupportedEvent(String),

    /// One or more webhook listeners failed.
    ///
    /// Every registered listener has run to completion by the time this
    /// error is returned.
    #[error("{} of {total} listener(s) failed for {event_type}: {}", .failures.len(), first_failure(.failures))]
    Dispatch {
        /// Event type that was being dispatched
        event_type: EventType,
        /// Number of listeners that were invoked
        total: usize,
        /// Every failure, ordered by registration index
        failures: Vec<ListenerFailure>,
    },

    /// The body of an inbound webhook request could not be read.
    #[error("Failed to read webhook body: {0}")]
    Body(#[source] BoxError),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A single failed listener invocation.
#[derive(Debug)]
pub struct ListenerFailure {
    /// Position of the listener in its registration list
    pub index: usize,
    /// The error the listener returned (or the panic it raised)
    pub error: BoxError,
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener #{}: {}", self.index, self.error)
    }
}

fn first_failure(failures: &[ListenerFailure]) -> String {
    failures
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl Error {
    /// Returns `true` if the API itself rejected the call (envelope
    /// `status != 1`), as opposed to a transport or encoding failure.
    ///
    /// # Example
    ///
    /// ```
    /// use tapd_rs::Error;
    ///
    /// fn handle(err: &Error) {
    ///     if err.is_error_response() {
    ///         println!("TAPD said no: {err}");
    ///     }
    /// }
    /// ```
    pub fn is_error_response(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Borrow the envelope-level error details, if this is an API error.
    pub fn as_error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api(response) => Some(response.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if a response or payload failed to decode.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by an outer layer.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Error::Transport(_) => true,
            _ => false,
        }
    }

    pub(crate) fn encoding(message: impl fmt::Display) -> Self {
        Error::Encoding(message.to_string())
    }
}
