//! HTTP client and request pipeline for the TAPD API.
//!
//! This module provides the main entry point [`TapdClient`] together with
//! the pieces of the request pipeline: configuration, per-request options,
//! the pluggable transport and the response envelope.
//!
//! # Example
//!
//! ```no_run
//! use reqwest::Method;
//! use tapd_rs::models::CountResponse;
//! use tapd_rs::TapdClient;
//!
//! # async fn example() -> tapd_rs::Result<()> {
//! let client = TapdClient::from_access_token("personal-token")?;
//!
//! // Drop down to the raw pipeline for endpoints without a typed method.
//! #[derive(serde::Serialize)]
//! struct Query {
//!     workspace_id: i64,
//! }
//!
//! let request = client.new_request(Method::GET, "releases/count", &Query { workspace_id: 11112222 }, &[])?;
//! let (count, response) = client.send::<CountResponse>(request).await?;
//! println!("{} releases (HTTP {})", count.count, response.status_code());
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod options;
pub mod paginated;
mod query;
mod response;
mod transport;

pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use http::TapdClient;
pub use options::RequestOption;
pub use paginated::{PaginatedStream, DEFAULT_PAGE_SIZE};
pub use response::{Envelope, ErrorResponse, Response};
pub use transport::{HttpTransport, RetryTransport};
pub(crate) use http::ClientInner;
pub(crate) use paginated::PaginatedStreamBuilder;
