//! # tapd-rs
//!
//! A typed async client for the [TAPD](https://www.tapd.cn) project-management
//! API, with a dispatcher for TAPD webhook events.
//!
//! ## Features
//!
//! - **Request pipeline**: typed payloads become query strings for reads and
//!   JSON bodies for writes; every response envelope is checked
//! - **Authentication**: client id/secret (basic) or personal access token
//!   (bearer), overridable per request
//! - **Resources**: stories, bugs, tasks, iterations, comments, workspaces
//!   and roles
//! - **Pagination**: lazily paged streams over list endpoints
//! - **Webhooks**: strongly typed event parsing and concurrent fan-out to
//!   listeners
//! - **Pluggable transport**: bring your own [`HttpTransport`], or wrap the
//!   default one in a [`RetryTransport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tapd_rs::TapdClient;
//! use tapd_rs::models::{GetBugsRequest, PriorityLabel};
//!
//! #[tokio::main]
//! async fn main() -> tapd_rs::Result<()> {
//!     let client = TapdClient::new("client-id", "client-secret")?;
//!
//!     let bugs = client
//!         .bugs()
//!         .get_bugs(
//!             &GetBugsRequest {
//!                 workspace_id: Some(11112222),
//!                 priority_label: Some(PriorityLabel::High),
//!                 ..Default::default()
//!             },
//!             &[],
//!         )
//!         .await?;
//!
//!     for bug in bugs {
//!         println!("{} {} ({})", bug.id, bug.title, bug.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Per-request Credentials
//!
//! ```rust,no_run
//! use tapd_rs::{RequestOption, TapdClient};
//! use tapd_rs::models::GetTasksCountRequest;
//!
//! # async fn example() -> tapd_rs::Result<()> {
//! let client = TapdClient::new("client-id", "client-secret")?;
//!
//! // This call authenticates as a user instead of the application.
//! let count = client
//!     .tasks()
//!     .get_tasks_count(
//!         &GetTasksCountRequest {
//!             workspace_id: Some(11112222),
//!             ..Default::default()
//!         },
//!         &[RequestOption::access_token("personal-access-token")],
//!     )
//!     .await?;
//! println!("{count} tasks");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use tapd_rs::TapdClient;
//! use tapd_rs::models::GetRolesRequest;
//!
//! # async fn example(client: TapdClient) {
//! match client.users().get_roles(&GetRolesRequest::default(), &[]).await {
//!     Ok(roles) => println!("{} roles", roles.len()),
//!     Err(err) if err.is_error_response() => {
//!         let response = err.as_error_response().unwrap();
//!         eprintln!("TAPD rejected the call (status {}): {}", response.status(), response.message());
//!     }
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod webhook;

// Re-export primary types at crate root for convenience
pub use auth::Auth;
pub use client::{
    ClientConfig, ErrorResponse, HttpTransport, RequestOption, Response, RetryConfig,
    RetryTransport, TapdClient,
};
pub use error::{BoxError, Error, ListenerFailure, Result};
pub use webhook::{parse_webhook_event, Dispatcher, EventType, Listener, WebhookEvent};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of this crate.
pub fn version() -> &'static str {
    VERSION
}

/// Prelude module for convenient imports.
///
/// ```rust
/// use tapd_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Auth;
    pub use crate::client::{ClientConfig, PaginatedStream, RequestOption, TapdClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Parameter encoders
        Enum, Multi, Order, OrderDirection,
        // Enums
        CommentEntryType, OperateObject, OperateType, PriorityLabel, TaskStatus,
        // Entities
        Bug, Comment, Iteration, Story, Task, User, Workspace,
    };
    pub use crate::webhook::{listener_fn, Dispatcher, EventType, Listener, WebhookEvent};
}
