//! Webhook event parsing and dispatch.
//!
//! TAPD delivers webhooks as flat JSON objects whose `event` field names
//! the kind of change (`story::create`, `bug_comment::add`, ...).
//! [`parse_webhook_event`] turns a payload into a typed [`WebhookEvent`];
//! a [`Dispatcher`] fans events out to the [`Listener`]s registered for
//! their type.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tapd_rs::webhook::{listener_fn, Dispatcher, StoryCreateEvent};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn handle(request: http::Request<String>) -> tapd_rs::Result<()> {
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(listener_fn(|_cancel, event: StoryCreateEvent| async move {
//!     println!("story {} created in {}", event.name, event.meta.workspace_id);
//!     Ok(())
//! }));
//! let dispatcher = Arc::new(dispatcher);
//!
//! dispatcher
//!     .dispatch_request(&CancellationToken::new(), request)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod dispatcher;
mod events;
mod fields;
mod listener;
mod parser;
mod payloads;

pub use dispatcher::{Dispatcher, Subscription};
pub use events::{EventType, TypedEvent, WebhookEvent};
pub use fields::{ChangeFields, EventMeta};
pub use listener::{listener_fn, FnListener, Listener};
pub use parser::parse_webhook_event;
pub use payloads::*;
