//! Listener capabilities.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::BoxError;

/// Reacts to one kind of webhook event.
///
/// `E` is the payload type, e.g. [`BugCreateEvent`](super::BugCreateEvent).
/// A type that cares about several events implements `Listener` once per
/// payload type and is enrolled into each list with
/// [`Dispatcher::subscribe`](super::Dispatcher::subscribe).
///
/// Every listener registered for an event runs concurrently with the
/// others. `cancel` is shared by all of them. It is cancelled when the
/// caller's token is cancelled or when the dispatch future is dropped before
/// it completes; long-running listeners should watch it.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use tapd_rs::webhook::{BugCreateEvent, Listener};
/// use tapd_rs::BoxError;
/// use tokio_util::sync::CancellationToken;
///
/// struct Notifier;
///
/// #[async_trait]
/// impl Listener<BugCreateEvent> for Notifier {
///     async fn on_event(&self, _cancel: &CancellationToken, event: &BugCreateEvent) -> Result<(), BoxError> {
///         println!("new bug {} in {}", event.title, event.meta.workspace_id);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Listener<E>: Send + Sync {
    /// Handle one event.
    async fn on_event(&self, cancel: &CancellationToken, event: &E) -> Result<(), BoxError>;
}

#[async_trait]
impl<E, L> Listener<E> for Arc<L>
where
    E: Sync,
    L: Listener<E> + ?Sized,
{
    async fn on_event(&self, cancel: &CancellationToken, event: &E) -> Result<(), BoxError> {
        (**self).on_event(cancel, event).await
    }
}

/// A [`Listener`] backed by an async closure. Built by [`listener_fn`].
pub struct FnListener<F> {
    f: F,
}

/// Adapt an async closure into a [`Listener`].
///
/// The closure receives a clone of the cancellation token and of the event.
///
/// ```
/// use tapd_rs::webhook::{listener_fn, Dispatcher, TaskUpdateEvent};
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(listener_fn(|_cancel, event: TaskUpdateEvent| async move {
///     println!("task {} changed: {}", event.meta.id, event.change_fields);
///     Ok(())
/// }));
/// ```
pub fn listener_fn<E, F, Fut>(f: F) -> FnListener<F>
where
    F: Fn(CancellationToken, E) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    FnListener { f }
}

#[async_trait]
impl<E, F, Fut> Listener<E> for FnListener<F>
where
    E: Clone + Send + Sync + 'static,
    F: Fn(CancellationToken, E) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send,
{
    async fn on_event(&self, cancel: &CancellationToken, event: &E) -> Result<(), BoxError> {
        (self.f)(cancel.clone(), event.clone()).await
    }
}
