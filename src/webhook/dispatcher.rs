//! Concurrent fan-out of webhook events to listeners.

use std::sync::Arc;

use futures_util::future::join_all;
use http_body::Body;
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::events::{route, ListenerRegistry, TypedEvent};
use super::listener::Listener;
use super::parser::parse_webhook_event;
use super::{EventType, WebhookEvent};
use crate::error::ListenerFailure;
use crate::{BoxError, Error, Result};

/// Routes webhook events to the listeners registered for their type.
///
/// Registration takes `&mut self` and dispatching takes `&self`, so the
/// registry is fully built before the dispatcher is shared (typically in an
/// `Arc`) with the tasks serving webhook requests.
///
/// # Example
///
/// ```no_run
/// use tapd_rs::webhook::{listener_fn, BugCreateEvent, Dispatcher};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example(payload: &[u8]) -> tapd_rs::Result<()> {
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(listener_fn(|_cancel, event: BugCreateEvent| async move {
///     println!("bug {} created by {}", event.title, event.reporter);
///     Ok(())
/// }));
///
/// dispatcher.dispatch_payload(&CancellationToken::new(), payload).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Dispatcher {
    registry: ListenerRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for events of type `E`.
    pub fn register<E, L>(&mut self, listener: L) -> &mut Self
    where
        E: TypedEvent,
        L: Listener<E> + 'static,
    {
        self.register_arc::<E>(Arc::new(listener))
    }

    /// Register an already shared listener for events of type `E`.
    pub fn register_arc<E: TypedEvent>(&mut self, listener: Arc<dyn Listener<E>>) -> &mut Self {
        E::listeners_mut(&mut self.registry).push(listener);
        debug!(event_type = %E::EVENT_TYPE, "Registered webhook listener");
        self
    }

    /// Enroll one listener object into several event lists.
    ///
    /// ```
    /// use async_trait::async_trait;
    /// use tapd_rs::webhook::{BugCreateEvent, BugUpdateEvent, Dispatcher, EventType, Listener};
    /// use tapd_rs::BoxError;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// struct Audit;
    ///
    /// #[async_trait]
    /// impl Listener<BugCreateEvent> for Audit {
    ///     async fn on_event(&self, _: &CancellationToken, _: &BugCreateEvent) -> Result<(), BoxError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// #[async_trait]
    /// impl Listener<BugUpdateEvent> for Audit {
    ///     async fn on_event(&self, _: &CancellationToken, _: &BugUpdateEvent) -> Result<(), BoxError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut dispatcher = Dispatcher::new();
    /// dispatcher
    ///     .subscribe(Audit)
    ///     .on::<BugCreateEvent>()
    ///     .on::<BugUpdateEvent>();
    ///
    /// assert_eq!(dispatcher.listener_count(EventType::BugCreate), 1);
    /// assert_eq!(dispatcher.listener_count(EventType::BugUpdate), 1);
    /// ```
    pub fn subscribe<L>(&mut self, listener: L) -> Subscription<'_, L>
    where
        L: Send + Sync + 'static,
    {
        Subscription {
            dispatcher: self,
            listener: Arc::new(listener),
        }
    }

    /// Number of listeners registered for an event type.
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.registry.count(event_type)
    }

    /// Deliver an already decoded event to every listener of its type.
    ///
    /// All listeners run concurrently. The call returns once every one of
    /// them has finished; if any failed, the result is an
    /// [`Error::Dispatch`] listing every failure. Dispatching an event with
    /// no listeners is a no-op.
    pub async fn dispatch(&self, cancel: &CancellationToken, event: WebhookEvent) -> Result<()> {
        route(self, cancel, event).await
    }

    /// Parse a raw payload and dispatch it.
    pub async fn dispatch_payload(&self, cancel: &CancellationToken, payload: &[u8]) -> Result<()> {
        let (_, event) = parse_webhook_event(payload)?;
        self.dispatch(cancel, event).await
    }

    /// Read the whole body of an inbound webhook request and dispatch it.
    pub async fn dispatch_request<B>(&self, cancel: &CancellationToken, request: http::Request<B>) -> Result<()>
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        let payload = request
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::Body(e.into()))?
            .to_bytes();
        self.dispatch_payload(cancel, &payload).await
    }

    pub(crate) async fn process<E: TypedEvent>(&self, cancel: &CancellationToken, event: E) -> Result<()> {
        let event_type = E::EVENT_TYPE;
        let listeners = E::listeners(&self.registry);
        if listeners.is_empty() {
            debug!(%event_type, "No listeners registered");
            return Ok(());
        }

        // Cancelled when this dispatch finishes or its future is dropped.
        let cancel = cancel.child_token();
        let _guard = cancel.clone().drop_guard();

        let total = listeners.len();
        let event = Arc::new(event);
        let handles: Vec<_> = listeners
            .iter()
            .map(|listener| {
                let listener = listener.clone();
                let event = event.clone();
                let cancel = cancel.clone();
                tokio::spawn(async move { listener.on_event(&cancel, &event).await })
            })
            .collect();

        let mut failures = Vec::new();
        for (index, outcome) in join_all(handles).await.into_iter().enumerate() {
            let error: BoxError = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(error)) => error,
                Err(join_error) if join_error.is_panic() => {
                    format!("listener panicked: {}", panic_message(join_error.into_panic())).into()
                }
                Err(join_error) => Box::new(join_error),
            };
            warn!(%event_type, index, error = %error, "Webhook listener failed");
            failures.push(ListenerFailure { index, error });
        }

        debug!(%event_type, total, failed = failures.len(), "Dispatched webhook event");

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Dispatch {
                event_type,
                total,
                failures,
            })
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for event_type in EventType::all() {
            let count = self.listener_count(*event_type);
            if count > 0 {
                map.entry(&event_type.as_str(), &count);
            }
        }
        map.finish()
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Enrolls one listener into several event lists. Created by
/// [`Dispatcher::subscribe`].
pub struct Subscription<'a, L> {
    dispatcher: &'a mut Dispatcher,
    listener: Arc<L>,
}

impl<'a, L> Subscription<'a, L>
where
    L: Send + Sync + 'static,
{
    /// Also deliver events of type `E` to this listener.
    pub fn on<E>(self) -> Self
    where
        E: TypedEvent,
        L: Listener<E>,
    {
        let listener: Arc<dyn Listener<E>> = self.listener.clone();
        self.dispatcher.register_arc::<E>(listener);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::{listener_fn, BugCreateEvent, StoryCreateEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn bug_create() -> WebhookEvent {
        let (_, event) =
            parse_webhook_event(br#"{"event":"bug::create","workspace_id":"111222333","id":"1"}"#).unwrap();
        event
    }

    #[tokio::test]
    async fn test_dispatch_without_listeners() {
        let dispatcher = Dispatcher::new();
        dispatcher.dispatch(&CancellationToken::new(), bug_create()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_other_listeners() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = Dispatcher::new();

        for i in 0..4 {
            let calls = calls.clone();
            dispatcher.register(listener_fn(move |_cancel, _event: BugCreateEvent| {
                let calls = calls.clone();
                async move {
                    tokio::time::sleep(Duration::from_millis(10 * (4 - i))).await;
                    calls.fetch_add(1, Ordering::SeqCst);
                    if i == 1 {
                        return Err("listener one failed".into());
                    }
                    Ok(())
                }
            }));
        }

        let err = dispatcher
            .dispatch(&CancellationToken::new(), bug_create())
            .await
            .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        match err {
            Error::Dispatch {
                event_type,
                total,
                failures,
            } => {
                assert_eq!(event_type, EventType::BugCreate);
                assert_eq!(total, 4);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].index, 1);
                assert_eq!(failures[0].error.to_string(), "listener one failed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_panicking_listener_is_reported() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(listener_fn(|_cancel, event: BugCreateEvent| async move {
            if event.meta.id == "1" {
                panic!("boom");
            }
            Ok(())
        }));
        dispatcher.register(listener_fn(|_cancel, _event: BugCreateEvent| async move { Ok(()) }));

        let err = dispatcher
            .dispatch(&CancellationToken::new(), bug_create())
            .await
            .unwrap_err();

        match err {
            Error::Dispatch { failures, .. } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].index, 0);
                assert!(failures[0].error.to_string().contains("boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_only_matching_type_is_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(listener_fn(move |_cancel, _event: StoryCreateEvent| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }));

        dispatcher.dispatch(&CancellationToken::new(), bug_create()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.listener_count(EventType::StoryCreate), 1);
        assert_eq!(dispatcher.listener_count(EventType::BugCreate), 0);
    }

    #[tokio::test]
    async fn test_cancellation_reaches_listeners() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(listener_fn(|cancel: CancellationToken, _event: BugCreateEvent| async move {
            tokio::select! {
                _ = cancel.cancelled() => Err("cancelled".into()),
                _ = tokio::time::sleep(Duration::from_secs(30)) => Ok(()),
            }
        }));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = dispatcher.dispatch(&cancel, bug_create()).await.unwrap_err();
        assert!(err.to_string().contains("cancelled"));
    }

    #[tokio::test]
    async fn test_abandoned_dispatch_cancels_listeners() {
        let observed = Arc::new(AtomicUsize::new(0));
        let seen = observed.clone();
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(listener_fn(move |cancel: CancellationToken, _event: BugCreateEvent| {
            let seen = seen.clone();
            async move {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        seen.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }
                    _ = tokio::time::sleep(Duration::from_secs(30)) => Ok(()),
                }
            }
        }));

        let cancel = CancellationToken::new();
        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            dispatcher.dispatch(&cancel, bug_create()),
        )
        .await;
        assert!(outcome.is_err());
        assert!(!cancel.is_cancelled());

        for _ in 0..100 {
            if observed.load(Ordering::SeqCst) == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }
}
