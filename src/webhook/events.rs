//! The table of known webhook events.
//!
//! A single `webhook_events!` invocation is the only place an event kind
//! is declared. It generates [`EventType`], [`WebhookEvent`], the decoder
//! used by the parser, the listener registry and the dispatch routing, so
//! the discriminator strings and the payload types cannot drift apart.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::dispatcher::Dispatcher;
use super::listener::Listener;
use super::payloads::*;
use super::EventMeta;
use crate::{Error, Result};

mod sealed {
    use std::sync::Arc;

    use super::ListenerRegistry;
    use crate::webhook::listener::Listener;

    pub trait Sealed: Sized {
        fn listeners(registry: &ListenerRegistry) -> &[Arc<dyn Listener<Self>>];
        fn listeners_mut(registry: &mut ListenerRegistry) -> &mut Vec<Arc<dyn Listener<Self>>>;
    }
}

/// A concrete webhook payload type.
///
/// Implemented for every payload struct in the event table and nothing
/// else; it links a payload type to its [`EventType`] and to its listener
/// list in the [`Dispatcher`].
pub trait TypedEvent: sealed::Sealed + Clone + Send + Sync + 'static {
    /// The discriminator this payload type is decoded from.
    const EVENT_TYPE: EventType;

    /// Fields common to every event.
    fn meta(&self) -> &EventMeta;
}

macro_rules! webhook_events {
    ($(
        $(#[$doc:meta])*
        $variant:ident($payload:ident) => $wire:literal, $slot:ident;
    )+) => {
        /// Discriminator of a webhook payload (its `event` field).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventType {
            $(
                $(#[$doc])*
                $variant,
            )+
        }

        impl EventType {
            /// Wire representation, e.g. `story::create`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(EventType::$variant => $wire,)+
                }
            }

            /// Every known event type, in table order.
            pub fn all() -> &'static [EventType] {
                &[$(EventType::$variant,)+]
            }
        }

        impl FromStr for EventType {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok(EventType::$variant),)+
                    other => Err(Error::UnsupportedEvent(other.to_string())),
                }
            }
        }

        /// A decoded webhook payload, tagged by its event type.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum WebhookEvent {
            $(
                $(#[$doc])*
                $variant($payload),
            )+
        }

        impl WebhookEvent {
            /// The event type of the payload.
            pub fn event_type(&self) -> EventType {
                match self {
                    $(WebhookEvent::$variant(_) => EventType::$variant,)+
                }
            }

            /// Fields common to every event.
            pub fn meta(&self) -> &EventMeta {
                match self {
                    $(WebhookEvent::$variant(event) => &event.meta,)+
                }
            }

            pub(crate) fn decode(event_type: EventType, payload: Value) -> Result<Self> {
                match event_type {
                    $(
                        EventType::$variant => serde_json::from_value::<$payload>(payload)
                            .map(WebhookEvent::$variant)
                            .map_err(Error::Decode),
                    )+
                }
            }
        }

        /// Per-event-type listener lists.
        #[derive(Default)]
        pub struct ListenerRegistry {
            $($slot: Vec<Arc<dyn Listener<$payload>>>,)+
        }

        impl ListenerRegistry {
            pub(crate) fn count(&self, event_type: EventType) -> usize {
                match event_type {
                    $(EventType::$variant => self.$slot.len(),)+
                }
            }
        }

        $(
            impl sealed::Sealed for $payload {
                fn listeners(registry: &ListenerRegistry) -> &[Arc<dyn Listener<Self>>] {
                    &registry.$slot
                }

                fn listeners_mut(registry: &mut ListenerRegistry) -> &mut Vec<Arc<dyn Listener<Self>>> {
                    &mut registry.$slot
                }
            }

            impl TypedEvent for $payload {
                const EVENT_TYPE: EventType = EventType::$variant;

                fn meta(&self) -> &EventMeta {
                    &self.meta
                }
            }

            impl From<$payload> for WebhookEvent {
                fn from(event: $payload) -> Self {
                    WebhookEvent::$variant(event)
                }
            }
        )+

        pub(crate) async fn route(
            dispatcher: &Dispatcher,
            cancel: &CancellationToken,
            event: WebhookEvent,
        ) -> Result<()> {
            match event {
                $(WebhookEvent::$variant(event) => dispatcher.process(cancel, event).await,)+
            }
        }
    };
}

webhook_events! {
    /// `story::create`
    StoryCreate(StoryCreateEvent) => "story::create", story_create;
    /// `story::update`
    StoryUpdate(StoryUpdateEvent) => "story::update", story_update;
    /// `story::delete`
    StoryDelete(StoryDeleteEvent) => "story::delete", story_delete;
    /// `task::create`
    TaskCreate(TaskCreateEvent) => "task::create", task_create;
    /// `task::update`
    TaskUpdate(TaskUpdateEvent) => "task::update", task_update;
    /// `task::delete`
    TaskDelete(TaskDeleteEvent) => "task::delete", task_delete;
    /// `bug::create`
    BugCreate(BugCreateEvent) => "bug::create", bug_create;
    /// `bug::update`
    BugUpdate(BugUpdateEvent) => "bug::update", bug_update;
    /// `bug::delete`
    BugDelete(BugDeleteEvent) => "bug::delete", bug_delete;
    /// `story_comment::add`
    StoryCommentAdd(StoryCommentAddEvent) => "story_comment::add", story_comment_add;
    /// `story_comment::update`
    StoryCommentUpdate(StoryCommentUpdateEvent) => "story_comment::update", story_comment_update;
    /// `story_comment::delete`
    StoryCommentDelete(StoryCommentDeleteEvent) => "story_comment::delete", story_comment_delete;
    /// `task_comment::add`
    TaskCommentAdd(TaskCommentAddEvent) => "task_comment::add", task_comment_add;
    /// `task_comment::update`
    TaskCommentUpdate(TaskCommentUpdateEvent) => "task_comment::update", task_comment_update;
    /// `task_comment::delete`
    TaskCommentDelete(TaskCommentDeleteEvent) => "task_comment::delete", task_comment_delete;
    /// `bug_comment::add`
    BugCommentAdd(BugCommentAddEvent) => "bug_comment::add", bug_comment_add;
    /// `bug_comment::update`
    BugCommentUpdate(BugCommentUpdateEvent) => "bug_comment::update", bug_comment_update;
    /// `bug_comment::delete`
    BugCommentDelete(BugCommentDeleteEvent) => "bug_comment::delete", bug_comment_delete;
    /// `iteration::create`
    IterationCreate(IterationCreateEvent) => "iteration::create", iteration_create;
    /// `iteration::update`
    IterationUpdate(IterationUpdateEvent) => "iteration::update", iteration_update;
    /// `iteration::delete`
    IterationDelete(IterationDeleteEvent) => "iteration::delete", iteration_delete;
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
