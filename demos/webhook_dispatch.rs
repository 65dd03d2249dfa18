//! Webhook dispatch example.
//!
//! Reads webhook payloads (one JSON object per line) from stdin and feeds
//! them to a dispatcher with a few listeners attached.
//!
//! Run with: cargo run --example webhook_dispatch < payloads.jsonl

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tapd_rs::webhook::{
    listener_fn, BugCommentAddEvent, BugCreateEvent, BugUpdateEvent, Dispatcher, Listener,
};
use tapd_rs::BoxError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Counts bug activity across several event types.
#[derive(Default)]
struct BugActivity {
    events: AtomicUsize,
}

#[async_trait]
impl Listener<BugCreateEvent> for BugActivity {
    async fn on_event(&self, _: &CancellationToken, event: &BugCreateEvent) -> Result<(), BoxError> {
        self.events.fetch_add(1, Ordering::Relaxed);
        println!("bug created: {} by {}", event.title, event.reporter);
        Ok(())
    }
}

#[async_trait]
impl Listener<BugUpdateEvent> for BugActivity {
    async fn on_event(&self, _: &CancellationToken, event: &BugUpdateEvent) -> Result<(), BoxError> {
        self.events.fetch_add(1, Ordering::Relaxed);
        println!("bug {} updated: {}", event.meta.id, event.change_fields);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let activity = Arc::new(BugActivity::default());

    let mut dispatcher = Dispatcher::new();
    dispatcher
        .subscribe(activity.clone())
        .on::<BugCreateEvent>()
        .on::<BugUpdateEvent>();
    dispatcher.register(listener_fn(|_cancel, event: BugCommentAddEvent| async move {
        if event.description.is_empty() {
            return Err(BoxError::from("empty comment"));
        }
        println!("{} commented on bug {}", event.author, event.entity_id);
        Ok(())
    }));

    let cancel = CancellationToken::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = dispatcher.dispatch_payload(&cancel, line.as_bytes()).await {
            eprintln!("dispatch failed: {e}");
        }
    }

    println!("{} bug event(s) handled", activity.events.load(Ordering::Relaxed));
    Ok(())
}
