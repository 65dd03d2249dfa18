//! Paginated stream for lazy iteration over list endpoints.
//!
//! TAPD list endpoints page with `page` (1-based) and `limit`. A page
//! shorter than `limit` is the last one.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ClientInner, RequestOption};
use crate::Result;

/// Default number of items per page (the maximum TAPD accepts).
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a list endpoint.
///
/// Items are yielded one at a time; the next page is requested only when
/// the current one is exhausted. The stream ends after a short page, and
/// ends immediately after yielding an error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use tapd_rs::models::GetBugsRequest;
///
/// # async fn example(client: tapd_rs::TapdClient) -> tapd_rs::Result<()> {
/// let request = GetBugsRequest {
///     workspace_id: Some(11112222),
///     ..Default::default()
/// };
/// let mut bugs = client.bugs().stream_bugs(request, Vec::new());
///
/// while let Some(bug) = bugs.next().await {
///     let bug = bug?;
///     println!("{}: {}", bug.id, bug.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: FetchPage<T>,
    limit: u32,
    current_items: std::vec::IntoIter<T>,
    next_page: Option<u32>,
    pending_fetch: Option<BoxFuture<'static, Result<Vec<T>>>>,
}

impl<T: Send + 'static> PaginatedStream<T> {
    /// Create a stream from a page fetcher. `fetch_page` receives 1-based
    /// page numbers; a page with fewer than `limit` items ends the stream.
    pub fn new<F>(limit: u32, fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            limit,
            current_items: Vec::new().into_iter(),
            next_page: Some(1),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(items)) => {
                        this.pending_fetch = None;
                        let full_page = this.limit > 0 && items.len() >= this.limit as usize;
                        this.next_page = match this.next_page {
                            Some(page) if full_page => Some(page + 1),
                            _ => None,
                        };
                        if items.is_empty() {
                            return Poll::Ready(None);
                        }
                        this.current_items = items.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page {
                this.pending_fetch = Some((this.fetch_page)(page));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder for paginated streams over a list endpoint.
pub(crate) struct PaginatedStreamBuilder {
    inner: Arc<ClientInner>,
    path: String,
    limit: u32,
    options: Vec<RequestOption>,
}

impl PaginatedStreamBuilder {
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            limit: DEFAULT_PAGE_SIZE,
            options: Vec::new(),
        }
    }

    /// Set the number of items per page.
    pub(crate) fn limit(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit.filter(|l| *l > 0) {
            self.limit = limit;
        }
        self
    }

    /// Attach per-request options to every page request.
    pub(crate) fn options(mut self, options: Vec<RequestOption>) -> Self {
        self.options = options;
        self
    }

    /// Build the stream. Each page decodes as `Vec<W>` and `unwrap` turns
    /// one wrapper entry into an item. `page`/`limit` are always set by the
    /// stream, overriding any in `query`.
    pub(crate) fn build<Q, W, T>(self, query: Q, unwrap: fn(W) -> T) -> PaginatedStream<T>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
        W: DeserializeOwned + Send + 'static,
        T: Send + 'static,
    {
        let Self {
            inner,
            path,
            limit,
            options,
        } = self;
        let options: Arc<[RequestOption]> = options.into();

        PaginatedStream::new(limit, move |page: u32| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();
            let options = options.clone();

            Box::pin(async move {
                #[derive(Serialize)]
                struct PageQuery<Q> {
                    #[serde(flatten)]
                    extra: Q,
                    page: u32,
                    limit: u32,
                }

                let page_query = PageQuery {
                    extra: query,
                    page,
                    limit,
                };

                let items: Vec<W> = inner.get(&path, &page_query, &options).await?;
                Ok(items.into_iter().map(unwrap).collect())
            })
        })
    }
}
