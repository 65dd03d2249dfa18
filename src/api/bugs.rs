//! Bugs service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, PaginatedStream, PaginatedStreamBuilder, RequestOption};
use crate::models::{Bug, CountResponse, CreateBugRequest, GetBugsCountRequest, GetBugsRequest};
use crate::Result;

#[derive(Deserialize)]
struct BugItem {
    #[serde(rename = "Bug")]
    bug: Bug,
}

/// Service for bugs.
pub struct BugsService {
    inner: Arc<ClientInner>,
}

impl BugsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List bugs matching a filter.
    pub async fn get_bugs(&self, request: &GetBugsRequest, opts: &[RequestOption]) -> Result<Vec<Bug>> {
        let items: Vec<BugItem> = self.inner.get("bugs", request, opts).await?;
        Ok(items.into_iter().map(|item| item.bug).collect())
    }

    /// Count bugs matching a filter.
    pub async fn get_bugs_count(
        &self,
        request: &GetBugsCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("bugs/count", request, opts).await?;
        Ok(response.count)
    }

    /// Create a bug.
    pub async fn create_bug(&self, request: &CreateBugRequest, opts: &[RequestOption]) -> Result<Bug> {
        let item: BugItem = self.inner.post("bugs", request, opts).await?;
        Ok(item.bug)
    }

    /// Stream every bug matching a filter.
    ///
    /// `request.limit` sets the page size; `request.page` is ignored.
    pub fn stream_bugs(&self, mut request: GetBugsRequest, opts: Vec<RequestOption>) -> PaginatedStream<Bug> {
        let limit = request.limit.take();
        request.page = None;

        PaginatedStreamBuilder::new(self.inner.clone(), "bugs")
            .limit(limit)
            .options(opts)
            .build(request, |item: BugItem| item.bug)
    }
}
