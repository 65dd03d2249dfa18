//! Stories service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, PaginatedStream, PaginatedStreamBuilder, RequestOption};
use crate::models::{
    CountResponse, CreateStoryRequest, GetStoriesCountRequest, GetStoriesRequest, Story,
    UpdateStoryRequest,
};
use crate::Result;

#[derive(Deserialize)]
struct StoryItem {
    #[serde(rename = "Story")]
    story: Story,
}

/// Service for stories (requirements).
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tapd_rs::TapdClient) -> tapd_rs::Result<()> {
/// use tapd_rs::models::{Enum, GetStoriesRequest, Order, PriorityLabel};
///
/// let request = GetStoriesRequest {
///     workspace_id: Some(11112222),
///     priority_label: Some(Enum::from(vec![PriorityLabel::High, PriorityLabel::Middle])),
///     order: Some(Order::desc("created")),
///     ..Default::default()
/// };
///
/// for story in client.stories().get_stories(&request, &[]).await? {
///     println!("{} {}", story.id, story.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct StoriesService {
    inner: Arc<ClientInner>,
}

impl StoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List stories matching a filter.
    pub async fn get_stories(
        &self,
        request: &GetStoriesRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<Story>> {
        let items: Vec<StoryItem> = self.inner.get("stories", request, opts).await?;
        Ok(items.into_iter().map(|item| item.story).collect())
    }

    /// Count stories matching a filter.
    pub async fn get_stories_count(
        &self,
        request: &GetStoriesCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("stories/count", request, opts).await?;
        Ok(response.count)
    }

    /// Create a story.
    pub async fn create_story(
        &self,
        request: &CreateStoryRequest,
        opts: &[RequestOption],
    ) -> Result<Story> {
        let item: StoryItem = self.inner.post("stories", request, opts).await?;
        Ok(item.story)
    }

    /// Update a story. `id` and `workspace_id` identify it.
    pub async fn update_story(
        &self,
        request: &UpdateStoryRequest,
        opts: &[RequestOption],
    ) -> Result<Story> {
        let item: StoryItem = self.inner.post("stories", request, opts).await?;
        Ok(item.story)
    }

    /// Stream every story matching a filter, one page at a time.
    ///
    /// `request.limit` sets the page size; `request.page` is ignored.
    pub fn stream_stories(
        &self,
        mut request: GetStoriesRequest,
        opts: Vec<RequestOption>,
    ) -> PaginatedStream<Story> {
        let limit = request.limit.take();
        request.page = None;

        PaginatedStreamBuilder::new(self.inner.clone(), "stories")
            .limit(limit)
            .options(opts)
            .build(request, |item: StoryItem| item.story)
    }
}
