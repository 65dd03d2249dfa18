//! Comments service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, RequestOption};
use crate::models::{
    Comment, CountResponse, CreateCommentRequest, GetCommentsCountRequest, GetCommentsRequest,
    UpdateCommentRequest,
};
use crate::Result;

#[derive(Deserialize)]
struct CommentItem {
    #[serde(rename = "Comment")]
    comment: Comment,
}

/// Service for comments on stories, tasks, bugs and wiki pages.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tapd_rs::TapdClient) -> tapd_rs::Result<()> {
/// use tapd_rs::models::{CommentEntryType, CreateCommentRequest};
///
/// let comment = client
///     .comments()
///     .create_comment(
///         &CreateCommentRequest {
///             workspace_id: Some(11112222),
///             description: Some("Looks good".to_string()),
///             author: Some("tapd".to_string()),
///             entry_type: Some(CommentEntryType::Stories),
///             entry_id: Some(1111112222001000001),
///             ..Default::default()
///         },
///         &[],
///     )
///     .await?;
/// println!("created comment {}", comment.id);
/// # Ok(())
/// # }
/// ```
pub struct CommentsService {
    inner: Arc<ClientInner>,
}

impl CommentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Add a comment.
    pub async fn create_comment(
        &self,
        request: &CreateCommentRequest,
        opts: &[RequestOption],
    ) -> Result<Comment> {
        let item: CommentItem = self.inner.post("comments", request, opts).await?;
        Ok(item.comment)
    }

    /// List comments matching a filter.
    pub async fn get_comments(
        &self,
        request: &GetCommentsRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<Comment>> {
        let items: Vec<CommentItem> = self.inner.get("comments", request, opts).await?;
        Ok(items.into_iter().map(|item| item.comment).collect())
    }

    /// Count comments matching a filter.
    pub async fn get_comments_count(
        &self,
        request: &GetCommentsCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("comments/count", request, opts).await?;
        Ok(response.count)
    }

    /// Edit the content of a comment.
    pub async fn update_comment(
        &self,
        request: &UpdateCommentRequest,
        opts: &[RequestOption],
    ) -> Result<Comment> {
        let item: CommentItem = self.inner.post("comments", request, opts).await?;
        Ok(item.comment)
    }
}
