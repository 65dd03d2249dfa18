//! Comment models.

use serde::{Deserialize, Serialize};

use super::{CommentEntryType, Enum, Multi, Order};

/// A comment attached to a story, task, bug or wiki page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Title
    pub title: String,
    /// Content
    pub description: String,
    /// Author
    pub author: String,
    /// Kind of entity commented on
    pub entry_type: String,
    /// Id of the entity commented on
    pub entry_id: String,
    /// Id of the comment replied to
    pub reply_id: String,
    /// Id of the root comment of the thread
    pub root_id: String,
    /// Creation time
    pub created: String,
    /// Last modification time
    pub modified: String,
    /// Workspace id
    pub workspace_id: String,
}

impl Comment {
    /// Parses [`entry_type`](Self::entry_type), if it holds a known value.
    pub fn comment_entry_type(&self) -> Option<CommentEntryType> {
        self.entry_type.parse().ok()
    }
}

/// Payload for [`CommentsService::create_comment`](crate::api::CommentsService::create_comment).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommentRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// [required] Content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// [required] Author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// [required] Kind of entity commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<CommentEntryType>,
    /// [required] Id of the entity commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<i64>,
    /// Id of the comment replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_id: Option<i64>,
    /// Id of the root comment of the thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<i64>,
}

/// Filter for [`CommentsService::get_comments`](crate::api::CommentsService::get_comments).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCommentsRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Comment ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Kinds of entity commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<Enum<CommentEntryType>>,
    /// Id of the entity commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<i64>,
    /// Creation time filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Modification time filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Id of the root comment of the thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_id: Option<i64>,
    /// Id of the comment replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_id: Option<i64>,
    /// Page size (default 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort order, e.g. `created desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Fields to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Multi<String>>,
}

/// Filter for counting comments; paging and field selection are ignored.
pub type GetCommentsCountRequest = GetCommentsRequest;

/// Payload for [`CommentsService::update_comment`](crate::api::CommentsService::update_comment).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCommentRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// [required] Comment id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// [required] New content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User recorded as making the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_creator: Option<String>,
}
