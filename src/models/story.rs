//! Story (requirement) models.

use serde::{Deserialize, Serialize};

use super::{Enum, Multi, Order, PriorityLabel};

/// A story.
///
/// TAPD returns nearly every field as a string, including numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    /// Story id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Title
    pub name: String,
    /// Rich-text description
    pub description: Option<String>,
    /// Creator
    pub creator: String,
    /// Creation time (`YYYY-MM-DD HH:MM:SS`)
    pub created: String,
    /// Last modification time
    pub modified: String,
    /// Workflow status
    pub status: String,
    /// Current owners (`;`-separated)
    pub owner: String,
    /// CC list (`;`-separated)
    pub cc: String,
    /// Planned start date
    pub begin: Option<String>,
    /// Due date
    pub due: Option<String>,
    /// Size estimate
    pub size: Option<String>,
    /// Legacy priority value
    pub priority: String,
    /// Priority label (`High`, `Middle`, `Low`, `Nice To Have` or empty)
    pub priority_label: String,
    /// Developers (`;`-separated)
    pub developer: String,
    /// Iteration id
    pub iteration_id: String,
    /// Test focus
    pub test_focus: String,
    /// Story type
    #[serde(rename = "type")]
    pub story_type: String,
    /// Source
    pub source: String,
    /// Module
    pub module: String,
    /// Version
    pub version: String,
    /// Completion time
    pub completed: Option<String>,
    /// Category id
    pub category_id: String,
    /// Path of ancestor ids
    pub path: String,
    /// Parent story id
    pub parent_id: String,
    /// Child story ids
    pub children_id: String,
    /// Root ancestor id
    pub ancestor_id: String,
    /// Depth in the story tree
    pub level: String,
    /// Business value
    pub business_value: Option<String>,
    /// Estimated effort
    pub effort: Option<String>,
    /// Completed effort
    pub effort_completed: String,
    /// Effort over the estimate
    pub exceed: String,
    /// Remaining effort
    pub remain: String,
    /// Release id
    pub release_id: String,
    /// Template id
    pub templated_id: String,
    /// Work item type id
    pub workitem_type_id: String,
    /// Labels (`|`-separated)
    pub label: String,
    /// Progress percentage
    pub progress: String,
    /// `1` if archived
    pub is_archived: String,
}

/// Filter for [`StoriesService::get_stories`](crate::api::StoriesService::get_stories).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetStoriesRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Story ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Title (fuzzy match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Priority labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<Enum<PriorityLabel>>,
    /// Workflow statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enum<String>>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Iteration ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<Multi<i64>>,
    /// Category ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Multi<i64>>,
    /// Release id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i64>,
    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Enum<String>>,
    /// Creation time filter (TAPD time query syntax)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Modification time filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Page size (default 30, at most 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Fields to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Multi<String>>,
}

/// Filter for counting stories; paging and field selection are ignored.
pub type GetStoriesCountRequest = GetStoriesRequest;

/// Payload for [`StoriesService::create_story`](crate::api::StoriesService::create_story).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateStoryRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// [required] Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rich-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Owners (`;`-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// CC list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Developers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
    /// Planned start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Iteration id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    /// Parent story id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Work item type id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workitem_type_id: Option<i64>,
    /// Template id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated_id: Option<i64>,
    /// Estimated effort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    /// Labels (`|`-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Enum<String>>,
}

/// Payload for [`StoriesService::update_story`](crate::api::StoriesService::update_story).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStoryRequest {
    /// [required] Story id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rich-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_status: Option<String>,
    /// Owners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// CC list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
    /// Iteration id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    /// Planned start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// User recorded as making the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<String>,
}
