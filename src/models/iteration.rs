//! Iteration models.

use serde::{Deserialize, Serialize};

use super::{Enum, Multi, Order};

/// An iteration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Iteration {
    /// Iteration id
    pub id: String,
    /// Name
    pub name: String,
    /// Workspace id
    pub workspace_id: String,
    /// Start date (`YYYY-MM-DD`)
    #[serde(rename = "startdate")]
    pub start_date: String,
    /// End date (`YYYY-MM-DD`)
    #[serde(rename = "enddate")]
    pub end_date: String,
    /// Status (`open` or `done`)
    pub status: String,
    /// Release id
    pub release_id: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Creator
    pub creator: String,
    /// Creation time
    pub created: String,
    /// Last modification time
    pub modified: String,
    /// Completion time
    pub completed: Option<String>,
    /// Entity type
    pub entity_type: String,
    /// Parent iteration id
    pub parent_id: String,
    /// Root ancestor id
    pub ancestor_id: String,
    /// Path of ancestor ids
    pub path: String,
    /// Work item type id
    pub workitem_type_id: String,
    /// Template id
    pub templated_id: String,
    /// Labels
    pub label: Option<String>,
}

/// Filter for [`IterationsService::get_iterations`](crate::api::IterationsService::get_iterations).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetIterationsRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Iteration ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Name (fuzzy match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Start date filter
    #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date filter
    #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enum<String>>,
    /// Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation time filter
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

/// Filter for counting iterations; paging and field selection are ignored.
pub type GetIterationsCountRequest = GetIterationsRequest;

/// Payload for [`IterationsService::create_iteration`](crate::api::IterationsService::create_iteration).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIterationRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// [required] Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// [required] Start date (`YYYY-MM-DD`)
    #[serde(rename = "startdate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// [required] End date (`YYYY-MM-DD`)
    #[serde(rename = "enddate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// [required] Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Parent iteration id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Work item type id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workitem_type_id: Option<i64>,
    /// Template id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated_id: Option<i64>,
}

/// Filter for [`IterationsService::get_workitem_types`](crate::api::IterationsService::get_workitem_types).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWorkitemTypesRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// An iteration category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkitemType {
    /// Type id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Entity type the category applies to
    pub entity_type: String,
    /// Name
    pub name: String,
    /// Creator
    pub creator: String,
    /// Creation time
    pub created: String,
    /// Last modification time
    pub modified: String,
}

/// Filter for [`IterationsService::get_template_list`](crate::api::IterationsService::get_template_list).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTemplateListRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// An iteration template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkitemTemplate {
    /// Template id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Entity type the template applies to
    #[serde(rename = "type")]
    pub template_type: String,
    /// Name
    pub name: String,
    /// Creator
    pub creator: String,
    /// Creation time
    pub created: String,
    /// Last modification time
    pub modified: String,
}
