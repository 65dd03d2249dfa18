//! Bug models.

use serde::{Deserialize, Serialize};

use super::{Enum, Multi, Order, PriorityLabel};

/// A bug.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bug {
    /// Bug id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Title
    pub title: String,
    /// Rich-text description
    pub description: Option<String>,
    /// Legacy priority value
    pub priority: String,
    /// Priority label
    pub priority_label: String,
    /// Severity
    pub severity: String,
    /// Module
    pub module: String,
    /// Workflow status
    pub status: String,
    /// Reporter
    pub reporter: String,
    /// Creation time
    pub created: String,
    /// Bug type
    #[serde(rename = "bugtype")]
    pub bug_type: String,
    /// Resolution time
    pub resolved: Option<String>,
    /// Close time
    pub closed: Option<String>,
    /// Last modification time
    pub modified: String,
    /// Last modifier
    #[serde(rename = "lastmodify")]
    pub last_modify: String,
    /// Auditor
    pub auditer: String,
    /// Developers (`;`-separated)
    pub de: String,
    /// Fixer
    pub fixer: String,
    /// Testers (`;`-separated)
    pub te: String,
    /// Current owner
    pub current_owner: String,
    /// CC list
    pub cc: String,
    /// Iteration id
    pub iteration_id: String,
    /// Release id
    pub release_id: Option<String>,
    /// Version the bug was found in
    pub version_report: String,
    /// Version the bug was fixed in
    pub version_fix: String,
    /// Phase the bug originated in
    #[serde(rename = "originphase")]
    pub origin_phase: String,
    /// Source
    pub source: String,
    /// Platform
    pub platform: String,
    /// Resolution
    pub resolution: String,
    /// Planned start date
    pub begin: Option<String>,
    /// Due date
    pub due: Option<String>,
    /// Labels
    pub label: String,
}

/// Filter for [`BugsService::get_bugs`](crate::api::BugsService::get_bugs).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBugsRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Bug ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Title (fuzzy match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
    /// Severities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Enum<String>>,
    /// Workflow statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enum<String>>,
    /// Module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<Enum<String>>,
    /// Iteration ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<Multi<i64>>,
    /// Release id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i64>,
    /// Reporter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Current owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_owner: Option<String>,
    /// Developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    /// Tester
    #[serde(skip_serializing_if = "Option::is_none")]
    pub te: Option<String>,
    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Enum<String>>,
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

/// Filter for counting bugs; paging and field selection are ignored.
pub type GetBugsCountRequest = GetBugsRequest;

/// Payload for [`BugsService::create_bug`](crate::api::BugsService::create_bug).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBugRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// [required] Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
    /// Severity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Reporter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Current owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_owner: Option<String>,
    /// CC list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Developer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    /// Tester
    #[serde(skip_serializing_if = "Option::is_none")]
    pub te: Option<String>,
    /// Iteration id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    /// Release id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i64>,
    /// Version the bug was found in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_report: Option<String>,
    /// Bug type
    #[serde(rename = "bugtype", skip_serializing_if = "Option::is_none")]
    pub bug_type: Option<String>,
    /// Phase the bug originated in
    #[serde(rename = "originphase", skip_serializing_if = "Option::is_none")]
    pub origin_phase: Option<String>,
    /// Source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Planned start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Labels (`|`-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Enum<String>>,
}
