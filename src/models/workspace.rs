//! Workspace (project) models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Multi, OperateObject, OperateType};

/// Filter for [`WorkspacesService::get_workspace_info`](crate::api::WorkspacesService::get_workspace_info).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWorkspaceInfoRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// A workspace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    /// Workspace id
    pub id: String,
    /// Name
    pub name: String,
    /// Short name used in URLs
    pub pretty_name: String,
    /// Category
    pub category: String,
    /// Status
    pub status: String,
    /// Description
    pub description: String,
    /// Creator
    pub creator: String,
    /// Creation time
    pub created: String,
    /// Start date
    pub begin_date: Option<String>,
    /// End date
    pub end_date: Option<String>,
    /// Visibility
    pub secrecy: String,
    /// External access flag
    pub external_on: String,
    /// New-task flag
    pub new_task: String,
    /// Company id
    pub company_id: String,
    /// Product type
    pub product_type: Option<String>,
    /// Platform type
    pub platform_type: Option<String>,
    /// Self-development flag
    pub is_self_development: Option<String>,
    /// Objective
    pub objective: String,
    /// Schedule
    pub schedule: Option<String>,
    /// Milestone
    pub milestone: Option<String>,
    /// Risk
    pub risk: Option<String>,
    /// Close time
    pub closed: Option<String>,
}

/// Filter for [`WorkspacesService::get_users`](crate::api::WorkspacesService::get_users).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUsersRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// User nicknames or ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Multi<String>>,
    /// Fields to return (`user`, `user_id`, `role_id`, `name`, `email`, `real_join_time`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Multi<String>>,
}

/// A workspace member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Nickname
    pub user: String,
    /// Role ids
    pub role_id: Vec<String>,
    /// Display name
    pub name: String,
    /// Time the user was added to the workspace
    pub join_project_time: Option<String>,
    /// Date the user actually joined
    pub real_join_time: String,
    /// Membership status
    pub status: String,
    /// Allocation percentage
    pub allocation: String,
    /// Time the user left the workspace
    pub leave_project_time: Option<String>,
}

/// Filter for [`WorkspacesService::get_member_activity_log`](crate::api::WorkspacesService::get_member_activity_log).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMemberActivityLogRequest {
    /// [required] Workspace id; a company id queries every workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// `1` to return only company-level entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_only: Option<i64>,
    /// Page size (default 20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Start time, `YYYY-MM-DD HH:MM`, within the last six months
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time, `YYYY-MM-DD HH:MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Operator nickname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Operation type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operate_type: Option<OperateType>,
    /// Object kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_object: Option<OperateObject>,
    /// Exact client IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// One member activity log entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberActivityLog {
    /// Entry id
    pub id: String,
    /// Action description
    pub action: String,
    /// Time of the action
    pub created: String,
    /// Operator
    pub creator: String,
    /// Workspace name
    pub project_name: String,
    /// Operation type
    pub operate_type: String,
    /// Object kind
    pub operate_object: String,
    /// Title of the object
    pub title: String,
    /// Link to the object
    pub url: String,
    /// Client IP
    pub ip: String,
    /// Client user agent
    pub ua: String,
}

impl MemberActivityLog {
    /// Parses [`operate_type`](Self::operate_type), if it holds a known value.
    pub fn operation(&self) -> Option<OperateType> {
        self.operate_type.parse().ok()
    }

    /// Parses [`operate_object`](Self::operate_object), if it holds a known value.
    pub fn object(&self) -> Option<OperateObject> {
        self.operate_object.parse().ok()
    }
}

/// A page of member activity log entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberActivityLogPage {
    /// Page size
    #[serde(rename = "perPage")]
    pub per_page: String,
    /// Total number of entries
    #[serde(rename = "totalItems")]
    pub total_items: i64,
    /// Current page
    #[serde(rename = "currentPage")]
    pub current_page: String,
    /// Entries on this page
    pub records: Vec<MemberActivityLog>,
    /// Display labels of the operation types, keyed by wire value
    pub operate_types: BTreeMap<String, String>,
    /// Display labels of the object kinds, keyed by wire value
    pub operate_objects: BTreeMap<String, String>,
}

/// Filter for [`WorkspacesService::get_custom_work_calendar`](crate::api::WorkspacesService::get_custom_work_calendar).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCustomWorkCalendarRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// [required] Year, e.g. `2025`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// A workspace's working calendar for one year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomWorkCalendar {
    /// Weekdays that are working days
    pub weekdays: Vec<String>,
    /// Extra non-working days
    pub holidays: Vec<String>,
    /// Extra working days
    pub workdays: Vec<String>,
}
