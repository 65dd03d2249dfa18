//! Task models.

use serde::{Deserialize, Serialize};

use super::{Enum, Multi, Order, PriorityLabel, TaskStatus};

/// A task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Title
    pub name: String,
    /// Rich-text description
    pub description: String,
    /// Creator
    pub creator: String,
    /// Creation time
    pub created: String,
    /// Last modification time
    pub modified: String,
    /// Status (`open`, `progressing` or `done`)
    pub status: String,
    /// Owner
    pub owner: String,
    /// CC list
    pub cc: String,
    /// Planned start date
    pub begin: Option<String>,
    /// Due date
    pub due: Option<String>,
    /// Parent story id
    pub story_id: String,
    /// Iteration id
    pub iteration_id: String,
    /// Legacy priority value
    pub priority: String,
    /// Priority label
    pub priority_label: String,
    /// Progress percentage
    pub progress: String,
    /// Completion time
    pub completed: Option<String>,
    /// Estimated effort
    pub effort: Option<String>,
    /// Completed effort
    pub effort_completed: String,
    /// Effort over the estimate
    pub exceed: String,
    /// Remaining effort
    pub remain: String,
    /// Labels
    pub label: String,
}

impl Task {
    /// Parses [`status`](Self::status) into a [`TaskStatus`], if it holds a known value.
    pub fn task_status(&self) -> Option<TaskStatus> {
        self.status.parse().ok()
    }
}

/// Filter for [`TasksService::get_tasks`](crate::api::TasksService::get_tasks).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTasksRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Task ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Title (fuzzy match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Enum<TaskStatus>>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Parent story ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<Multi<i64>>,
    /// Iteration ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<Multi<i64>>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
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

/// Filter for counting tasks; paging and field selection are ignored.
pub type GetTasksCountRequest = GetTasksRequest;

/// Payload for [`TasksService::create_task`](crate::api::TasksService::create_task).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
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
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// CC list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Planned start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Parent story id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
    /// Iteration id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_id: Option<i64>,
    /// Priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<PriorityLabel>,
    /// Estimated effort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
}

/// One field changed by a task change record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFieldChange {
    /// Field name
    pub field: String,
    /// Value before the change
    pub value_before: String,
    /// Value after the change
    pub value_after: String,
    /// Display label of the field
    pub field_label: String,
}

/// A change record of a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskChange {
    /// Change id
    pub id: String,
    /// Workspace id
    pub workspace_id: String,
    /// Task id
    pub task_id: String,
    /// User who made the change
    pub creator: String,
    /// Change time
    pub created: String,
    /// Kind of change
    pub change_type: String,
    /// Summary
    pub change_summary: String,
    /// Comment left with the change
    pub comment: Option<String>,
    /// Entity type
    pub entity_type: String,
    /// Individual field changes
    pub field_changes: Vec<TaskFieldChange>,
}

/// Filter for [`TasksService::get_task_changes`](crate::api::TasksService::get_task_changes).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTaskChangesRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
    /// Change ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Multi<i64>>,
    /// Task id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    /// User who made the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Change time filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Kind of change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Filter for counting task changes; paging is ignored.
pub type GetTaskChangesCountRequest = GetTaskChangesRequest;
