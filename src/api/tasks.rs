//! Tasks service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, PaginatedStream, PaginatedStreamBuilder, RequestOption};
use crate::models::{
    CountResponse, CreateTaskRequest, GetTaskChangesCountRequest, GetTaskChangesRequest,
    GetTasksCountRequest, GetTasksRequest, Task, TaskChange,
};
use crate::Result;

#[derive(Deserialize)]
struct TaskItem {
    #[serde(rename = "Task")]
    task: Task,
}

#[derive(Deserialize)]
struct TaskChangeItem {
    #[serde(rename = "WorkitemChange")]
    change: TaskChange,
}

/// Service for tasks and their change history.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tapd_rs::TapdClient) -> tapd_rs::Result<()> {
/// use tapd_rs::models::{Enum, GetTasksCountRequest, TaskStatus};
///
/// let open = client
///     .tasks()
///     .get_tasks_count(
///         &GetTasksCountRequest {
///             workspace_id: Some(11112222),
///             status: Some(Enum::from(vec![TaskStatus::Open, TaskStatus::Progressing])),
///             ..Default::default()
///         },
///         &[],
///     )
///     .await?;
/// println!("{open} unfinished tasks");
/// # Ok(())
/// # }
/// ```
pub struct TasksService {
    inner: Arc<ClientInner>,
}

impl TasksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a task.
    pub async fn create_task(&self, request: &CreateTaskRequest, opts: &[RequestOption]) -> Result<Task> {
        let item: TaskItem = self.inner.post("tasks", request, opts).await?;
        Ok(item.task)
    }

    /// List tasks matching a filter.
    pub async fn get_tasks(&self, request: &GetTasksRequest, opts: &[RequestOption]) -> Result<Vec<Task>> {
        let items: Vec<TaskItem> = self.inner.get("tasks", request, opts).await?;
        Ok(items.into_iter().map(|item| item.task).collect())
    }

    /// Count tasks matching a filter.
    pub async fn get_tasks_count(
        &self,
        request: &GetTasksCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("tasks/count", request, opts).await?;
        Ok(response.count)
    }

    /// List task change records.
    pub async fn get_task_changes(
        &self,
        request: &GetTaskChangesRequest,
        opts: &[RequestOption],
    ) -> Result<Vec<TaskChange>> {
        let items: Vec<TaskChangeItem> = self.inner.get("task_changes", request, opts).await?;
        Ok(items.into_iter().map(|item| item.change).collect())
    }

    /// Count task change records.
    pub async fn get_task_changes_count(
        &self,
        request: &GetTaskChangesCountRequest,
        opts: &[RequestOption],
    ) -> Result<i64> {
        let response: CountResponse = self.inner.get("task_changes/count", request, opts).await?;
        Ok(response.count)
    }

    /// Stream every task matching a filter.
    ///
    /// `request.limit` sets the page size; `request.page` is ignored.
    pub fn stream_tasks(&self, mut request: GetTasksRequest, opts: Vec<RequestOption>) -> PaginatedStream<Task> {
        let limit = request.limit.take();
        request.page = None;

        PaginatedStreamBuilder::new(self.inner.clone(), "tasks")
            .limit(limit)
            .options(opts)
            .build(request, |item: TaskItem| item.task)
    }
}
