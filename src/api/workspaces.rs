//! Workspaces service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, RequestOption};
use crate::models::{
    CustomWorkCalendar, GetCustomWorkCalendarRequest, GetMemberActivityLogRequest,
    GetUsersRequest, GetWorkspaceInfoRequest, MemberActivityLogPage, User, Workspace,
};
use crate::Result;

/// Service for workspace information and membership.
pub struct WorkspacesService {
    inner: Arc<ClientInner>,
}

impl WorkspacesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a workspace's details.
    pub async fn get_workspace_info(
        &self,
        request: &GetWorkspaceInfoRequest,
        opts: &[RequestOption],
    ) -> Result<Workspace> {
        #[derive(Deserialize)]
        struct Response {
            #[serde(rename = "Workspace")]
            workspace: Workspace,
        }

        let response: Response = self
            .inner
            .get("workspaces/get_workspace_info", request, opts)
            .await?;
        Ok(response.workspace)
    }

    /// List the members of a workspace.
    pub async fn get_users(&self, request: &GetUsersRequest, opts: &[RequestOption]) -> Result<Vec<User>> {
        #[derive(Deserialize)]
        struct Item {
            #[serde(rename = "UserWorkspace")]
            user: User,
        }

        let items: Vec<Item> = self.inner.get("workspaces/users", request, opts).await?;
        Ok(items.into_iter().map(|item| item.user).collect())
    }

    /// Get one page of the member activity log.
    pub async fn get_member_activity_log(
        &self,
        request: &GetMemberActivityLogRequest,
        opts: &[RequestOption],
    ) -> Result<MemberActivityLogPage> {
        self.inner
            .get("workspaces/member_activity_log", request, opts)
            .await
    }

    /// Get a workspace's working calendar for one year.
    pub async fn get_custom_work_calendar(
        &self,
        request: &GetCustomWorkCalendarRequest,
        opts: &[RequestOption],
    ) -> Result<CustomWorkCalendar> {
        self.inner
            .get("workspaces/get_custom_work_calendar", request, opts)
            .await
    }
}
