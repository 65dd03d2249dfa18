//! User and role models.

use serde::{Deserialize, Serialize};

/// Filter for [`UsersService::get_roles`](crate::api::UsersService::get_roles).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetRolesRequest {
    /// [required] Workspace id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<i64>,
}

/// A role id and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRole {
    /// Role id
    pub id: String,
    /// Role name
    pub name: String,
}
