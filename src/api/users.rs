//! Users service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::models::{GetRolesRequest, UserRole};
use crate::Result;

/// Service for users and roles.
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the roles defined in a workspace, ordered by numeric role id.
    /// Ids that are not numbers sort after the numeric ones, as strings.
    pub async fn get_roles(&self, request: &GetRolesRequest, opts: &[RequestOption]) -> Result<Vec<UserRole>> {
        let roles: HashMap<String, String> = self.inner.get("roles", request, opts).await?;
        let mut roles: Vec<UserRole> = roles
            .into_iter()
            .map(|(id, name)| UserRole { id, name })
            .collect();
        roles.sort_by(|a, b| role_order(&a.id).cmp(&role_order(&b.id)));
        Ok(roles)
    }
}

fn role_order(id: &str) -> (bool, u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (false, n, id),
        Err(_) => (true, 0, id),
    }
}
