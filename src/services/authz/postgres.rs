use async_trait::async_trait;
use sqlx::PgPool;

use crate::api::v1::extractors::AuthCtx;
use crate::repos::{error::RepoError, permission_repo};
use crate::services::authz::{Authorizer, Role};
use crate::services::resources::Resource;

/// Grants roles from `user_roles` / `group_roles` in Postgres.
#[derive(Clone, Debug)]
pub struct RoleAuthorizer {
    db: PgPool,
}

impl RoleAuthorizer {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Authorizer for RoleAuthorizer {
    async fn has_role(
        &self,
        user: &AuthCtx,
        resource: &Resource,
        role: Role,
    ) -> Result<bool, RepoError> {
        permission_repo::has_role(
            &self.db,
            user.user_id,
            resource.permission_target(),
            role.as_str(),
        )
        .await
    }
}
