//! "Can the current user see this resource?" as an injected capability.
use async_trait::async_trait;

use crate::api::v1::extractors::AuthCtx;
use crate::repos::error::RepoError;
use crate::services::authz::Role;
use crate::services::resources::Resource;

#[async_trait]
pub trait Authorizer: Send + Sync + 'static {
    async fn has_role(
        &self,
        user: &AuthCtx,
        resource: &Resource,
        role: Role,
    ) -> Result<bool, RepoError>;

    /// Browse access: the `user` role on the resource's permission target.
    async fn is_authorized(&self, user: &AuthCtx, resource: &Resource) -> Result<bool, RepoError> {
        self.has_role(user, resource, Role::User).await
    }
}
