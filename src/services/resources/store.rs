//! Resource lookup interface used by the resource loader and handlers.
use async_trait::async_trait;

use crate::repos::error::RepoError;
use crate::services::resources::Resource;

/// Read-only access to resources.
///
/// Implementations must be cheap to share (`Arc<dyn ResourceStore>` in `AppState`).
#[async_trait]
pub trait ResourceStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError>;

    async fn find_by_kee(&self, kee: &str) -> Result<Option<Resource>, RepoError>;

    /// Top-level project above `id`, or `id` itself when it has no parent.
    async fn root_project_id(&self, id: i64) -> Result<Option<i64>, RepoError>;

    async fn descendant_projects(&self, id: i64) -> Result<Vec<Resource>, RepoError>;

    async fn list_projects(&self, limit: i64, offset: i64) -> Result<Vec<Resource>, RepoError>;

    /// Resolves a client supplied identifier.
    ///
    /// A numeric identifier is tried as an id first, then as a key, so a
    /// project whose key happens to be numeric stays reachable. The returned
    /// resource has `root_project_id` filled in.
    async fn find_by_key(&self, key: &str) -> Result<Option<Resource>, RepoError> {
        let found = match key.parse::<i64>() {
            Ok(id) => match self.find_by_id(id).await? {
                Some(resource) => Some(resource),
                None => self.find_by_kee(key).await?,
            },
            Err(_) => self.find_by_kee(key).await?,
        };
        let Some(mut resource) = found else {
            return Ok(None);
        };

        if resource.root_id.is_some() {
            resource.root_project_id = self.root_project_id(resource.id).await?;
        }
        Ok(Some(resource))
    }
}
