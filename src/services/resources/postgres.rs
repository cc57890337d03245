use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{error::RepoError, resource_repo};
use crate::services::resources::{Resource, ResourceStore};

/// Postgres-backed resource store (`projects` table).
#[derive(Clone, Debug)]
pub struct PgResourceStore {
    db: PgPool,
}

impl PgResourceStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError> {
        Ok(resource_repo::get_by_id(&self.db, id)
            .await?
            .map(Resource::from))
    }

    async fn find_by_kee(&self, kee: &str) -> Result<Option<Resource>, RepoError> {
        Ok(resource_repo::get_by_kee(&self.db, kee)
            .await?
            .map(Resource::from))
    }

    async fn root_project_id(&self, id: i64) -> Result<Option<i64>, RepoError> {
        resource_repo::root_project_id(&self.db, id).await
    }

    async fn descendant_projects(&self, id: i64) -> Result<Vec<Resource>, RepoError> {
        let rows = resource_repo::descendant_projects(&self.db, id).await?;
        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn list_projects(&self, limit: i64, offset: i64) -> Result<Vec<Resource>, RepoError> {
        let rows = resource_repo::list_projects(&self.db, limit, offset).await?;
        Ok(rows.into_iter().map(Resource::from).collect())
    }
}
