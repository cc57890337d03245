//! In-memory stand-ins for the injected collaborators, shared by unit tests.
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::api::v1::extractors::AuthCtx;
use crate::config::Config;
use crate::repos::error::RepoError;
use crate::services::auth::{AccessTokenVerifier, VerifiedClaims, VerifyError};
use crate::services::authz::{Authorizer, Role};
use crate::services::resources::{Resource, ResourceStore};
use crate::state::AppState;

/// Valid config with the given keys set on top of the required ones.
pub fn config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("DATABASE_URL", "postgres://localhost/resources"),
        ("AUTH_ISSUER", "https://auth.example.com"),
        ("AUTH_AUDIENCE", "resource-api"),
        ("ACCESS_JWT_PUBLIC_KEY_PEM", "unused"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert(k.to_string(), v.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn resource(id: i64, key: &str, qualifier: &str) -> Resource {
    let scope = match qualifier {
        "DIR" | "PAC" => "DIR",
        "FIL" | "CLA" | "UTS" => "FIL",
        _ => "PRJ",
    };
    Resource {
        id,
        key: key.to_string(),
        name: key.rsplit(':').next().unwrap_or(key).to_string(),
        long_name: None,
        scope: scope.to_string(),
        qualifier: qualifier.to_string(),
        root_id: None,
        root_project_id: None,
        enabled: true,
        created_at: Utc.with_ymd_and_hms(2012, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[derive(Clone, Default)]
pub struct InMemoryResourceStore {
    resources: Vec<Resource>,
    failing: bool,
}

impl InMemoryResourceStore {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources,
            failing: false,
        }
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.failing {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, RepoError> {
        self.check()?;
        Ok(self.resources.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_kee(&self, kee: &str) -> Result<Option<Resource>, RepoError> {
        self.check()?;
        Ok(self.resources.iter().find(|r| r.key == kee).cloned())
    }

    async fn root_project_id(&self, id: i64) -> Result<Option<i64>, RepoError> {
        self.check()?;
        let Some(mut current) = self.resources.iter().find(|r| r.id == id) else {
            return Ok(None);
        };
        // bounded so a cyclic fixture cannot hang a test
        for _ in 0..64 {
            let Some(parent) = current
                .root_id
                .and_then(|pid| self.resources.iter().find(|r| r.id == pid))
            else {
                break;
            };
            current = parent;
        }
        Ok(Some(current.id))
    }

    async fn descendant_projects(&self, id: i64) -> Result<Vec<Resource>, RepoError> {
        self.check()?;
        let mut found = Vec::new();
        let mut frontier = vec![id];
        while let Some(parent) = frontier.pop() {
            for r in &self.resources {
                if r.root_id == Some(parent) && r.scope == "PRJ" && r.id != id {
                    frontier.push(r.id);
                    found.push(r.clone());
                }
            }
        }
        found.sort_by_key(|r| r.id);
        Ok(found)
    }

    async fn list_projects(&self, limit: i64, offset: i64) -> Result<Vec<Resource>, RepoError> {
        self.check()?;
        let mut projects: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| r.qualifier == "TRK" && r.enabled)
            .cloned()
            .collect();
        projects.sort_by_key(|r| std::cmp::Reverse(r.id));
        Ok(projects
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// Grants the `user` role on `(user, permission target)` pairs; `None` is "Anyone".
#[derive(Clone, Default)]
pub struct StaticAuthorizer {
    grants: HashSet<(Option<Uuid>, i64)>,
}

#[async_trait]
impl Authorizer for StaticAuthorizer {
    async fn has_role(
        &self,
        user: &AuthCtx,
        resource: &Resource,
        role: Role,
    ) -> Result<bool, RepoError> {
        if role != Role::User {
            return Ok(false);
        }
        let target = resource.permission_target();
        Ok(self.grants.contains(&(None, target))
            || (user.user_id.is_some() && self.grants.contains(&(user.user_id, target))))
    }
}

/// Opaque token strings mapped to user ids.
#[derive(Clone, Default)]
pub struct StaticTokens {
    tokens: HashMap<String, Uuid>,
}

impl AccessTokenVerifier for StaticTokens {
    fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifyError> {
        self.tokens
            .get(token)
            .map(|user_id| VerifiedClaims {
                user_id: *user_id,
                jti: None,
            })
            .ok_or(VerifyError::InvalidSubject)
    }
}

#[derive(Default)]
pub struct TestState {
    store: InMemoryResourceStore,
    authorizer: StaticAuthorizer,
    tokens: StaticTokens,
}

impl TestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.store.resources.push(resource);
        self
    }

    pub fn grant(mut self, user: Option<Uuid>, resource_id: i64) -> Self {
        self.authorizer.grants.insert((user, resource_id));
        self
    }

    pub fn token(mut self, token: &str, user: Uuid) -> Self {
        self.tokens.tokens.insert(token.to_string(), user);
        self
    }

    pub fn failing_store(mut self) -> Self {
        self.store.failing = true;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(
            Arc::new(self.store),
            Arc::new(self.authorizer),
            Arc::new(self.tokens),
        )
    }
}
