/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - resources: ResourceStore, authorizer: Authorizer, tokens: AccessTokenVerifier
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - 実装は trait object で受けるので、tests では in-memory に差し替える
 */
use std::sync::Arc;

use crate::services::{
    auth::AccessTokenVerifier, authz::Authorizer, resources::ResourceStore,
};

#[derive(Clone)]
pub struct AppState {
    pub resources: Arc<dyn ResourceStore>,
    pub authorizer: Arc<dyn Authorizer>,
    pub tokens: Arc<dyn AccessTokenVerifier>,
}

impl AppState {
    pub fn new(
        resources: Arc<dyn ResourceStore>,
        authorizer: Arc<dyn Authorizer>,
        tokens: Arc<dyn AccessTokenVerifier>,
    ) -> Self {
        Self {
            resources,
            authorizer,
            tokens,
        }
    }
}
