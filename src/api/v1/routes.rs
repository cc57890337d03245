/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は pipeline の外、/resources 系は auth → resource loader → handler
 * - stage の順番はここで明示的に組む (layer は後に足したものが外側 = 先に動く)
 */
use axum::{Router, routing::get};

use crate::middleware::{auth, resource_loader};
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    resources::{descendant_projects, list_resources, show_resource},
};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(resource_routes(state))
}

fn resource_routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/resources", get(list_resources))
        .route("/resources/show", get(show_resource))
        .route("/resources/descendants", get(descendant_projects));

    let router = resource_loader::apply(router, state.clone());
    auth::access::apply(router, state)
}
