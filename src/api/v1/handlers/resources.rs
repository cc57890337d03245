/*
 * Responsibility
 * - /resources 系の read-only handler
 * - `resource` パラメータの解決と認可は resource loader が済ませている
 *   → handler は LoadedResource を受け取るだけ
 * - パラメータ無しの一覧は、呼び出し元が見えるものだけに絞る
 */
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    api::v1::{
        dto::resources::{ListResourcesQuery, ResourceResponse},
        extractors::{AuthCtxExtractor, LoadedResource},
    },
    error::AppError,
    state::AppState,
};

pub async fn list_resources(
    State(state): State<AppState>,
    AuthCtxExtractor(auth_ctx): AuthCtxExtractor,
    loaded: Option<LoadedResource>,
    Query(query): Query<ListResourcesQuery>,
) -> Result<Json<Vec<ResourceResponse>>, AppError> {
    if let Some(resource) = loaded {
        return Ok(Json(vec![ResourceResponse::from(&*resource)]));
    }

    query
        .validate()
        .map_err(|msg| AppError::bad_request("INVALID_PAGE", msg))?;
    let (limit, offset) = query.page();

    let projects = state.resources.list_projects(limit, offset).await?;

    let mut res = Vec::with_capacity(projects.len());
    for project in &projects {
        if state.authorizer.is_authorized(&auth_ctx, project).await? {
            res.push(ResourceResponse::from(project));
        }
    }

    Ok(Json(res))
}

pub async fn show_resource(resource: LoadedResource) -> Json<ResourceResponse> {
    Json(ResourceResponse::from(&*resource))
}

pub async fn descendant_projects(
    State(state): State<AppState>,
    resource: LoadedResource,
) -> Result<Json<Vec<ResourceResponse>>, AppError> {
    let rows = state.resources.descendant_projects(resource.id).await?;
    Ok(Json(rows.iter().map(ResourceResponse::from).collect()))
}
