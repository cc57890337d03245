//! Resource loader: resolves the `resource` request parameter before the
//! action runs.
//!
//! - parameter absent: no lookup, the action runs without a `LoadedResource`
//! - parameter repeated: the last value is used
//! - unknown resource: 404 `Resource [<id>] not found`, the action never runs
//! - known resource: `LoadedResource` goes into the extensions, then the
//!   caller must pass `Authorizer::is_authorized` or the request ends with
//!   an access-denied response
//!
//! Needs `AuthCtx` in the extensions, so it has to be layered inside
//! `middleware::auth::access`.

use axum::{
    Router,
    body::Body,
    extract::{Query, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use crate::api::v1::extractors::{AuthCtx, LoadedResource};
use crate::error::AppError;
use crate::state::AppState;

const RESOURCE_PARAM: &str = "resource";

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, load_resource))
}

async fn load_resource(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri()).map_err(|err| {
        tracing::debug!(error = %err, "unparsable query string");
        AppError::bad_request("INVALID_QUERY", "invalid query string")
    })?;

    let key = pairs
        .into_iter()
        .rev()
        .find_map(|(name, value)| (name == RESOURCE_PARAM).then_some(value));
    let Some(key) = key else {
        return Ok(next.run(req).await);
    };

    let auth_ctx = req.extensions().get::<AuthCtx>().cloned().ok_or_else(|| {
        tracing::error!("AuthCtx missing: resource loader must run after access middleware");
        AppError::Internal
    })?;

    let Some(resource) = state.resources.find_by_key(&key).await? else {
        tracing::debug!(resource = %key, "resource not found");
        return Err(AppError::resource_not_found(key));
    };

    let loaded = LoadedResource::new(resource);
    req.extensions_mut().insert(loaded.clone());

    if !state.authorizer.is_authorized(&auth_ctx, &loaded).await? {
        tracing::warn!(
            resource = %loaded.key,
            user_id = ?auth_ctx.user_id,
            jti = ?auth_ctx.jti,
            "access denied"
        );
        return Err(access_denied(&auth_ctx));
    }

    tracing::debug!(resource = %loaded.key, id = loaded.id, "resource loaded");
    Ok(next.run(req).await)
}

/// Anonymous callers may still get in by authenticating, signed-in ones may not.
fn access_denied(auth_ctx: &AuthCtx) -> AppError {
    if auth_ctx.is_anonymous() {
        AppError::Unauthorized
    } else {
        AppError::Forbidden
    }
}
