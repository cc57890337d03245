//! access token（JWT）検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization` ヘッダ無し: 匿名 AuthCtx
//! - `Authorization: Bearer <jwt>`: 検証して user_id を AuthCtx に格納
//! - それ以外 (形式不正・検証失敗): 401
//!
//! 匿名を通すかどうかは、後段の resource loader / authorizer が決める。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Resource API に認証ステージを掛ける。
///
/// `route_layer` なので、マッチしないパスでは動かない。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_ctx = match bearer_token(req.headers())? {
        None => AuthCtx::anonymous(),
        Some(token) => match state.tokens.verify(token) {
            Ok(claims) => AuthCtx::from(claims),
            Err(err) => {
                tracing::warn!(error = ?err, "access token verification failed");
                return Err(AppError::Unauthorized);
            }
        },
    };

    // middleware → 後段 (resource loader / extractor) への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

/// `Ok(None)` when no credentials were sent at all.
fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("malformed authorization header");
            AppError::Unauthorized
        })?;

    Ok(Some(token))
}
