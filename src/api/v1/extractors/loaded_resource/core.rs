use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::LoadedResource;

/// `LoadedResource` as a required handler argument.
/// パラメータ自体が無い場合は 400 (not found / denied は loader 側で終わっている)
impl FromRequestParts<AppState> for LoadedResource {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LoadedResource>()
            .cloned()
            .ok_or_else(|| AppError::bad_request("MISSING_PARAMETER", "Missing parameter: resource"))
    }
}

/// `Option<LoadedResource>` for actions where the parameter is optional.
impl OptionalFromRequestParts<AppState> for LoadedResource {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<LoadedResource>().cloned())
    }
}
