/*
 * Responsibility
 * - handler が受け取る request-scoped な型の公開窓口
 */
mod auth_ctx;
mod loaded_resource;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use loaded_resource::LoadedResource;
