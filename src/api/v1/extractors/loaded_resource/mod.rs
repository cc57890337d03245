/**
 * Responsibility
 *  - resource loader が解決した Resource を handler に渡す
 *  - 型 (types) と axum extractor 実装 (core) を分ける
 */
mod core;
mod types;

pub use types::LoadedResource;
