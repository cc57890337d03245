/*
 * Responsibility
 * - middleware の公開インターフェース
 * - app 全体に掛けるもの (http, cors) と、Resource API の pipeline stage
 *   (auth::access → resource_loader) を分けて置く
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod resource_loader;
