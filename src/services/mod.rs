/*
 * Responsibility
 * - handler / middleware から使う service 群
 * - 外部依存 (DB, JWT) は trait の裏に置き、AppState で差し替えられるようにする
 */
pub mod auth;
pub mod authz;
pub mod resources;
