/*
 * Responsibility
 * - SQLx で読むテーブルごとの関数群
 * - PgPool を受け取り、行型 (XxxRow) か RepoError を返す
 */
pub mod error;
pub mod permission_repo;
pub mod resource_repo;
