/*
 * Responsibility
 * - projects テーブル (resource) の読み取り専用クエリ
 * - id / kee での単発取得、最上位プロジェクトの解決、子孫プロジェクト、root プロジェクト一覧
 * - 書き込みはこの API の責務外
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct ResourceRow {
    pub id: i64,
    pub kee: String,
    pub name: String,
    pub long_name: Option<String>,
    pub scope: String,
    pub qualifier: String,
    pub root_id: Option<i64>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

pub async fn get_by_id(db: &PgPool, id: i64) -> Result<Option<ResourceRow>, RepoError> {
    let row = sqlx::query_as::<_, ResourceRow>(
        r#"
        SELECT id, kee, name, long_name, scope, qualifier, root_id, enabled, created_at
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get_by_kee(db: &PgPool, kee: &str) -> Result<Option<ResourceRow>, RepoError> {
    // kee は unique だが、古いデータで重複があっても最初の 1 件に固定する
    let row = sqlx::query_as::<_, ResourceRow>(
        r#"
        SELECT id, kee, name, long_name, scope, qualifier, root_id, enabled, created_at
        FROM projects
        WHERE kee = $1
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(kee)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Top-level project of `id`, following `root_id` up to the row that has none.
/// `None` when `id` does not exist.
pub async fn root_project_id(db: &PgPool, id: i64) -> Result<Option<i64>, RepoError> {
    // depth で打ち切るので root_id が循環していても止まる
    let root = sqlx::query_scalar::<_, i64>(
        r#"
        WITH RECURSIVE ancestors AS (
            SELECT id, root_id, 0 AS depth
            FROM projects
            WHERE id = $1
            UNION ALL
            SELECT p.id, p.root_id, a.depth + 1
            FROM projects p
            JOIN ancestors a ON p.id = a.root_id
            WHERE a.depth < 64
        )
        SELECT id
        FROM ancestors
        ORDER BY depth DESC
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(root)
}

/// Projects (scope `PRJ`) below `id`, at any depth. `id` itself is never
/// part of the result.
pub async fn descendant_projects(db: &PgPool, id: i64) -> Result<Vec<ResourceRow>, RepoError> {
    let rows = sqlx::query_as::<_, ResourceRow>(
        r#"
        WITH RECURSIVE descendants AS (
            SELECT p.id
            FROM projects p
            WHERE p.root_id = $1 AND p.scope = 'PRJ' AND p.id <> $1
            UNION
            SELECT p.id
            FROM projects p
            JOIN descendants d ON p.root_id = d.id
            WHERE p.scope = 'PRJ' AND p.id <> $1
        )
        SELECT id, kee, name, long_name, scope, qualifier, root_id, enabled, created_at
        FROM projects
        WHERE id IN (SELECT id FROM descendants)
        ORDER BY id
        "#,
    )
    .bind(id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_projects(
    db: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<ResourceRow>, RepoError> {
    let rows = sqlx::query_as::<_, ResourceRow>(
        r#"
        SELECT id, kee, name, long_name, scope, qualifier, root_id, enabled, created_at
        FROM projects
        WHERE qualifier = 'TRK' AND enabled = TRUE
        ORDER BY id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}
