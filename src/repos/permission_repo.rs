/*
 * Responsibility
 * - user_roles / group_roles / groups_users から権限の有無だけを答える
 * - group_id IS NULL の group_roles は "Anyone" (匿名ユーザーも含む)
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoError;

/// `user_id = None` is the anonymous user: only "Anyone" grants apply.
pub async fn has_role(
    db: &PgPool,
    user_id: Option<Uuid>,
    resource_id: i64,
    role: &str,
) -> Result<bool, RepoError> {
    let granted: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM user_roles ur
            WHERE ur.user_id = $1 AND ur.resource_id = $2 AND ur.role = $3
            UNION ALL
            SELECT 1
            FROM group_roles gr
            WHERE gr.resource_id = $2
              AND gr.role = $3
              AND (
                gr.group_id IS NULL
                OR gr.group_id IN (
                    SELECT gu.group_id FROM groups_users gu WHERE gu.user_id = $1
                )
              )
        )
        "#,
    )
    .bind(user_id)
    .bind(resource_id)
    .bind(role)
    .fetch_one(db)
    .await?;

    Ok(granted)
}
