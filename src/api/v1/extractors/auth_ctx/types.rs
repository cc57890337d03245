/*
 * Responsibility
 * - Handler / resource loader から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、下流はこの型だけを受け取る
 *
 * Notes
 * - JWT 検証ロジックは middleware/services 側の責務
 * - 匿名アクセスも AuthCtx として表現する (user_id = None)
 */

use uuid::Uuid;

use crate::services::auth::VerifiedClaims;

/// リクエストに付与される呼び出し元のコンテキスト
///
/// - `user_id` は内部ユーザーID。`None` は匿名
/// - `jti` は監査/相関用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: Option<Uuid>,
    pub jti: Option<String>,
}

impl AuthCtx {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

impl From<VerifiedClaims> for AuthCtx {
    fn from(claims: VerifiedClaims) -> Self {
        Self {
            user_id: Some(claims.user_id),
            jti: claims.jti,
        }
    }
}
