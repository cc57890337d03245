/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - 「見つからない」は Option で返すので、ここはバックエンド障害だけ
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}
