/*
 * Responsibility
 * - Resource の response DTO と一覧用 query
 * - 内部 row 型 (ResourceRow) はここに出さない
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::resources::Resource;

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 500;

#[derive(Debug, Serialize, PartialEq)]
pub struct ResourceResponse {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub long_name: Option<String>,
    pub scope: String,
    pub qualifier: String,
    pub kind: &'static str,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Resource> for ResourceResponse {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id,
            key: r.key.clone(),
            name: r.name.clone(),
            long_name: r.long_name.clone(),
            scope: r.scope.clone(),
            qualifier: r.qualifier.clone(),
            kind: r.kind().as_str(),
            enabled: r.enabled,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListResourcesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListResourcesQuery {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(limit) = self.limit
            && limit <= 0
        {
            return Err("limit must be > 0");
        }
        if let Some(offset) = self.offset
            && offset < 0
        {
            return Err("offset must be >= 0");
        }
        Ok(())
    }

    /// (limit, offset) with the default page size and the upper cap applied.
    pub fn page(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        (limit, self.offset.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_and_cap() {
        assert_eq!(ListResourcesQuery::default().page(), (50, 0));

        let q = ListResourcesQuery {
            limit: Some(10_000),
            offset: Some(20),
        };
        assert_eq!(q.page(), (500, 20));
    }

    #[test]
    fn non_positive_limit_and_negative_offset_are_rejected() {
        let q = ListResourcesQuery {
            limit: Some(0),
            offset: None,
        };
        assert!(q.validate().is_err());

        let q = ListResourcesQuery {
            limit: None,
            offset: Some(-1),
        };
        assert!(q.validate().is_err());
    }
}
