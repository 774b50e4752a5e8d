//! Building entity, create payload, list filter and page types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default page size when the request omits `limit` or passes 0.
pub const DEFAULT_LIMIT: i64 = 10;
/// Upper bound applied to `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// A stored building. `title` is the external key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Building {
    pub title: String,
    pub city: String,
    pub year: i32,
    pub floors: i32,
}

/// Create payload. Every field is optional so absence is reported by validation, not by JSON decoding.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NewBuilding {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub floors: Option<i32>,
}

/// List filter. Zero / empty values mean "not provided".
/// `offset` is a page index, not a row count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BuildingQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub floors: i32,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl BuildingQuery {
    /// Limit actually applied: non-positive falls back to the default, then capped.
    pub fn effective_limit(&self) -> i64 {
        if self.limit <= 0 {
            DEFAULT_LIMIT
        } else {
            self.limit.min(MAX_LIMIT)
        }
    }

    /// Page index actually applied (never negative).
    pub fn effective_page(&self) -> i64 {
        self.offset.max(0)
    }
}

/// One page of buildings plus the total row count for the same filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BuildingsPage {
    pub data: Vec<Building>,
    pub meta: BuildingsMeta,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BuildingsMeta {
    pub total_amount: u64,
    /// Effective query: only the filters that were applied, with defaults resolved.
    pub query: BuildingQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_caps() {
        let mut q = BuildingQuery::default();
        assert_eq!(q.effective_limit(), DEFAULT_LIMIT);
        q.limit = -3;
        assert_eq!(q.effective_limit(), DEFAULT_LIMIT);
        q.limit = 5;
        assert_eq!(q.effective_limit(), 5);
        q.limit = 50_000;
        assert_eq!(q.effective_limit(), MAX_LIMIT);
    }

    #[test]
    fn echo_omits_absent_filters() {
        let q = BuildingQuery {
            city: "Berlin".into(),
            limit: 10,
            ..Default::default()
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v, serde_json::json!({"city": "Berlin", "limit": 10, "offset": 0}));
    }
}
