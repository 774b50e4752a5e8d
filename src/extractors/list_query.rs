//! Extract the list filter from the query string, tolerating malformed numbers.

use crate::model::BuildingQuery;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use std::str::FromStr;

/// List filter decoded from `?city=&year=&floors=&limit=&offset=`.
/// Never rejects: a value that does not parse is logged and treated as absent.
#[derive(Clone, Debug)]
pub struct ListQuery(pub BuildingQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            Ok(Query(p)) => p,
            Err(e) => {
                tracing::info!(error = %e, "malformed query string, ignoring filters");
                HashMap::new()
            }
        };
        Ok(ListQuery(query_from_params(&params)))
    }
}

pub fn query_from_params(params: &HashMap<String, String>) -> BuildingQuery {
    BuildingQuery {
        city: params.get("city").map(|s| s.trim().to_string()).unwrap_or_default(),
        year: permissive("year", params.get("year")),
        floors: permissive("floors", params.get("floors")),
        limit: permissive("limit", params.get("limit")),
        offset: permissive("offset", params.get("offset")),
    }
}

/// Missing or empty → 0. Unparseable → logged, 0.
fn permissive<T: FromStr + Default>(name: &str, raw: Option<&String>) -> T {
    let Some(raw) = raw.map(|s| s.trim()).filter(|s| !s.is_empty()) else {
        return T::default();
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::info!(param = name, value = %raw, "invalid integer query parameter, treating as absent");
            T::default()
        }
    }
}
