//! Builds parameterized INSERT and SELECT statements for the buildings table.

use crate::model::BuildingQuery;
use crate::sql::PgBindValue;

/// Columns returned to callers, in `Building` field order. `id` stays internal.
const COLUMNS: [&str; 4] = ["title", "city", "year", "floors"];

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

fn column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// INSERT one building; caller binds title, city, year, floors as $1..$4.
pub fn insert(table: &str) -> String {
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        column_list(),
        placeholders.join(", "),
        column_list()
    )
}

/// SELECT by exact title. Caller adds title as sole param.
pub fn select_by_title(table: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 LIMIT 1",
        column_list(),
        table,
        quoted("title")
    )
}

/// Row query, count query and the effective filter for one list request.
pub struct PageQuery {
    pub rows: QueryBuf,
    pub count: QueryBuf,
    pub effective: BuildingQuery,
}

/// Equality predicates contributed by the provided filter fields, with their binds.
struct Predicates {
    buf: QueryBuf,
    parts: Vec<String>,
}

impl Predicates {
    fn new() -> Self {
        Predicates {
            buf: QueryBuf::new(),
            parts: Vec::new(),
        }
    }

    fn push(&mut self, column: &str, value: PgBindValue) {
        let n = self.buf.push_param(value);
        self.parts.push(format!("{} = ${}", quoted(column), n));
    }

    fn where_clause(&self) -> String {
        if self.parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.parts.join(" AND "))
        }
    }
}

/// SELECT one page plus COUNT(*) over the same predicates.
///
/// Only non-empty city and positive year/floors become predicates. Both statements share one
/// WHERE clause and one predicate bind list; the row query appends LIMIT and OFFSET after it,
/// with OFFSET = page index * effective limit. Rows are ordered by title then id.
pub fn select_page(table: &str, query: &BuildingQuery) -> PageQuery {
    let mut predicates = Predicates::new();
    let mut effective = BuildingQuery::default();

    if !query.city.is_empty() {
        predicates.push("city", query.city.as_str().into());
        effective.city = query.city.clone();
    }
    if query.floors > 0 {
        predicates.push("floors", query.floors.into());
        effective.floors = query.floors;
    }
    if query.year > 0 {
        predicates.push("year", query.year.into());
        effective.year = query.year;
    }

    let where_clause = predicates.where_clause();
    let limit = query.effective_limit();
    let page = query.effective_page();
    effective.limit = limit;
    effective.offset = page;

    let mut rows = QueryBuf {
        sql: String::new(),
        params: predicates.buf.params.clone(),
    };
    let limit_param = rows.push_param(limit.into());
    let offset_param = rows.push_param(page.saturating_mul(limit).into());
    rows.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}, {} LIMIT ${} OFFSET ${}",
        column_list(),
        table,
        where_clause,
        quoted("title"),
        quoted("id"),
        limit_param,
        offset_param
    );

    let mut count = predicates.buf;
    count.sql = format!("SELECT COUNT(*) FROM {}{}", table, where_clause);

    PageQuery {
        rows,
        count,
        effective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: &str = "\"public\".\"buildings\"";

    #[test]
    fn qualified_table_quotes_both_parts() {
        assert_eq!(qualified_table("public", "buildings"), T);
        assert_eq!(qualified_table("odd\"schema", "b"), "\"odd\"\"schema\".\"b\"");
    }

    #[test]
    fn insert_binds_four_columns() {
        assert_eq!(
            insert(T),
            "INSERT INTO \"public\".\"buildings\" (\"title\", \"city\", \"year\", \"floors\") \
             VALUES ($1, $2, $3, $4) RETURNING \"title\", \"city\", \"year\", \"floors\""
        );
    }

    #[test]
    fn select_by_title_uses_single_param() {
        let sql = select_by_title(T);
        assert!(sql.ends_with("WHERE \"title\" = $1 LIMIT 1"), "{sql}");
    }

    #[test]
    fn no_filters_only_limit_and_offset() {
        let q = select_page(T, &BuildingQuery::default());
        assert_eq!(
            q.rows.sql,
            "SELECT \"title\", \"city\", \"year\", \"floors\" FROM \"public\".\"buildings\" \
             ORDER BY \"title\", \"id\" LIMIT $1 OFFSET $2"
        );
        assert_eq!(q.rows.params, vec![PgBindValue::BigInt(10), PgBindValue::BigInt(0)]);
        assert_eq!(q.count.sql, "SELECT COUNT(*) FROM \"public\".\"buildings\"");
        assert!(q.count.params.is_empty());
        assert_eq!(q.effective.limit, 10);
        assert_eq!(q.effective.offset, 0);
    }

    #[test]
    fn all_filters_numbered_in_order() {
        let query = BuildingQuery {
            city: "Berlin".into(),
            year: 2010,
            floors: 42,
            limit: 5,
            offset: 2,
        };
        let q = select_page(T, &query);
        assert!(
            q.rows
                .sql
                .contains(" WHERE \"city\" = $1 AND \"floors\" = $2 AND \"year\" = $3 ORDER BY"),
            "{}",
            q.rows.sql
        );
        assert!(q.rows.sql.ends_with("LIMIT $4 OFFSET $5"));
        assert_eq!(
            q.rows.params,
            vec![
                PgBindValue::Text("Berlin".into()),
                PgBindValue::Int(42),
                PgBindValue::Int(2010),
                PgBindValue::BigInt(5),
                PgBindValue::BigInt(10),
            ]
        );
        assert_eq!(
            q.count.sql,
            "SELECT COUNT(*) FROM \"public\".\"buildings\" \
             WHERE \"city\" = $1 AND \"floors\" = $2 AND \"year\" = $3"
        );
        assert_eq!(q.count.params, q.rows.params[..3].to_vec());
        assert_eq!(q.effective, query);
    }

    #[test]
    fn single_filter_keeps_count_params_aligned() {
        let q = select_page(
            T,
            &BuildingQuery {
                year: 1999,
                ..Default::default()
            },
        );
        assert!(q.rows.sql.contains("WHERE \"year\" = $1 ORDER BY"));
        assert!(q.rows.sql.ends_with("LIMIT $2 OFFSET $3"));
        assert_eq!(q.count.params, vec![PgBindValue::Int(1999)]);
        assert_eq!(q.effective.year, 1999);
        assert_eq!(q.effective.city, "");
        assert_eq!(q.effective.floors, 0);
    }

    #[test]
    fn non_positive_filters_are_ignored() {
        let q = select_page(
            T,
            &BuildingQuery {
                year: -1,
                floors: 0,
                ..Default::default()
            },
        );
        assert!(!q.rows.sql.contains("WHERE"));
        assert!(!q.count.sql.contains("WHERE"));
        assert_eq!(q.effective.year, 0);
    }

    #[test]
    fn offset_is_page_index_times_limit() {
        let q = select_page(
            T,
            &BuildingQuery {
                limit: 20,
                offset: 3,
                ..Default::default()
            },
        );
        assert_eq!(q.rows.params, vec![PgBindValue::BigInt(20), PgBindValue::BigInt(60)]);
        assert_eq!(q.effective.offset, 3);
    }

    #[test]
    fn zero_limit_defaults_before_offset_multiplication() {
        let q = select_page(
            T,
            &BuildingQuery {
                limit: 0,
                offset: 2,
                ..Default::default()
            },
        );
        assert_eq!(q.rows.params, vec![PgBindValue::BigInt(10), PgBindValue::BigInt(20)]);
        assert_eq!(q.effective.limit, 10);
    }

    #[test]
    fn negative_page_clamped_to_zero() {
        let q = select_page(
            T,
            &BuildingQuery {
                offset: -4,
                ..Default::default()
            },
        );
        assert_eq!(q.rows.params[1], PgBindValue::BigInt(0));
        assert_eq!(q.effective.offset, 0);
    }

    #[test]
    fn count_query_independent_of_paging() {
        let base = BuildingQuery {
            city: "Paris".into(),
            ..Default::default()
        };
        let a = select_page(T, &BuildingQuery { limit: 3, offset: 0, ..base.clone() });
        let b = select_page(T, &BuildingQuery { limit: 50, offset: 7, ..base });
        assert_eq!(a.count.sql, b.count.sql);
        assert_eq!(a.count.params, b.count.params);
    }
}
