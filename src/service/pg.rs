//! PostgreSQL-backed building repository.

use crate::error::AppError;
use crate::model::{Building, BuildingQuery, BuildingsMeta, BuildingsPage};
use crate::service::BuildingRepository;
use crate::sql::{insert, qualified_table, select_by_title, select_page, QueryBuf};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres};

/// Statements rendered once for the configured table and reused for every request.
/// sqlx prepares and caches them per pooled connection.
struct Statements {
    insert: String,
    by_title: String,
}

pub struct PgBuildingRepository {
    pool: PgPool,
    table: String,
    statements: Statements,
}

impl PgBuildingRepository {
    pub fn new(pool: PgPool, schema: &str, table: &str) -> Self {
        let table = qualified_table(schema, table);
        let statements = Statements {
            insert: insert(&table),
            by_title: select_by_title(&table),
        };
        PgBuildingRepository {
            pool,
            table,
            statements,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Quoted, schema-qualified table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<Building>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Postgres, Building>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_count(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<Postgres, i64>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let n = query.fetch_one(&self.pool).await?;
        Ok(u64::try_from(n).unwrap_or(0))
    }
}

#[async_trait]
impl BuildingRepository for PgBuildingRepository {
    async fn save(&self, building: &Building) -> Result<Building, AppError> {
        tracing::debug!(sql = %self.statements.insert, title = %building.title, "query");
        let row = sqlx::query_as::<Postgres, Building>(&self.statements.insert)
            .bind(&building.title)
            .bind(&building.city)
            .bind(building.year)
            .bind(building.floors)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn building(&self, title: &str) -> Result<Building, AppError> {
        tracing::debug!(sql = %self.statements.by_title, title = %title, "query");
        sqlx::query_as::<Postgres, Building>(&self.statements.by_title)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("building '{}'", title)))
    }

    async fn buildings(&self, query: &BuildingQuery) -> Result<BuildingsPage, AppError> {
        let page = select_page(&self.table, query);
        let data = self.fetch_rows(&page.rows).await?;
        let total_amount = self.fetch_count(&page.count).await?;
        Ok(BuildingsPage {
            data,
            meta: BuildingsMeta {
                total_amount,
                query: page.effective,
            },
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

