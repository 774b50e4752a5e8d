//! Database bootstrap: create the database and the buildings table when missing.
//! Runs once at startup; there is no versioned migration history.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::sql::qualified_table;
use sqlx::ConnectOptions;
use sqlx::PgPool;

/// Connect to the `postgres` maintenance database and create `cfg.name` if it does not exist.
pub async fn ensure_database_exists(cfg: &DatabaseConfig) -> Result<(), AppError> {
    if cfg.name.is_empty() || cfg.name == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = cfg
        .connect_options()
        .database("postgres")
        .connect()
        .await
        .map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&cfg.name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %cfg.name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&cfg.name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

/// Create schema, buildings table and city index if not exists.
pub async fn ensure_buildings_table(pool: &PgPool, schema: &str, table: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    let q_table = qualified_table(schema, table);
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            city TEXT NOT NULL,
            year INTEGER NOT NULL,
            floors INTEGER NOT NULL
        )
        "#,
        q_table
    );
    sqlx::query(&ddl).execute(pool).await?;

    let index = quote_ident(&format!("{}_city_idx", table));
    sqlx::query(&format!("CREATE INDEX IF NOT EXISTS {} ON {} (city)", index, q_table))
        .execute(pool)
        .await?;
    let index = quote_ident(&format!("{}_title_idx", table));
    sqlx::query(&format!("CREATE INDEX IF NOT EXISTS {} ON {} (title)", index, q_table))
        .execute(pool)
        .await?;
    tracing::debug!(table = %q_table, "buildings table ready");
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
