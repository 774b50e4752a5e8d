//! Load config from a JSON file named by `CONFIG_PATH`, or from `DB_*` / `HTTP_ADDR` env vars.

use crate::config::types::*;
use crate::error::ConfigError;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Load from the process environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    load_with(|name| std::env::var(name).ok())
}

/// Load using `var` as the environment lookup. A set `CONFIG_PATH` wins over individual vars.
pub fn load_with<F>(var: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| var(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(path) = lookup(CONFIG_PATH_VAR) {
        tracing::info!(path = %path, "loading config file");
        return load_from_file(Path::new(&path));
    }

    let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

    let database = DatabaseConfig {
        host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into()),
        port: parse_or("DB_PORT", lookup("DB_PORT"), DEFAULT_DB_PORT)?,
        user: required("DB_USER")?,
        password: required("DB_PASSWORD")?,
        name: required("DB_NAME")?,
        schema: lookup("DB_SCHEMA").unwrap_or_else(|| DEFAULT_DB_SCHEMA.into()),
        table: lookup("DB_TABLE").unwrap_or_else(|| DEFAULT_DB_TABLE.into()),
        max_connections: parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?,
    };
    let server = ServerConfig {
        addr: lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.into()),
    };
    Ok(AppConfig { database, server })
}

/// Read a JSON `AppConfig` file.
pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { var: name, value: v }),
    }
}
