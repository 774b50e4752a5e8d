//! Startup configuration: database descriptor and HTTP bind address.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_SCHEMA: &str = "public";
pub const DEFAULT_DB_TABLE: &str = "buildings";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

fn default_host() -> String {
    DEFAULT_DB_HOST.into()
}

fn default_port() -> u16 {
    DEFAULT_DB_PORT
}

fn default_schema() -> String {
    DEFAULT_DB_SCHEMA.into()
}

fn default_table() -> String {
    DEFAULT_DB_TABLE.into()
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_http_addr() -> String {
    DEFAULT_HTTP_ADDR.into()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    #[serde(rename = "db", alias = "database")]
    pub name: String,
    /// Schema holding the buildings table.
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .field("table", &self.table)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_http_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: default_http_addr(),
        }
    }
}
