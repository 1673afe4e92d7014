use std::env;

/// Connection string used when `DATABASE_URL` is not set
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL or SQLite connection string
    pub database_url: String,
    /// Upper bound for the connection pool (in-memory SQLite always uses one)
    pub database_max_connections: u32,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| IN_MEMORY_DATABASE_URL.to_string()),
            database_max_connections: parse_or(env::var("DATABASE_MAX_CONNECTIONS").ok(), 10),
            port: parse_or(env::var("PORT").ok(), 8080),
        }
    }

    /// Check if the configured database lives only in process memory
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite::memory:")
            || self.database_url.contains("mode=memory")
    }

    /// Pool size to request; an in-memory SQLite database exists per
    /// connection, so the pool must never open a second one.
    pub fn pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.database_max_connections.max(1)
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
