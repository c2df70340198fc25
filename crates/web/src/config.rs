use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(value) => value
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                Err(_) => 10,
            },
        })
    }

    /// Database URL with credentials stripped, for logging
    pub fn redacted_database_url(&self) -> &str {
        self.database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    }
}
