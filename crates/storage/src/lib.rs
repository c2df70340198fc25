use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use error::Result;

/// Shared handle on the tournament database
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to Postgres with the given connection string
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_max_connections(database_url, 10).await
    }

    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests hand in lazily connected pools)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
