//! PostgreSQL-backed order store

use super::OrderStore;
use crate::config::DatabaseSettings;
use crate::error::{Error, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_ORDERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        orderID VARCHAR(255) NOT NULL
    )
"#;

/// Order store backed by a pooled PostgreSQL client
pub struct PostgresStore {
    pool: Arc<PgPool>,
}

impl PostgresStore {
    /// Build the connection pool from the database settings
    ///
    /// The pool dials lazily, so an unreachable database surfaces on first
    /// use rather than preventing server start.
    pub fn connect(settings: &DatabaseSettings) -> Result<Self> {
        info!("Initializing PostgreSQL order store");

        let connect_options = PgConnectOptions::from_str(&settings.connection_string())
            .map_err(|e| Error::Config(format!("invalid connection string: {e}")))?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_lazy_with(connect_options);

        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

#[async_trait]
impl OrderStore for PostgresStore {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_ORDERS_TABLE)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn record_order_ids(&self, order_ids: &[String]) -> Result<()> {
        // One pooled connection for the whole batch; dropping it at the end
        // of this scope releases it on success and failure alike.
        let mut conn = self.pool.acquire().await?;

        for order_id in order_ids {
            debug!("Checking order ID: {}", order_id);

            let existing = sqlx::query("SELECT orderID FROM orders WHERE orderID = $1")
                .bind(order_id)
                .fetch_optional(&mut *conn)
                .await?;

            if existing.is_none() {
                sqlx::query("INSERT INTO orders (orderID) VALUES ($1)")
                    .bind(order_id)
                    .execute(&mut *conn)
                    .await?;
                debug!("Recorded new order ID: {}", order_id);
            }
        }

        Ok(())
    }
}
