//! Order-ID persistence behind a narrow storage trait
//!
//! Handlers receive an `Arc<dyn OrderStore>` instead of reaching for a
//! global pool, so the HTTP layer stays testable against the in-memory
//! implementation.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::error::Result;
use async_trait::async_trait;

/// Persistence surface for order identifiers
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create the orders table if it does not exist yet
    async fn init_schema(&self) -> Result<()>;

    /// Record each identifier not already present, in input order
    ///
    /// The existence check and the insert are two independent statements
    /// with no transaction around them; identifiers already recorded are
    /// skipped, and a failure part-way through leaves earlier inserts in
    /// place.
    async fn record_order_ids(&self, order_ids: &[String]) -> Result<()>;
}
