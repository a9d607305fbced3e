//! In-memory order store for testing

use super::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Order store keeping identifiers in process memory, in first-seen order
#[derive(Debug, Default)]
pub struct MemoryStore {
    order_ids: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded identifiers
    pub fn order_ids(&self) -> Vec<String> {
        self.order_ids.lock().expect("order store lock").clone()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn record_order_ids(&self, order_ids: &[String]) -> Result<()> {
        let mut recorded = self.order_ids.lock().expect("order store lock");
        for order_id in order_ids {
            if !recorded.contains(order_id) {
                recorded.push(order_id.clone());
            }
        }
        Ok(())
    }
}
