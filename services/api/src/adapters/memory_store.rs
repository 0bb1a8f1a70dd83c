//! services/api/src/adapters/memory_store.rs
//!
//! The in-process implementation of the `ReceiptStore` port. Entries live for
//! the lifetime of the process and are never evicted.

use async_trait::async_trait;
use receipt_processor_core::ports::{PortResult, ReceiptStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A `ReceiptStore` backed by a lock-guarded `HashMap`.
#[derive(Default)]
pub struct InMemoryReceiptStore {
    points: RwLock<HashMap<Uuid, u64>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, id: Uuid, points: u64) -> PortResult<()> {
        self.points.write().await.insert(id, points);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> PortResult<Option<u64>> {
        Ok(self.points.read().await.get(&id).copied())
    }
}
