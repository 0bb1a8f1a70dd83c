//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::{InMemoryReceiptStore, UuidV4Generator};
use crate::config::Config;
use receipt_processor_core::ports::{IdGenerator, ReceiptStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by the process-local store and random UUID identifiers.
    pub fn in_memory(config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(InMemoryReceiptStore::new()),
            ids: Arc::new(UuidV4Generator),
            config,
        }
    }
}
