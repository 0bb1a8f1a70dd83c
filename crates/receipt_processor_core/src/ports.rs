//! crates/receipt_processor_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, so the core
//! stays independent of where points are kept and how identifiers are made.

use async_trait::async_trait;
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Keeps the points earned by each submitted receipt, keyed by its identifier.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Records `points` under `id`, replacing any previous entry.
    async fn put(&self, id: Uuid, points: u64) -> PortResult<()>;

    /// Returns the points stored under `id`, or `None` if it was never stored.
    async fn get(&self, id: Uuid) -> PortResult<Option<u64>>;
}

/// Issues identifiers for new submissions.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}
