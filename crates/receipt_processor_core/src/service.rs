//! crates/receipt_processor_core/src/service.rs
//!
//! Ties the scorer to the ports: a submission is scored, given a fresh
//! identifier and recorded before the identifier is handed back.

use crate::domain::{Receipt, ReceiptError, ScoredReceipt};
use crate::ports::{IdGenerator, PortError, PortResult, ReceiptStore};
use crate::scoring;

/// Why a submission was not recorded.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The receipt cannot be scored; nothing was stored.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Scores `receipt` and stores its points under a newly issued identifier.
pub async fn submit_receipt(
    store: &dyn ReceiptStore,
    ids: &dyn IdGenerator,
    receipt: &Receipt,
) -> Result<ScoredReceipt, SubmitError> {
    let points = scoring::score(receipt)?;
    let scored = ScoredReceipt {
        id: ids.next_id(),
        points,
    };
    store.put(scored.id, scored.points).await?;
    Ok(scored)
}

/// Looks up the points recorded for `id`.
pub async fn points_for(store: &dyn ReceiptStore, id: uuid::Uuid) -> PortResult<Option<u64>> {
    store.get(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_purchase_date, parse_purchase_time, Item};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<Uuid, u64>>);

    #[async_trait]
    impl ReceiptStore for MapStore {
        async fn put(&self, id: Uuid, points: u64) -> PortResult<()> {
            self.0.lock().unwrap().insert(id, points);
            Ok(())
        }

        async fn get(&self, id: Uuid) -> PortResult<Option<u64>> {
            Ok(self.0.lock().unwrap().get(&id).copied())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ReceiptStore for FailingStore {
        async fn put(&self, _id: Uuid, _points: u64) -> PortResult<()> {
            Err(PortError::Unexpected("store offline".to_string()))
        }

        async fn get(&self, _id: Uuid) -> PortResult<Option<u64>> {
            Err(PortError::Unexpected("store offline".to_string()))
        }
    }

    #[derive(Default)]
    struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::SeqCst) + 1))
        }
    }

    fn empty_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: parse_purchase_date("2022-01-02").unwrap(),
            purchase_time: parse_purchase_time("09:30").unwrap(),
            total: "1.10".parse().unwrap(),
            items: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_points_under_new_id() {
        let store = MapStore::default();
        let ids = SequentialIds::default();

        let scored = submit_receipt(&store, &ids, &empty_receipt("Shop")).await.unwrap();
        assert_eq!(scored.id, Uuid::from_u128(1));
        assert_eq!(scored.points, 4);
        assert_eq!(points_for(&store, scored.id).await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_identical_receipts_get_distinct_ids() {
        let store = MapStore::default();
        let ids = SequentialIds::default();
        let receipt = empty_receipt("Shop");

        let first = submit_receipt(&store, &ids, &receipt).await.unwrap();
        let second = submit_receipt(&store, &ids, &receipt).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(points_for(&store, first.id).await.unwrap(), Some(4));
        assert_eq!(points_for(&store, second.id).await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_zero_points_are_distinct_from_unknown() {
        let store = MapStore::default();
        let ids = SequentialIds::default();

        let scored = submit_receipt(&store, &ids, &empty_receipt("&&")).await.unwrap();
        assert_eq!(scored.points, 0);
        assert_eq!(points_for(&store, scored.id).await.unwrap(), Some(0));
        assert_eq!(points_for(&store, Uuid::from_u128(99)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let ids = SequentialIds::default();
        let result = submit_receipt(&FailingStore, &ids, &empty_receipt("Shop")).await;
        assert!(matches!(result, Err(SubmitError::Port(PortError::Unexpected(_)))));
    }

    #[tokio::test]
    async fn test_unscorable_receipt_is_not_stored() {
        let store = MapStore::default();
        let ids = SequentialIds::default();
        let mut receipt = empty_receipt("Shop");
        receipt.items = vec![
            Item {
                short_description: "abc".to_string(),
                price: "184467440737095516.15".parse().unwrap(),
            };
            600
        ];

        let result = submit_receipt(&store, &ids, &receipt).await;
        assert!(matches!(result, Err(SubmitError::Receipt(ReceiptError::PointsOverflow))));
        assert!(store.0.lock().unwrap().is_empty());
    }
}
