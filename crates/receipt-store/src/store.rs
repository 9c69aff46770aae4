//! # Receipt Store
//!
//! Keyed storage of scored receipts.
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock, Many Handles                               │
//! │                                                                         │
//! │  handler A ─┐                                                          │
//! │  handler B ─┼─► ReceiptStore (clone) ─► Arc<RwLock<HashMap>>           │
//! │  handler C ─┘                                                          │
//! │                                                                         │
//! │  put()            write lock, insert one whole record                  │
//! │  points()/get()   read lock, copy out                                  │
//! │                                                                         │
//! │  Ids are fresh UUIDs, so two writers never target the same key and    │
//! │  no per-key locking is needed.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no update or delete: a receipt's points are fixed at acceptance.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use receipt_core::{Receipt, ReceiptId, ScoredReceipt};
use tokio::sync::RwLock;
use tracing::debug;

/// Shared handle to the receipt map.
///
/// Cloning is cheap and every clone sees the same receipts.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a validated receipt with its points under a fresh id.
    ///
    /// ## Returns
    /// The generated id. Ids are never reused.
    pub async fn put(&self, receipt: Receipt, points: i64) -> ReceiptId {
        let id = ReceiptId::generate();
        let scored = ScoredReceipt {
            id: id.clone(),
            receipt,
            points,
            accepted_at: Utc::now(),
        };

        let mut receipts = self.receipts.write().await;
        receipts.insert(id.clone(), scored);

        debug!(id = %id, points = points, stored = receipts.len(), "Receipt stored");
        id
    }

    /// Returns the points recorded for `id`, or `None` if it was never issued.
    pub async fn points(&self, id: &ReceiptId) -> Option<i64> {
        self.receipts.read().await.get(id).map(|r| r.points)
    }

    /// Returns the full stored record for `id`.
    pub async fn get(&self, id: &ReceiptId) -> Option<ScoredReceipt> {
        self.receipts.read().await.get(id).cloned()
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use receipt_core::{Item, Money};
    use std::collections::HashSet;

    fn sample_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 20).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0).unwrap(),
            total: Money::from_cents(900),
            items: vec![Item {
                short_description: "Gatorade".to_string(),
                price: Money::from_cents(225),
            }],
        }
    }

    #[tokio::test]
    async fn test_put_then_points_round_trip() {
        let store = ReceiptStore::new();
        assert!(store.is_empty().await);

        let id = store.put(sample_receipt(), 109).await;

        assert_eq!(store.points(&id).await, Some(109));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_returns_full_record() {
        let store = ReceiptStore::new();
        let id = store.put(sample_receipt(), 109).await;

        let scored = store.get(&id).await.unwrap();
        assert_eq!(scored.id, id);
        assert_eq!(scored.points, 109);
        assert_eq!(scored.receipt, sample_receipt());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        store.put(sample_receipt(), 109).await;

        let unknown = ReceiptId::from("not-a-receipt");
        assert_eq!(store.points(&unknown).await, None);
        assert!(store.get(&unknown).await.is_none());
        assert_eq!(store.points(&ReceiptId::generate()).await, None);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = ReceiptStore::new();
        let mut ids = HashSet::new();
        for points in 0..100 {
            ids.insert(store.put(sample_receipt(), points).await);
        }
        assert_eq!(ids.len(), 100);
        assert_eq!(store.len().await, 100);
    }

    #[tokio::test]
    async fn test_clones_share_receipts() {
        let store = ReceiptStore::new();
        let handle = store.clone();

        let id = handle.put(sample_receipt(), 7).await;
        assert_eq!(store.points(&id).await, Some(7));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_and_reads() {
        let store = ReceiptStore::new();

        let tasks: Vec<_> = (0..50i64)
            .map(|points| {
                let store = store.clone();
                tokio::spawn(async move {
                    let id = store.put(sample_receipt(), points).await;
                    assert_eq!(store.points(&id).await, Some(points));
                    id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap());
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(store.len().await, 50);
    }
}
