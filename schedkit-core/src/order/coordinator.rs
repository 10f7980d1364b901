//! Reorder coordinator.
//!
//! Two-phase reorder protocol: compute the new order, write it to the
//! list cache optimistically, then persist the full id sequence. When
//! the store rejects the order, the cache entry is invalidated and
//! refetched so the server's order wins; the failure itself is only
//! logged, never surfaced as a blocking error.

use tokio::sync::Mutex;

use crate::error::{SchedKitError, SchedKitResult};
use crate::order::{ItemId, MoveDirection, OrderedItem, move_item};

/// Order persistence endpoint. Accepts the full new id sequence for a
/// group; the order of `ids` is the order, there is no position field.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    async fn persist_order(&self, group: &str, ids: &[ItemId]) -> SchedKitResult<()>;
}

/// Cached view of the ordered lists, keyed by group.
#[allow(async_fn_in_trait)]
pub trait ListCache {
    async fn read(&self, group: &str) -> Option<Vec<OrderedItem>>;
    /// Optimistic write: replaces the cached order before the store
    /// confirms it.
    async fn write(&self, group: &str, items: Vec<OrderedItem>);
    /// Drop the cached entry and refetch the authoritative order from
    /// the source of truth.
    async fn invalidate_and_refetch(&self, group: &str) -> SchedKitResult<Vec<OrderedItem>>;
}

/// Outcome of a reorder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The store accepted the new order.
    Persisted { order: Vec<ItemId> },
    /// The store rejected it; `order` is the refetched authoritative
    /// sequence now in the cache.
    Reverted { order: Vec<ItemId> },
}

impl ReorderOutcome {
    pub fn order(&self) -> &[ItemId] {
        match self {
            ReorderOutcome::Persisted { order } | ReorderOutcome::Reverted { order } => order,
        }
    }
}

/// Coordinates single-position moves against a cache and a store.
///
/// In-flight reorders are serialized: a second move waits for the
/// first to settle, so two moves can never commit conflicting payloads
/// from the same base order.
pub struct ReorderCoordinator<C, S> {
    cache: C,
    store: S,
    in_flight: Mutex<()>,
}

impl<C: ListCache, S: OrderStore> ReorderCoordinator<C, S> {
    pub fn new(cache: C, store: S) -> Self {
        ReorderCoordinator {
            cache,
            store,
            in_flight: Mutex::new(()),
        }
    }

    /// Move the item at `index` one position in `direction` and persist
    /// the resulting order.
    pub async fn move_item(
        &self,
        group: &str,
        index: usize,
        direction: MoveDirection,
    ) -> SchedKitResult<ReorderOutcome> {
        let _guard = self.in_flight.lock().await;

        let items = self.cache.read(group).await.ok_or_else(|| {
            SchedKitError::Cache(format!("no cached list for group '{group}'"))
        })?;

        let new_items = move_item(&items, index, direction);
        let ids: Vec<ItemId> = new_items.iter().map(|item| item.id).collect();

        // Phase 1: optimistic cache write
        self.cache.write(group, new_items).await;

        // Phase 2: persist, or roll back to the server's order
        match self.store.persist_order(group, &ids).await {
            Ok(()) => Ok(ReorderOutcome::Persisted { order: ids }),
            Err(err) => {
                log::warn!("order persistence failed for group '{group}': {err}");
                let authoritative = self.cache.invalidate_and_refetch(group).await?;
                Ok(ReorderOutcome::Reverted {
                    order: authoritative.iter().map(|item| item.id).collect(),
                })
            }
        }
    }
}
