use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    NewOrder, Order, OrderStoreError, Result,
    store::OrderStore,
};

#[derive(Debug, Default)]
struct InMemoryState {
    orders: Vec<Order>,
    next_id: i64,
    fail_on_save: bool,
}

/// In-memory order store for testing.
///
/// Assigns sequential ids and provides the same interface as the
/// PostgreSQL implementation. Cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the store to fail on subsequent save calls.
    pub async fn set_fail_on_save(&self, fail: bool) {
        self.state.write().await.fail_on_save = fail;
    }

    /// Returns the number of orders saved.
    pub async fn saved_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Returns a snapshot of all saved orders in insertion order.
    pub async fn orders(&self) -> Vec<Order> {
        self.state.read().await.orders.clone()
    }

    /// Clears all saved orders.
    pub async fn clear(&self) {
        self.state.write().await.orders.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order> {
        let mut state = self.state.write().await;

        if state.fail_on_save {
            return Err(OrderStoreError::Unavailable(
                "simulated store failure".to_string(),
            ));
        }

        if state
            .orders
            .iter()
            .any(|existing| existing.order_number == order.order_number)
        {
            return Err(OrderStoreError::DuplicateOrderNumber {
                order_number: order.order_number.to_string(),
            });
        }

        state.next_id += 1;
        let stored = order.into_order(state.next_id);
        state.orders.push(stored.clone());
        Ok(stored)
    }
}
