use async_trait::async_trait;

use crate::{NewOrder, Order, Result};

/// Core trait for order store implementations.
///
/// The store owns id assignment and write isolation; concurrent saves from
/// independent placements must not interfere with each other. All
/// implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order and returns the stored row with its assigned id.
    ///
    /// The write is atomic: on error nothing was committed.
    async fn save(&self, order: NewOrder) -> Result<Order>;
}
