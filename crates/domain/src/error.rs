//! Placement error taxonomy.

use inventory::InventoryError;
use order_store::OrderStoreError;
use thiserror::Error;

/// Errors that can occur while placing an order.
///
/// Every variant is produced before the order is persisted; a request that
/// reaches durable storage always reports success. Event-publish failures
/// are therefore absent here.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// The request failed a precondition check. Nothing was called
    /// downstream; the caller can correct and resubmit.
    #[error("Invalid order request: {reason}")]
    InvalidRequest { reason: String },

    /// The inventory gateway could not be reached for a definitive answer.
    /// Retryable.
    #[error("Inventory check failed: {0}")]
    InventoryUnavailable(#[from] InventoryError),

    /// The inventory gateway answered: the product is not available in the
    /// requested quantity.
    #[error("Product with SKU code {sku_code} is not in stock")]
    OutOfStock { sku_code: String },

    /// The order store rejected the write. Nothing was committed; retryable.
    #[error("Order could not be persisted: {0}")]
    PersistenceFailed(#[from] OrderStoreError),

    /// The caller-supplied deadline expired before the order was persisted.
    #[error("Order placement cancelled before completion")]
    Cancelled,
}
