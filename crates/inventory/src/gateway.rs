use async_trait::async_trait;

use crate::InventoryError;

/// Boolean stock oracle backed by the external inventory service.
///
/// A `false` answer is definitive (the product is not available in the
/// requested quantity); failures to reach the service surface as errors so
/// callers can distinguish "no stock" from "no answer".
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// Returns whether `sku_code` is available in at least `quantity` units.
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, InventoryError>;
}
