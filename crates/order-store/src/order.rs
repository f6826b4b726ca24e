use common::OrderNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order that has not been persisted yet.
///
/// Carries everything except the store-assigned row id. Field values are
/// copied verbatim from the validated request; the store must not transform
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Order number generated by the placement service.
    pub order_number: OrderNumber,
    /// Product SKU being ordered.
    pub sku_code: String,
    /// Quantity ordered, always positive.
    pub quantity: i32,
    /// Unit price, if the caller supplied one. Arbitrary precision.
    pub price: Option<Decimal>,
}

/// A durably stored order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned unique row id.
    pub id: i64,
    pub order_number: OrderNumber,
    pub sku_code: String,
    pub quantity: i32,
    pub price: Option<Decimal>,
}

impl NewOrder {
    /// Attaches a store-assigned id, producing the persisted form.
    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            order_number: self.order_number,
            sku_code: self.sku_code,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
