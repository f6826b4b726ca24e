use common::OrderNumber;
use serde::{Deserialize, Serialize};

use super::CustomerDetails;

/// Topic the placement event is published to.
pub const ORDER_PLACED_TOPIC: &str = "order-placed-topic";

/// Event announcing that an order was durably placed.
///
/// Constructed only after the order row is committed; carries the customer
/// contact details verbatim for downstream notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlacedEvent {
    pub order_number: OrderNumber,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl OrderPlacedEvent {
    /// Builds the event for a persisted order.
    pub fn new(order_number: OrderNumber, customer: &CustomerDetails) -> Self {
        Self {
            order_number,
            email: customer.email.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
        }
    }
}
