//! Order placement orchestration.

use std::time::Duration;

use common::OrderNumber;
use inventory::InventoryGateway;
use messaging::EventPublisher;
use order_store::{NewOrder, Order, OrderStore};
use tokio::time::Instant;

use crate::error::PlacementError;

use super::{CustomerDetails, ORDER_PLACED_TOPIC, OrderPlacedEvent, OrderRequest};

/// Drives the placement of a single order: validate the request, confirm
/// stock with the inventory gateway, persist the order, then announce it.
///
/// The three collaborators are injected at construction and called strictly
/// in sequence; the service itself holds no mutable state, so one instance
/// can serve any number of concurrent placements.
pub struct OrderPlacementService<S, I, P>
where
    S: OrderStore,
    I: InventoryGateway,
    P: EventPublisher,
{
    store: S,
    inventory: I,
    publisher: P,
}

impl<S, I, P> OrderPlacementService<S, I, P>
where
    S: OrderStore,
    I: InventoryGateway,
    P: EventPublisher,
{
    /// Creates a new placement service over the given collaborators.
    pub fn new(store: S, inventory: I, publisher: P) -> Self {
        Self {
            store,
            inventory,
            publisher,
        }
    }

    /// Places an order.
    ///
    /// Succeeds once the order is durably stored. A failed event publish is
    /// logged and swallowed; it does not fail the placement.
    #[tracing::instrument(skip(self, request))]
    pub async fn place_order(&self, request: OrderRequest) -> Result<(), PlacementError> {
        self.place(request, None).await
    }

    /// Places an order under a caller-supplied deadline.
    ///
    /// The deadline covers all three downstream calls. Expiry before the
    /// order is persisted fails with [`PlacementError::Cancelled`]; expiry
    /// during the publish step is treated like any other publish failure
    /// and the placement still succeeds.
    #[tracing::instrument(skip(self, request))]
    pub async fn place_order_with_timeout(
        &self,
        request: OrderRequest,
        timeout: Duration,
    ) -> Result<(), PlacementError> {
        self.place(request, Some(Instant::now() + timeout)).await
    }

    async fn place(
        &self,
        request: OrderRequest,
        deadline: Option<Instant>,
    ) -> Result<(), PlacementError> {
        metrics::counter!("order_placements_total").increment(1);
        let start = std::time::Instant::now();

        let persist = self.check_and_persist(&request);
        let order = match deadline {
            Some(at) => tokio::time::timeout_at(at, persist)
                .await
                .map_err(|_| PlacementError::Cancelled)??,
            None => persist.await?,
        };

        // The order is durable from here on; nothing below may fail the call.
        let publish = self.publish_placed_event(&order, &request.customer);
        match deadline {
            Some(at) => {
                if tokio::time::timeout_at(at, publish).await.is_err() {
                    tracing::warn!(
                        order_number = %order.order_number,
                        "deadline expired during event publish; order remains placed"
                    );
                }
            }
            None => publish.await,
        }

        metrics::histogram!("order_placement_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        Ok(())
    }

    async fn check_and_persist(&self, request: &OrderRequest) -> Result<Order, PlacementError> {
        let (sku_code, quantity) = validate(request)?;

        if !self.inventory.is_in_stock(&sku_code, quantity).await? {
            metrics::counter!("order_placements_out_of_stock_total").increment(1);
            return Err(PlacementError::OutOfStock { sku_code });
        }

        let order = self
            .store
            .save(NewOrder {
                order_number: OrderNumber::new(),
                sku_code,
                quantity,
                price: request.price,
            })
            .await?;

        tracing::info!(
            order_number = %order.order_number,
            sku_code = %order.sku_code,
            quantity = order.quantity,
            "order placed"
        );
        Ok(order)
    }

    async fn publish_placed_event(&self, order: &Order, customer: &CustomerDetails) {
        let event = OrderPlacedEvent::new(order.order_number, customer);
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    order_number = %order.order_number,
                    "failed to serialize OrderPlacedEvent"
                );
                return;
            }
        };

        let key = order.order_number.to_string();
        if let Err(e) = self
            .publisher
            .publish(ORDER_PLACED_TOPIC, &key, &payload)
            .await
        {
            // Swallowed: the order is already durable.
            tracing::warn!(
                error = %e,
                order_number = %order.order_number,
                "failed to publish OrderPlacedEvent"
            );
        }
    }
}

/// Precondition checks, in order, short-circuiting on the first failure.
fn validate(request: &OrderRequest) -> Result<(String, i32), PlacementError> {
    let sku_code = match request.sku_code.as_deref() {
        None => return Err(invalid("sku_code is required")),
        Some(sku) if sku.is_empty() => return Err(invalid("sku_code must not be empty")),
        Some(sku) => sku.to_string(),
    };

    let Some(quantity) = request.quantity else {
        return Err(invalid("quantity is required"));
    };
    if quantity <= 0 {
        return Err(invalid("quantity must be greater than 0"));
    }

    Ok((sku_code, quantity))
}

fn invalid(reason: &str) -> PlacementError {
    PlacementError::InvalidRequest {
        reason: reason.to_string(),
    }
}
