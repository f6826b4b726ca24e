//! Order placement endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{OrderPlacementService, OrderRequest};
use inventory::InventoryGateway;
use messaging::EventPublisher;
use order_store::OrderStore;
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S, I, P>
where
    S: OrderStore,
    I: InventoryGateway,
    P: EventPublisher,
{
    pub placement: OrderPlacementService<S, I, P>,
    /// Per-request deadline covering all downstream calls, if configured.
    pub request_timeout: Option<Duration>,
}

#[derive(Serialize)]
pub struct OrderPlacedResponse {
    pub message: &'static str,
}

/// POST /api/order — place a new order.
///
/// Returns 201 once the order is durably stored. The typed placement
/// errors map to statuses in [`crate::error`].
#[tracing::instrument(skip(state, request))]
pub async fn place<S, I, P>(
    State(state): State<Arc<AppState<S, I, P>>>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderPlacedResponse>), ApiError>
where
    S: OrderStore + 'static,
    I: InventoryGateway + 'static,
    P: EventPublisher + 'static,
{
    match state.request_timeout {
        Some(timeout) => {
            state
                .placement
                .place_order_with_timeout(request, timeout)
                .await?
        }
        None => state.placement.place_order(request).await?,
    }

    Ok((
        StatusCode::CREATED,
        Json(OrderPlacedResponse {
            message: "Order placed successfully",
        }),
    ))
}
