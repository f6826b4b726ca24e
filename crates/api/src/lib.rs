//! HTTP API server for the order service.
//!
//! Exposes the order placement endpoint with structured logging (tracing)
//! and Prometheus metrics. The transport owns nothing but decoding,
//! dispatch, and error-to-status mapping; placement semantics live in the
//! domain crate.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::OrderPlacementService;
use inventory::InventoryGateway;
use messaging::EventPublisher;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, I, P>(state: Arc<AppState<S, I, P>>, metrics_handle: PrometheusHandle) -> Router
where
    S: OrderStore + 'static,
    I: InventoryGateway + 'static,
    P: EventPublisher + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/order", post(routes::orders::place::<S, I, P>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around an already-built placement service.
pub fn create_state<S, I, P>(
    placement: OrderPlacementService<S, I, P>,
    request_timeout: Option<std::time::Duration>,
) -> Arc<AppState<S, I, P>>
where
    S: OrderStore,
    I: InventoryGateway,
    P: EventPublisher,
{
    Arc::new(AppState {
        placement,
        request_timeout,
    })
}
