//! Order placement domain.
//!
//! This crate provides the order placement orchestration:
//! - Request and event value objects for placing an order
//! - PlacementError taxonomy returned to the transport layer
//! - OrderPlacementService driving the stock-check → persist → publish flow

pub mod error;
pub mod order;

pub use error::PlacementError;
pub use order::{
    CustomerDetails, ORDER_PLACED_TOPIC, OrderPlacedEvent, OrderPlacementService, OrderRequest,
};
