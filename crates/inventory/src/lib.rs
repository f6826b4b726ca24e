//! Inventory gateway boundary.
//!
//! The inventory service is the external authority on stock levels; this
//! crate defines the [`InventoryGateway`] trait the placement flow depends
//! on, the HTTP client used in production, and an in-memory implementation
//! for tests.

pub mod error;
pub mod gateway;
pub mod http;
pub mod memory;

pub use error::InventoryError;
pub use gateway::InventoryGateway;
pub use http::HttpInventoryGateway;
pub use memory::InMemoryInventoryGateway;
