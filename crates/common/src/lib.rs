//! Shared types for the order service.

pub mod types;

pub use types::OrderNumber;
