//! Event publishing boundary.
//!
//! Defines the [`EventPublisher`] trait used to announce domain events on a
//! named topic, the Kafka-backed production implementation, and an
//! in-memory implementation for tests. Delivery is at-least-once and owned
//! by the broker once a publish is accepted.

pub mod error;
pub mod kafka;
pub mod memory;
pub mod publisher;

pub use error::PublishError;
pub use kafka::KafkaEventPublisher;
pub use memory::{InMemoryEventPublisher, PublishedMessage};
pub use publisher::EventPublisher;
