use async_trait::async_trait;

use crate::PublishError;

/// Best-effort delivery of a serialized event to a named topic.
///
/// Implementations must be safe for concurrent publishes. The key selects
/// the partition; events for the same key are delivered in order.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes `payload` to `topic`, keyed by `key`.
    async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), PublishError>;
}
