use thiserror::Error;

/// Errors that can occur when publishing an event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The Kafka producer reported a send failure.
    #[error("Kafka send error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The publisher was unreachable without a more specific cause.
    #[error("Event publisher unavailable: {0}")]
    Unavailable(String),
}
