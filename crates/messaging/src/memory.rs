use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{PublishError, publisher::EventPublisher};

/// A message captured by the in-memory publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub topic: String,
    pub key: String,
    pub payload: String,
}

#[derive(Debug, Default)]
struct InMemoryState {
    messages: Vec<PublishedMessage>,
    attempts: u32,
    fail_on_publish: bool,
}

/// In-memory event publisher for testing.
///
/// Records every accepted message and counts every attempt, including
/// failed ones. Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryEventPublisher {
    /// Creates a new publisher with no recorded messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail on subsequent publishes.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns all messages accepted so far, in publish order.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.state.read().unwrap().messages.clone()
    }

    /// Returns the number of publish attempts, successful or not.
    pub fn attempt_count(&self) -> u32 {
        self.state.read().unwrap().attempts
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<(), PublishError> {
        let mut state = self.state.write().unwrap();
        state.attempts += 1;

        if state.fail_on_publish {
            return Err(PublishError::Unavailable(
                "simulated broker failure".to_string(),
            ));
        }

        state.messages.push(PublishedMessage {
            topic: topic.to_string(),
            key: key.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }
}
