//! Topic-based event bus for runtime events.
//!
//! Each topic owns a broadcast channel, so subscribers only receive the
//! events they care about. Sends with no live subscriber are dropped.
use tokio::sync::broadcast;

use super::types::{Event, Topic};

/// Event bus that routes events to topic-specific channels
#[derive(Clone, Debug)]
pub struct EventBus {
    actions: broadcast::Sender<Event>,
    system: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let (actions, _) = broadcast::channel(capacity);
        let (system, _) = broadcast::channel(capacity);
        Self { actions, system }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Actions => &self.actions,
            Topic::System => &self.system,
        }
    }

    /// Publish an event on the topic of its source
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        // No subscribers is fine; the event is simply dropped.
        let _ = self.sender(topic).send(event);
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Number of live subscribers on a topic
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
