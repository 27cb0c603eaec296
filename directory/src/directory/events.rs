use flume::{Receiver, Sender};

use crate::model::event::DirectoryEvent;

/// Fan-out of `DirectoryEvent`s. Every subscriber gets every event published
/// after it subscribed; dropped receivers are pruned on the next publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<DirectoryEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<DirectoryEvent> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    pub fn publish(&mut self, event: DirectoryEvent) {
        log::debug!("Event: {:?}", event);

        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
