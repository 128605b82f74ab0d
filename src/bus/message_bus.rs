use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use super::topic::Topic;

/// Per-topic buffer size used when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 64;

/// Typed broadcast bus. Topic channels are created on first use.
pub struct MessageBus {
    capacity: usize,
    channels: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl MessageBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Publish a message; returns how many subscribers received it.
    pub fn publish<T: Topic>(&self, message: T::Message) -> usize {
        match self.sender::<T>().send(message) {
            Ok(delivered) => {
                tracing::debug!(topic = T::NAME, delivered, "Published message");
                delivered
            }
            Err(_) => {
                tracing::trace!(topic = T::NAME, "Published message with no subscribers");
                0
            }
        }
    }

    /// Subscribe to a topic. The subscription ends when the handle is dropped.
    pub fn subscribe<T: Topic>(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender::<T>().subscribe(),
            _topic: PhantomData,
        }
    }

    pub fn subscriber_count<T: Topic>(&self) -> usize {
        self.sender::<T>().receiver_count()
    }

    fn sender<T: Topic>(&self) -> broadcast::Sender<T::Message> {
        let mut channels = self.channels.lock();
        let id = TypeId::of::<T>();
        if let Some(sender) = channels
            .get(&id)
            .and_then(|channel| channel.downcast_ref::<broadcast::Sender<T::Message>>())
        {
            return sender.clone();
        }
        let (sender, _) = broadcast::channel(self.capacity);
        channels.insert(id, Box::new(sender.clone()));
        sender
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Receiving end of a topic.
pub struct Subscription<T: Topic> {
    receiver: broadcast::Receiver<T::Message>,
    _topic: PhantomData<T>,
}

impl<T: Topic> Subscription<T> {
    /// Wait for the next message. Returns `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<T::Message> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(topic = T::NAME, skipped, "Subscriber lagged behind");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next pending message without waiting.
    pub fn try_recv(&mut self) -> Option<T::Message> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(topic = T::NAME, skipped, "Subscriber lagged behind");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Drain everything pending and keep only the newest message.
    pub fn latest(&mut self) -> Option<T::Message> {
        let mut latest = None;
        while let Some(message) = self.try_recv() {
            latest = Some(message);
        }
        latest
    }
}
