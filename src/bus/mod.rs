//! In-process publish/subscribe bus with typed topics.
//!
//! Components receive the bus as an `Arc<MessageBus>` from their container.
//! Every subscriber of a topic sees every message published after it
//! subscribed; publishing to a topic nobody listens on is not an error.

mod message_bus;
mod topic;

pub use message_bus::{MessageBus, Subscription, DEFAULT_CAPACITY};
pub use topic::{BoatMessageChannel, SelectionMessage, Topic};
