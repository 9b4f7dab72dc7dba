//! Generated operation modules for the relay messaging service, plus the types consumers
//! work with once an operation's response has been decoded.

mod queries;
pub mod subscription;
mod transformers;
mod types;

pub use queries::on_message_created::{on_message_created, OnMessageCreated};
pub use subscription::{MessageCreatedDispatcher, RelayEventSubscriber};
pub use types::RelayMessage;

pub use on_message_created::Direction;
