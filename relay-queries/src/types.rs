use crate::on_message_created::Direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message delivered to a relay postbox, as handed to subscribers.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayMessage {
    pub message_id: String,
    /// The postbox the message was delivered to.
    pub connection_id: String,
    /// Opaque to the binding. Decryption is up to the consumer.
    pub cipher_text: String,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>
}
