//! Routing of decoded `OnMessageCreated` events to the subscriber for each postbox.

use crate::{
    on_message_created::{Direction, ResponseData},
    types::RelayMessage,
    OnMessageCreated
};
use relay::{
    subscription::{ConnectionState, SubscriptionManager},
    BindingError, Operation, QueryError
};
use std::{convert::TryFrom, sync::Arc};
use tracing::{debug, error, warn};

/// Receives messages and connection changes for one connection.
pub trait RelayEventSubscriber: Send + Sync {
    fn message_incoming(&self, message: RelayMessage);

    fn connection_status_changed(&self, state: ConnectionState);
}

/// Sits between a transport and the subscribers, one per connection id.
///
/// The transport runs the operation returned by [subscribe](#method.subscribe) and calls back
/// into the dispatcher with the same connection id for every response, failure and completion.
#[derive(Default)]
pub struct MessageCreatedDispatcher {
    subscribers: SubscriptionManager<dyn RelayEventSubscriber>
}

impl MessageCreatedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` for `connection_id`, replacing any previous one, and returns the
    /// operation for incoming messages on that connection.
    pub fn subscribe<C: Into<String>>(
        &self,
        connection_id: C,
        subscriber: Arc<dyn RelayEventSubscriber>
    ) -> Result<Operation<OnMessageCreated>, BindingError> {
        let connection_id = connection_id.into();
        let operation = OnMessageCreated::operation(connection_id.as_str(), Direction::Inbound)?;
        self.subscribers.replace_subscriber(connection_id, subscriber);
        Ok(operation)
    }

    /// Forwards a decoded response. Keepalives without an event are dropped.
    pub fn on_response(&self, connection_id: &str, data: ResponseData) {
        let event = match data.on_message_created {
            Some(event) => event,
            None => {
                debug!(connection_id, "empty OnMessageCreated response");
                return;
            }
        };

        match RelayMessage::try_from(event) {
            Ok(message) => {
                if !self
                    .subscribers
                    .notify(connection_id, |s| s.message_incoming(message))
                {
                    debug!(connection_id, "no subscriber for message");
                }
            }
            Err(e) => error!(connection_id, error = %e, "failed to transform OnMessageCreated event")
        }
    }

    /// The transport lost the subscription. The subscriber is told and unregistered.
    pub fn on_failure(&self, connection_id: &str, err: &QueryError) {
        warn!(connection_id, error = %err, "OnMessageCreated subscription failed");
        self.subscribers.connection_status_changed(
            connection_id,
            ConnectionState::Disconnected,
            false,
            |s, state| s.connection_status_changed(state)
        );
    }

    /// The server ended the subscription.
    pub fn on_completed(&self, connection_id: &str) {
        self.subscribers.connection_status_changed(
            connection_id,
            ConnectionState::Disconnected,
            true,
            |s, state| s.connection_status_changed(state)
        );
    }

    pub fn unsubscribe(&self, connection_id: &str) {
        self.subscribers.remove_subscriber(connection_id);
    }

    pub fn unsubscribe_all(&self) {
        self.subscribers.remove_all_subscribers();
    }

    pub fn is_subscribed(&self, connection_id: &str) -> bool {
        self.subscribers.contains(connection_id)
    }
}
