//! Fan-out of decoded subscription events to registered subscribers.
//!
//! This knows nothing about how events arrive. A transport decodes each message with the
//! operation binding and hands the result to whatever dispatcher owns a
//! `SubscriptionManager`, which forwards it to the subscriber registered for that id.

use parking_lot::RwLock;
use std::{collections::HashMap, fmt, sync::Arc};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    /// Connected and receiving updates.
    Connected,
    /// No further updates will be delivered until the subscriber registers again.
    Disconnected
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Disconnected => write!(f, "disconnected")
        }
    }
}

/// Subscribers keyed by id, one per id.
///
/// Callbacks are always invoked on a snapshot taken under the lock and run after it has been
/// released, so a subscriber may call back into the manager.
pub struct SubscriptionManager<S: ?Sized> {
    subscribers: RwLock<HashMap<String, Arc<S>>>
}

impl<S: ?Sized> Default for SubscriptionManager<S> {
    fn default() -> Self {
        SubscriptionManager {
            subscribers: RwLock::new(HashMap::new())
        }
    }
}

impl<S: ?Sized> SubscriptionManager<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the subscriber for `id`, returning the one it replaced.
    pub fn replace_subscriber<I: Into<String>>(&self, id: I, subscriber: Arc<S>) -> Option<Arc<S>> {
        let id = id.into();
        debug!(id = %id, "registering subscriber");
        self.subscribers.write().insert(id, subscriber)
    }

    pub fn remove_subscriber(&self, id: &str) -> Option<Arc<S>> {
        let removed = self.subscribers.write().remove(id);
        if removed.is_some() {
            debug!(id = %id, "removed subscriber");
        }
        removed
    }

    pub fn remove_all_subscribers(&self) {
        let mut subscribers = self.subscribers.write();
        debug!(count = subscribers.len(), "removing all subscribers");
        subscribers.clear();
    }

    pub fn subscriber(&self, id: &str) -> Option<Arc<S>> {
        self.subscribers.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.subscribers.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }

    /// Calls `f` with the subscriber registered for `id`, if any. Returns whether one was notified.
    pub fn notify<F: FnOnce(&S)>(&self, id: &str, f: F) -> bool {
        match self.subscriber(id) {
            Some(subscriber) => {
                f(&*subscriber);
                true
            }
            None => false
        }
    }

    /// Reports a change in connection state to the subscriber for `id`.
    ///
    /// An unexpected disconnect also unregisters the subscriber: the stream behind it is gone
    /// and it has to subscribe again. Expected disconnects follow an explicit unsubscribe,
    /// which has already cleaned up.
    pub fn connection_status_changed<F: FnOnce(&S, ConnectionState)>(
        &self,
        id: &str,
        state: ConnectionState,
        expected: bool,
        f: F
    ) -> bool {
        let subscriber = if !expected && state == ConnectionState::Disconnected {
            warn!(id = %id, "subscription disconnected unexpectedly");
            self.subscribers.write().remove(id)
        } else {
            self.subscriber(id)
        };

        match subscriber {
            Some(subscriber) => {
                f(&*subscriber, state);
                true
            }
            None => false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    trait Listener: Send + Sync {
        fn event(&self, event: String);
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>
    }

    impl Listener for Recorder {
        fn event(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[test]
    fn notifies_only_the_matching_subscriber() {
        let manager = SubscriptionManager::<dyn Listener>::new();
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        manager.replace_subscriber("a", a.clone());
        manager.replace_subscriber("b", b.clone());

        assert!(manager.notify("a", |s| s.event("hello".to_string())));
        assert!(!manager.notify("c", |s| s.event("nobody".to_string())));

        assert_eq!(a.events(), vec!["hello".to_string()]);
        assert!(b.events().is_empty());
    }

    #[test]
    fn replace_returns_previous_subscriber() {
        let manager = SubscriptionManager::<dyn Listener>::new();
        assert!(manager
            .replace_subscriber("a", Arc::new(Recorder::default()))
            .is_none());
        assert!(manager
            .replace_subscriber("a", Arc::new(Recorder::default()))
            .is_some());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn unexpected_disconnect_unregisters() {
        let manager = SubscriptionManager::<dyn Listener>::new();
        let a = Arc::new(Recorder::default());
        manager.replace_subscriber("a", a.clone());

        let notified = manager.connection_status_changed(
            "a",
            ConnectionState::Disconnected,
            false,
            |s, state| s.event(state.to_string())
        );

        assert!(notified);
        assert_eq!(a.events(), vec!["disconnected".to_string()]);
        assert!(!manager.contains("a"));
    }

    #[test]
    fn expected_disconnect_keeps_registration() {
        let manager = SubscriptionManager::<dyn Listener>::new();
        manager.replace_subscriber("a", Arc::new(Recorder::default()));

        manager.connection_status_changed("a", ConnectionState::Disconnected, true, |_, _| ());

        assert!(manager.contains("a"));
    }

    #[test]
    fn callbacks_may_reenter_the_manager() {
        let manager = Arc::new(SubscriptionManager::<dyn Listener>::new());
        manager.replace_subscriber("a", Arc::new(Recorder::default()));

        let inner = manager.clone();
        manager.notify("a", move |_| {
            inner.remove_subscriber("a");
        });

        assert!(manager.is_empty());
    }

    #[test]
    fn remove_all_clears_every_subscriber() {
        let manager = SubscriptionManager::<dyn Listener>::new();
        manager.replace_subscriber("a", Arc::new(Recorder::default()));
        manager.replace_subscriber("b", Arc::new(Recorder::default()));

        manager.remove_all_subscribers();

        assert!(manager.is_empty());
        assert!(manager.remove_subscriber("a").is_none());
    }
}
