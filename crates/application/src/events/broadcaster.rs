//! In-process publish/subscribe for auth state changes
//!
//! UI regions that are not descendants of the session owner (a navigation
//! bar, a sidebar badge) subscribe here and re-render from the payload.
//! Delivery is synchronous and in registration order, to the subscribers
//! registered at dispatch time; there is no replay for late subscribers
//! and no delivery across processes.

use std::sync::{Arc, Mutex, PoisonError};

use keystone_domain::{generate_id, AuthStateChanged};

type Handler = Arc<dyn Fn(&AuthStateChanged) + Send + Sync>;

/// Handle returned by [`AuthEventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionId(String);

struct Subscriber {
    id: SubscriptionId,
    handler: Handler,
}

/// Process-wide broadcast channel for [`AuthStateChanged`] events.
///
/// The channel carries the single fixed event
/// [`keystone_domain::AUTH_STATE_CHANGED`]; subscribing means subscribing
/// to that event.
#[derive(Default)]
pub struct AuthEventBus {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl AuthEventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every subsequent [`AuthEventBus::emit`].
    pub fn subscribe(
        &self,
        handler: impl Fn(&AuthStateChanged) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(generate_id());
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.push(Subscriber {
            id: id.clone(),
            handler: Arc::new(handler),
        });
        id
    }

    /// Removes the subscription with the given handle. Unknown handles are
    /// ignored.
    pub fn unsubscribe(&self, id: &SubscriptionId) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|s| &s.id != id);
    }

    /// Delivers `event` to every subscriber registered right now, in
    /// registration order.
    ///
    /// Handlers run outside the internal lock, so a handler may subscribe
    /// or unsubscribe; such changes take effect from the next emit.
    pub fn emit(&self, event: &AuthStateChanged) {
        let handlers: Vec<Handler> = {
            let subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.iter().map(|s| Arc::clone(&s.handler)).collect()
        };
        for handler in handlers {
            (handler.as_ref())(event);
        }
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for AuthEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthEventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use keystone_domain::{UserProfile, UserRole};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn student_event() -> AuthStateChanged {
        AuthStateChanged::authenticated(&UserProfile::new("u1", "s@x.com", UserRole::Student))
    }

    #[test]
    fn test_emit_reaches_every_subscriber_in_order() {
        let bus = AuthEventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(move |_| seen.lock().unwrap().push(tag));
        }

        bus.emit(&student_event());
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = AuthEventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(&student_event());
        bus.unsubscribe(&id);
        bus.emit(&student_event());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let bus = AuthEventBus::new();
        bus.emit(&student_event());

        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_may_subscribe_during_emit() {
        let bus = Arc::new(AuthEventBus::new());
        let count = Arc::new(AtomicUsize::new(0));

        let bus_inner = Arc::clone(&bus);
        let count_inner = Arc::clone(&count);
        bus.subscribe(move |_| {
            let counter = Arc::clone(&count_inner);
            bus_inner.subscribe(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        // The subscription added mid-emit only sees the next emit.
        bus.emit(&student_event());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        bus.emit(&student_event());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_payload_passes_through() {
        let bus = AuthEventBus::new();
        let seen = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&seen);
        bus.subscribe(move |event| {
            *sink.lock().unwrap() = Some(event.clone());
        });

        bus.emit(&AuthStateChanged::unauthenticated());
        let event = seen.lock().unwrap().clone().unwrap();
        assert!(!event.is_authenticated);
        assert!(event.user.is_none());
    }
}
