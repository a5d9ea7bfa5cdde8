//! In-process event bus
//!
//! Decouples emitters (stat cards, alert panels) from the controllers that
//! react to them. Leaf components publish a [`Topic`]; every handler
//! registered for that topic runs synchronously, in registration order.
//!
//! # Delivery
//!
//! - Publishing with no subscribers drops the event. Nothing is queued.
//! - A handler that panics is isolated: the panic is logged and delivery
//!   continues with the next handler.
//! - Handlers run outside the registry lock, so they may publish, subscribe
//!   or release subscriptions. A publish delivers to the handler list as it
//!   was when the publish started.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use libwardview::bus::EventBus;
//! use libwardview::topic::Topic;
//!
//! let bus = EventBus::new();
//! let clicks = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&clicks);
//! let subscription = bus.subscribe(Topic::ShowAiAgent, move |_event| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! bus.publish(Topic::ShowAiAgent);
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//!
//! // Releasing the subscription removes exactly that handler
//! drop(subscription);
//! bus.publish(Topic::ShowAiAgent);
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::topic::Topic;

thread_local! {
    static HANDLER_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Whether the current thread is inside a bus handler
///
/// A panic hook can check this to tell a panic the bus will isolate from
/// one that unwinds the program; hooks run before `catch_unwind` returns.
pub fn in_handler() -> bool {
    HANDLER_DEPTH.with(|depth| depth.get() > 0)
}

/// Marks the current thread as inside a handler until dropped
struct HandlerScope;

impl HandlerScope {
    fn enter() -> Self {
        HANDLER_DEPTH.with(|depth| depth.set(depth.get() + 1));
        HandlerScope
    }
}

impl Drop for HandlerScope {
    fn drop(&mut self) {
        HANDLER_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Handler invoked for each published event
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// A published notification
///
/// Routing topics carry no payload. The payload slot exists for producers
/// that attach context for their own listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub topic: Topic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Event {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            payload: None,
        }
    }

    pub fn with_payload(topic: Topic, payload: serde_json::Value) -> Self {
        Self {
            topic,
            payload: Some(payload),
        }
    }
}

/// Outcome of a single publish call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Handlers that ran to completion
    pub delivered: usize,
    /// Handlers that panicked
    pub failed: usize,
}

impl PublishReport {
    pub fn handlers(&self) -> usize {
        self.delivered + self.failed
    }
}

struct Registration {
    id: u64,
    topic: Topic,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    registrations: Vec<Registration>,
}

/// Publish/subscribe channel keyed by [`Topic`]
///
/// Cloning the bus yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create an empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `topic`
    ///
    /// The returned [`Subscription`] removes exactly this handler when it is
    /// cancelled or dropped.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.registrations.push(Registration {
            id,
            topic,
            handler: Arc::new(handler),
        });
        drop(registry);

        tracing::trace!(topic = %topic, subscription = id, "subscribed");

        Subscription {
            id,
            topic,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Remove the handler behind `subscription`
    ///
    /// Idempotent: returns `false` when the handler was already removed.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        subscription.cancel()
    }

    /// Publish `topic` with no payload
    pub fn publish(&self, topic: Topic) -> PublishReport {
        self.dispatch(Event::new(topic))
    }

    /// Publish `topic` carrying `payload`
    pub fn publish_with(&self, topic: Topic, payload: serde_json::Value) -> PublishReport {
        self.dispatch(Event::with_payload(topic, payload))
    }

    /// Publish by wire name
    ///
    /// Unknown names are ignored so newer producers can emit topics this
    /// build does not know about.
    pub fn publish_named(&self, name: &str, payload: Option<serde_json::Value>) -> PublishReport {
        match name.parse::<Topic>() {
            Ok(topic) => self.dispatch(Event { topic, payload }),
            Err(_) => {
                tracing::debug!(topic = name, "ignoring unknown topic");
                PublishReport::default()
            }
        }
    }

    /// Number of handlers currently registered for `topic`
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.lock()
            .registrations
            .iter()
            .filter(|registration| registration.topic == topic)
            .count()
    }

    fn dispatch(&self, event: Event) -> PublishReport {
        let handlers: Vec<(u64, Handler)> = self
            .lock()
            .registrations
            .iter()
            .filter(|registration| registration.topic == event.topic)
            .map(|registration| (registration.id, Arc::clone(&registration.handler)))
            .collect();

        let mut report = PublishReport::default();
        for (id, handler) in handlers {
            let outcome = {
                let _scope = HandlerScope::enter();
                panic::catch_unwind(AssertUnwindSafe(|| handler(&event)))
            };
            match outcome {
                Ok(()) => report.delivered += 1,
                Err(cause) => {
                    report.failed += 1;
                    tracing::error!(
                        topic = %event.topic,
                        subscription = id,
                        cause = %panic_message(cause.as_ref()),
                        "event handler panicked"
                    );
                }
            }
        }

        tracing::debug!(
            topic = %event.topic,
            delivered = report.delivered,
            failed = report.failed,
            "published"
        );
        report
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.lock().registrations.len())
            .finish()
    }
}

/// Capability to remove one registered handler
///
/// Holds only a weak reference, so it never keeps the bus alive. Dropping it
/// releases the handler.
#[must_use = "dropping a Subscription immediately removes its handler"]
pub struct Subscription {
    id: u64,
    topic: Topic,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the handler; `false` if it was already gone
    pub fn cancel(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut guard = registry.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = guard
            .registrations
            .iter()
            .position(|registration| registration.id == self.id)
            .map(|index| guard.registrations.remove(index));
        drop(guard);

        // The handler may own other subscriptions; drop it outside the lock
        let Some(registration) = removed else {
            return false;
        };
        drop(registration);

        tracing::trace!(topic = %self.topic, subscription = self.id, "unsubscribed");
        true
    }

    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .registrations
                .iter()
                .any(|registration| registration.id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
