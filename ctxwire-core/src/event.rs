//! Trigger events and the notification vocabulary.
//!
//! A [`TriggerEvent`] is a shared handle: cloning it clones the handle, not
//! the event, so the copy the binding stores and the copy the host synthesized
//! observe the same default-prevented / propagation-stopped flags.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The payload-free notification dispatched on the target right before the
/// menu is expected to open.
pub const BEFORE_OPEN_EVENT: &str = "context-menu-before-open";

/// The trigger event type a context menu binds by default.
pub const DEFAULT_OPEN_ON: &str = "contextmenu";

/// A handler invoked when a bound trigger event fires on a target.
pub type TriggerHandler = Arc<dyn Fn(TriggerEvent) + Send + Sync>;

/// The event that fired a bound trigger.
///
/// Mirrors the part of a UI event the connector needs: its type, and the two
/// flags the trigger handler flips before the menu opens.
#[derive(Clone)]
pub struct TriggerEvent {
    inner: Arc<Inner>,
}

struct Inner {
    event_type: String,
    default_prevented: AtomicBool,
    propagation_stopped: AtomicBool,
}

impl TriggerEvent {
    /// Creates a fresh event of the given type, with neither flag set.
    pub fn new(event_type: impl Into<String>) -> Self {
        TriggerEvent {
            inner: Arc::new(Inner {
                event_type: event_type.into(),
                default_prevented: AtomicBool::new(false),
                propagation_stopped: AtomicBool::new(false),
            }),
        }
    }

    /// The event type this event fired as.
    pub fn event_type(&self) -> &str {
        &self.inner.event_type
    }

    /// Suppresses the host's default action for this event.
    pub fn prevent_default(&self) {
        self.inner.default_prevented.store(true, Ordering::Release);
    }

    /// Whether the default action has been suppressed.
    pub fn default_prevented(&self) -> bool {
        self.inner.default_prevented.load(Ordering::Acquire)
    }

    /// Stops the event from propagating further through the host.
    pub fn stop_propagation(&self) {
        self.inner.propagation_stopped.store(true, Ordering::Release);
    }

    /// Whether propagation has been stopped.
    pub fn propagation_stopped(&self) -> bool {
        self.inner.propagation_stopped.load(Ordering::Acquire)
    }

    /// Whether two handles refer to the same underlying event.
    pub fn same_event(&self, other: &TriggerEvent) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerEvent")
            .field("event_type", &self.inner.event_type)
            .field("default_prevented", &self.default_prevented())
            .field("propagation_stopped", &self.propagation_stopped())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flags() {
        let event = TriggerEvent::new("click");
        let copy = event.clone();
        copy.prevent_default();
        copy.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
        assert!(event.same_event(&copy));
    }

    #[test]
    fn distinct_events_are_not_same() {
        let a = TriggerEvent::new("click");
        let b = TriggerEvent::new("click");
        assert!(!a.same_event(&b));
    }
}
