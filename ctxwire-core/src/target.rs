//! The target seam.

use crate::event::TriggerHandler;
use std::fmt;

/// Stable identity of a target element.
///
/// Keys the connector's side table, so binding state never has to live on the
/// host object itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// The UI element a context-menu trigger is attached to.
///
/// Implemented by the host. The connector only ever registers and removes
/// listeners and dispatches payload-free notifications; it never mutates the
/// element beyond that.
pub trait Target: Send + Sync {
    /// Stable identity for this element, used to key connector state.
    fn id(&self) -> TargetId;

    /// Registers a native listener for `event_type`.
    fn add_event_listener(&self, event_type: &str, handler: TriggerHandler);

    /// Removes the native listener for `event_type`, if any. Removing an
    /// event type that was never registered is a no-op.
    fn remove_event_listener(&self, event_type: &str);

    /// Dispatches a payload-free notification of the given type on this
    /// element, for the host to observe.
    fn dispatch_event(&self, event_type: &str);
}
