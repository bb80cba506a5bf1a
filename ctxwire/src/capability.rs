//! Event-registration capabilities.
//!
//! Rather than probing the environment at every call, the host hands the
//! connector an explicit descriptor once, at construction: whether the native
//! listener path exists, and optionally a gesture registry for abstracted
//! pointer/touch types.

use crate::ready::ReadyGate;
use ctxwire_core::{Target, TriggerHandler};
use std::sync::{Arc, OnceLock};

/// Specialized registration for gesture event types.
///
/// Gestures are abstracted pointer/touch events that cannot be attached
/// through the native listener path. The host's gesture library implements
/// this seam; the connector asks it which types it recognizes and routes
/// registration accordingly.
pub trait GestureRegistry: Send + Sync {
    /// Whether `event_type` is a gesture this registry can attach.
    fn recognizes(&self, event_type: &str) -> bool;

    /// Attaches `handler` to `target` for the gesture `event_type`.
    fn add_listener(&self, target: &dyn Target, event_type: &str, handler: TriggerHandler);

    /// Detaches the handler for the gesture `event_type` from `target`.
    /// Removing a gesture that was never attached is a no-op.
    fn remove_listener(&self, target: &dyn Target, event_type: &str);
}

/// The capability set required for event registration.
///
/// Resolved once by the host and injected into
/// [`Connector::new`](crate::Connector::new). When neither the native path
/// nor a gesture registry is present, target initialization aborts.
#[derive(Clone)]
pub struct Capabilities {
    native_events: bool,
    gestures: Option<Arc<dyn GestureRegistry>>,
    ready: ReadyGate,
}

impl Capabilities {
    /// Capabilities with the native listener path and no gesture registry.
    pub fn native(ready: ReadyGate) -> Self {
        Capabilities {
            native_events: true,
            gestures: None,
            ready,
        }
    }

    /// Capabilities with no registration path at all.
    ///
    /// Targets initialized against this descriptor are left without binding
    /// state, matching a host whose helper libraries failed to load.
    pub fn unavailable(ready: ReadyGate) -> Self {
        Capabilities {
            native_events: false,
            gestures: None,
            ready,
        }
    }

    /// Adds a gesture registry to the descriptor.
    pub fn with_gestures(mut self, gestures: Arc<dyn GestureRegistry>) -> Self {
        self.gestures = Some(gestures);
        self
    }

    /// Whether any registration path is available.
    pub fn can_register(&self) -> bool {
        self.native_events || self.gestures.is_some()
    }

    /// The readiness gate registration waits on.
    pub fn ready(&self) -> &ReadyGate {
        &self.ready
    }

    /// The gesture registry, if one was injected.
    pub fn gestures(&self) -> Option<&Arc<dyn GestureRegistry>> {
        self.gestures.as_ref()
    }

    /// Whether `event_type` must be registered through the gesture path.
    pub(crate) fn is_gesture(&self, event_type: &str) -> bool {
        self.gestures
            .as_ref()
            .is_some_and(|gestures| gestures.recognizes(event_type))
    }

    /// The process-wide capability registry, created lazily on first need.
    ///
    /// Connectors constructed in different corners of the host can share one
    /// resolved descriptor instead of each probing the environment. The first
    /// caller's `init` wins; later initializers are ignored. There is no
    /// teardown: the registry lives for the process lifetime.
    pub fn shared_or_init(init: impl FnOnce() -> Capabilities) -> &'static Capabilities {
        static SHARED: OnceLock<Capabilities> = OnceLock::new();
        SHARED.get_or_init(init)
    }
}
