//! The connector and its per-target binding state machine.
//!
//! A [`Connector`] owns a side table of [`TargetBinding`]s keyed by target
//! identity, so no connector state ever lives on the host's own objects.
//! Each binding is a two-state machine: unbound, or bound to exactly one
//! trigger event type via either the native or the gesture path.

use crate::capability::Capabilities;
use crate::extract;
use crate::guard;
use ctxwire_core::{
    BEFORE_OPEN_EVENT, Component, ConnectorError, ContainerRegistry, ContextMenu, DEFAULT_OPEN_ON,
    NodeId, Target, TargetId, TriggerEvent, TriggerHandler,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Binds targets to context-menu triggers and keeps menu item models in sync
/// with the host's container tree.
///
/// All public operations are fault-guarded: they return `None` (after
/// logging) instead of panicking, whatever the host's trait implementations
/// do.
pub struct Connector {
    capabilities: Capabilities,
    registry: Arc<dyn ContainerRegistry>,
    bindings: Mutex<HashMap<TargetId, Arc<TargetBinding>>>,
}

impl Connector {
    /// Creates a connector from an injected capability descriptor and the
    /// host's container registry.
    pub fn new(capabilities: Capabilities, registry: Arc<dyn ContainerRegistry>) -> Self {
        Connector {
            capabilities,
            registry,
            bindings: Mutex::new(HashMap::new()),
        }
    }

    /// Installs binding state for `target`.
    ///
    /// Idempotent: a target that already has a binding is left untouched.
    /// When no registration capability is available the failure is logged and
    /// the target is left without a binding, eligible for a later retry once
    /// capabilities exist.
    pub fn init(&self, target: Arc<dyn Target>) -> Option<()> {
        guard::guarded("init", || {
            let id = target.id();
            let mut bindings = lock(&self.bindings);
            if bindings.contains_key(&id) {
                return;
            }
            if !self.capabilities.can_register() {
                tracing::error!(target: "ctxwire", %id, "{}", ConnectorError::NoCapability);
                return;
            }
            bindings.insert(id, TargetBinding::new(target, self.capabilities.clone()));
        })
    }

    /// The binding installed for `target`, if `init` has succeeded for it.
    pub fn binding(&self, target: &dyn Target) -> Option<Arc<TargetBinding>> {
        lock(&self.bindings).get(&target.id()).cloned()
    }

    /// Tears down `target`'s binding: unbinds any trigger, then drops the
    /// side-table entry so the target is eligible for a fresh `init`.
    pub fn remove_connector(&self, target: &dyn Target) -> Option<()> {
        guard::guarded("remove_connector", || {
            let binding = lock(&self.bindings).remove(&target.id());
            if let Some(binding) = binding {
                binding.detach();
            }
        })
    }

    /// Rebuilds `menu`'s item tree from the container `(app_id, node_id)`.
    ///
    /// A full, non-incremental rebuild: the previous tree is discarded
    /// wholesale. A failed lookup logs both identifiers and leaves the menu
    /// with no items; it is never retried and never escapes as an error.
    pub fn generate_items(
        &self,
        menu: &dyn ContextMenu,
        app_id: &str,
        node_id: NodeId,
    ) -> Option<()> {
        guard::guarded("generate_items", || {
            extract::generate_items(self.registry.as_ref(), menu, app_id, node_id);
        })
    }

    /// Propagates a checked-state change to the item `component` was last
    /// extracted into. A component that was never extracted (or whose tree
    /// has been discarded) is silently left alone.
    pub fn set_checked(&self, component: &Component, checked: bool) -> Option<()> {
        guard::guarded("set_checked", || {
            if let Some(item) = component.item() {
                item.set_checked(checked);
            }
        })
    }
}

/// Per-target trigger binding.
///
/// At most one event type is actively bound at a time; the stored open event
/// is whatever trigger fired most recently.
pub struct TargetBinding {
    target: Arc<dyn Target>,
    capabilities: Capabilities,
    state: Mutex<BindState>,
    weak_self: Weak<TargetBinding>,
}

#[derive(Default)]
struct BindState {
    open_on: Option<OpenOn>,
    open_event: Option<TriggerEvent>,
}

struct OpenOn {
    event_type: String,
    via_gesture: bool,
}

impl TargetBinding {
    fn new(target: Arc<dyn Target>, capabilities: Capabilities) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| TargetBinding {
            target,
            capabilities,
            state: Mutex::new(BindState::default()),
            weak_self: weak_self.clone(),
        })
    }

    /// Rebinds the trigger to `event_type`.
    ///
    /// Unbinds the current state first (a safe no-op when unbound), records
    /// the new event type, then parks on the readiness gate and attaches the
    /// handler once it resolves; a recognized gesture type goes through the
    /// gesture path, anything else through the native path.
    ///
    /// A rebind issued while an earlier one is still parked on the gate does
    /// not cancel it: once the gate resolves, both attach. The binding then
    /// tracks only the newer event type, and the older listener stays on the
    /// target until something removes that type explicitly.
    pub async fn update_open_on(&self, event_type: &str) -> Option<()> {
        guard::guarded_async("update_open_on", async {
            self.detach();
            let via_gesture = self.capabilities.is_gesture(event_type);
            lock(&self.state).open_on = Some(OpenOn {
                event_type: event_type.to_owned(),
                via_gesture,
            });

            self.capabilities.ready().ready().await;

            let handler = self.trigger_handler();
            if via_gesture {
                if let Some(gestures) = self.capabilities.gestures() {
                    gestures.add_listener(self.target.as_ref(), event_type, handler);
                }
            } else {
                self.target.add_event_listener(event_type, handler);
            }
        })
        .await
    }

    /// Rebinds the trigger to the default context-menu event type.
    pub async fn open_on_default(&self) -> Option<()> {
        self.update_open_on(DEFAULT_OPEN_ON).await
    }

    /// Rebinds the trigger to plain clicks.
    pub async fn open_on_click(&self) -> Option<()> {
        self.update_open_on("click").await
    }

    /// Unbinds the current trigger, if any.
    pub fn remove_listener(&self) -> Option<()> {
        guard::guarded("remove_listener", || self.detach())
    }

    /// Asks `menu` to open at the most recently stored trigger event.
    /// Pure delegation; binding state is unchanged.
    pub fn open_menu(&self, menu: &dyn ContextMenu) -> Option<()> {
        guard::guarded("open_menu", || {
            let trigger = lock(&self.state).open_event.clone();
            menu.open(trigger);
        })
    }

    /// The event type currently recorded as bound, if any.
    pub fn bound_event_type(&self) -> Option<String> {
        lock(&self.state)
            .open_on
            .as_ref()
            .map(|open_on| open_on.event_type.clone())
    }

    /// The trigger event stored by the most recent firing, if any.
    pub fn open_event(&self) -> Option<TriggerEvent> {
        lock(&self.state).open_event.clone()
    }

    /// The target this binding is attached to.
    pub fn target(&self) -> &Arc<dyn Target> {
        &self.target
    }

    fn detach(&self) {
        let open_on = lock(&self.state).open_on.take();
        if let Some(OpenOn {
            event_type,
            via_gesture,
        }) = open_on
        {
            if via_gesture {
                if let Some(gestures) = self.capabilities.gestures() {
                    gestures.remove_listener(self.target.as_ref(), &event_type);
                }
            } else {
                self.target.remove_event_listener(&event_type);
            }
        }
    }

    // The handler crosses an event-loop boundary, so it carries its own
    // guard: an uncaught panic inside a host-dispatched callback would
    // otherwise vanish without a diagnostic.
    fn trigger_handler(&self) -> TriggerHandler {
        let weak = self.weak_self.clone();
        Arc::new(move |event: TriggerEvent| {
            guard::guarded("open_on_handler", || {
                let Some(binding) = weak.upgrade() else {
                    return;
                };
                event.prevent_default();
                event.stop_propagation();
                lock(&binding.state).open_event = Some(event.clone());
                binding.target.dispatch_event(BEFORE_OPEN_EVENT);
            });
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
