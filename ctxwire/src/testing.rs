//! Testing utilities for the connector.
//!
//! This module provides host-side fakes so bindings and extraction can be
//! exercised without a real UI:
//!
//! - [`FakeTarget`]: an in-memory target with a listener table and a
//!   notification log
//! - [`FakeGestureRegistry`]: a gesture registry recognizing a fixed set of
//!   event types
//! - [`StaticContainers`]: an in-memory `(app id, node id) → children` map
//! - [`RecordingMenu`]: a menu that records everything the connector does
//!   to it

use crate::capability::GestureRegistry;
use ctxwire_core::{
    BoxError, Component, Container, ContainerRegistry, ContextMenu, Item, NodeId, Target, TargetId,
    TriggerEvent, TriggerHandler,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Fake Target
// ============================================================================

/// An in-memory target element.
///
/// Listeners registered through the native path land in a per-type table;
/// [`synthesize`](FakeTarget::synthesize) fires them the way the host's event
/// loop would, and notifications dispatched on the target are recorded for
/// inspection.
pub struct FakeTarget {
    id: TargetId,
    listeners: Mutex<HashMap<String, Vec<TriggerHandler>>>,
    notifications: Mutex<Vec<String>>,
}

impl FakeTarget {
    /// Creates a target with the given identity.
    pub fn new(id: u64) -> Arc<Self> {
        Arc::new(FakeTarget {
            id: TargetId(id),
            listeners: Mutex::new(HashMap::new()),
            notifications: Mutex::new(Vec::new()),
        })
    }

    /// Fires an event of `event_type` through every native listener
    /// registered for it, returning the event so tests can compare identity.
    pub fn synthesize(&self, event_type: &str) -> TriggerEvent {
        let event = TriggerEvent::new(event_type);
        let handlers: Vec<TriggerHandler> = self
            .listeners
            .lock()
            .unwrap()
            .get(event_type)
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler(event.clone());
        }
        event
    }

    /// How many native listeners are registered for `event_type`.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(event_type)
            .map_or(0, Vec::len)
    }

    /// The notifications dispatched on this target, in order.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Target for FakeTarget {
    fn id(&self) -> TargetId {
        self.id
    }

    fn add_event_listener(&self, event_type: &str, handler: TriggerHandler) {
        self.listeners
            .lock()
            .unwrap()
            .entry(event_type.to_owned())
            .or_default()
            .push(handler);
    }

    fn remove_event_listener(&self, event_type: &str) {
        self.listeners.lock().unwrap().remove(event_type);
    }

    fn dispatch_event(&self, event_type: &str) {
        self.notifications.lock().unwrap().push(event_type.to_owned());
    }
}

// ============================================================================
// Fake Gesture Registry
// ============================================================================

/// A gesture registry recognizing a fixed set of event types.
pub struct FakeGestureRegistry {
    recognized: Vec<String>,
    listeners: Mutex<HashMap<(TargetId, String), Vec<TriggerHandler>>>,
}

impl FakeGestureRegistry {
    /// Creates a registry recognizing exactly the given gesture types.
    pub fn recognizing<I, S>(types: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(FakeGestureRegistry {
            recognized: types.into_iter().map(Into::into).collect(),
            listeners: Mutex::new(HashMap::new()),
        })
    }

    /// Fires a gesture of `event_type` on `target` through every listener
    /// registered for that pair.
    pub fn fire(&self, target: &dyn Target, event_type: &str) -> TriggerEvent {
        let event = TriggerEvent::new(event_type);
        let handlers: Vec<TriggerHandler> = self
            .listeners
            .lock()
            .unwrap()
            .get(&(target.id(), event_type.to_owned()))
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler(event.clone());
        }
        event
    }

    /// How many gesture listeners are registered for `(target, event_type)`.
    pub fn listener_count(&self, target: &dyn Target, event_type: &str) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&(target.id(), event_type.to_owned()))
            .map_or(0, Vec::len)
    }
}

impl GestureRegistry for FakeGestureRegistry {
    fn recognizes(&self, event_type: &str) -> bool {
        self.recognized.iter().any(|known| known == event_type)
    }

    fn add_listener(&self, target: &dyn Target, event_type: &str, handler: TriggerHandler) {
        self.listeners
            .lock()
            .unwrap()
            .entry((target.id(), event_type.to_owned()))
            .or_default()
            .push(handler);
    }

    fn remove_listener(&self, target: &dyn Target, event_type: &str) {
        self.listeners
            .lock()
            .unwrap()
            .remove(&(target.id(), event_type.to_owned()));
    }
}

// ============================================================================
// Static Containers
// ============================================================================

/// An in-memory container registry.
///
/// Lookups of keys that were never inserted return an error, which the
/// connector treats as a resolution failure.
pub struct StaticContainers {
    nodes: Mutex<HashMap<(String, NodeId), Vec<Component>>>,
}

impl StaticContainers {
    /// Creates an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(StaticContainers {
            nodes: Mutex::new(HashMap::new()),
        })
    }

    /// Inserts (or replaces) the children of `(app_id, node_id)`.
    pub fn insert(&self, app_id: impl Into<String>, node_id: NodeId, children: Vec<Component>) {
        self.nodes
            .lock()
            .unwrap()
            .insert((app_id.into(), node_id), children);
    }
}

impl ContainerRegistry for StaticContainers {
    fn container(&self, app_id: &str, node_id: NodeId) -> Result<Arc<dyn Container>, BoxError> {
        let children = self
            .nodes
            .lock()
            .unwrap()
            .get(&(app_id.to_owned(), node_id))
            .cloned();
        match children {
            Some(children) => Ok(Arc::new(VecContainer { children })),
            None => Err(format!("unknown node {node_id} in app {app_id}").into()),
        }
    }
}

struct VecContainer {
    children: Vec<Component>,
}

impl Container for VecContainer {
    fn children(&self) -> Vec<Component> {
        self.children.clone()
    }
}

// ============================================================================
// Recording Menu
// ============================================================================

/// A menu that records what the connector does to it.
pub struct RecordingMenu {
    container_node: Mutex<Option<NodeId>>,
    items: Mutex<Option<Vec<Item>>>,
    open_calls: Mutex<Vec<Option<TriggerEvent>>>,
}

impl RecordingMenu {
    /// Creates a menu with no recorded state.
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingMenu {
            container_node: Mutex::new(None),
            items: Mutex::new(None),
            open_calls: Mutex::new(Vec::new()),
        })
    }

    /// The container node most recently recorded on the menu.
    pub fn container_node(&self) -> Option<NodeId> {
        *self.container_node.lock().unwrap()
    }

    /// The item tree most recently assigned, if extraction yielded one.
    pub fn items(&self) -> Option<Vec<Item>> {
        self.items.lock().unwrap().clone()
    }

    /// Every `open` call the menu has received, with its trigger event.
    pub fn open_calls(&self) -> Vec<Option<TriggerEvent>> {
        self.open_calls.lock().unwrap().clone()
    }
}

impl ContextMenu for RecordingMenu {
    fn set_container_node(&self, node: NodeId) {
        *self.container_node.lock().unwrap() = Some(node);
    }

    fn set_items(&self, items: Option<Vec<Item>>) {
        *self.items.lock().unwrap() = items;
    }

    fn open(&self, trigger: Option<TriggerEvent>) {
        self.open_calls.lock().unwrap().push(trigger);
    }
}
