//! The context-menu seam.

use crate::container::NodeId;
use crate::event::TriggerEvent;
use crate::items::Item;

/// The menu whose item model the connector maintains.
///
/// Implemented by the host. Rendering, positioning and closing are entirely
/// the host's business; the connector only rebuilds the item model and asks
/// the menu to open at the stored trigger event.
pub trait ContextMenu: Send + Sync {
    /// Records the container node this menu's items are extracted from.
    fn set_container_node(&self, node: NodeId);

    /// Replaces the menu's item tree wholesale. `None` means extraction
    /// yielded nothing (the container failed to resolve).
    fn set_items(&self, items: Option<Vec<Item>>);

    /// Opens the menu at the given trigger event, or wherever the host sees
    /// fit when no trigger has been stored yet.
    fn open(&self, trigger: Option<TriggerEvent>);
}
