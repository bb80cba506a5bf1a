//! Recursive item-tree extraction.

use ctxwire_core::{
    ComponentKind, ConnectorError, ContainerRegistry, ContextMenu, Item, NodeId,
};

/// Rebuilds `menu`'s item tree from the container `(app_id, node_id)`.
///
/// Records the node on the menu, then assigns the freshly extracted tree
/// wholesale. The tree is a snapshot of the container's current child order
/// and submenu nesting; re-invocation discards the previous tree entirely.
pub(crate) fn generate_items(
    registry: &dyn ContainerRegistry,
    menu: &dyn ContextMenu,
    app_id: &str,
    node_id: NodeId,
) {
    menu.set_container_node(node_id);
    menu.set_items(child_items(registry, app_id, node_id));
}

/// Extracts one container's children, depth first.
///
/// A lookup failure yields `None` for this subtree only: it is logged with
/// both identifiers and extraction of the surrounding tree continues.
fn child_items(
    registry: &dyn ContainerRegistry,
    app_id: &str,
    node_id: NodeId,
) -> Option<Vec<Item>> {
    let container = match registry.container(app_id, node_id) {
        Ok(container) => container,
        Err(source) => {
            let error = ConnectorError::resolution(app_id, node_id, source);
            tracing::error!(target: "ctxwire", app_id, %node_id, "{error}");
            return None;
        }
    };

    let items = container
        .children()
        .into_iter()
        .map(|child| {
            // Submenus recurse before the child's back-reference is
            // assigned; the tree is built depth first.
            let children = match child.kind() {
                ComponentKind::MenuItem => child
                    .submenu()
                    .and_then(|submenu| child_items(registry, app_id, submenu)),
                ComponentKind::Other => None,
            };
            let item = Item::new(child.clone(), child.checked_flag(), children);
            child.attach_item(&item);
            item
        })
        .collect();
    Some(items)
}
