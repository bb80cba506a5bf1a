//! The extracted item tree.

use crate::component::Component;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One node of an extracted item tree.
///
/// An `Item` is a snapshot: its checked flag is copied from the component at
/// extraction time and its children mirror the container's order at that
/// moment. The menu owns the tree; components keep only weak back-references
/// into it, so dropping the tree drops the items.
///
/// Cloning an `Item` clones a handle to the same node.
#[derive(Clone)]
pub struct Item {
    node: Arc<ItemNode>,
}

pub(crate) struct ItemNode {
    component: Component,
    checked: AtomicBool,
    children: Option<Vec<Item>>,
}

impl Item {
    /// Builds an item for `component`, snapshotting `checked` and taking
    /// ownership of any pre-built submenu `children`.
    pub fn new(component: Component, checked: bool, children: Option<Vec<Item>>) -> Self {
        Item {
            node: Arc::new(ItemNode {
                component,
                checked: AtomicBool::new(checked),
                children,
            }),
        }
    }

    /// The live component this item was extracted from.
    pub fn component(&self) -> &Component {
        &self.node.component
    }

    /// The item's checked flag.
    pub fn checked(&self) -> bool {
        self.node.checked.load(Ordering::Acquire)
    }

    /// Overwrites the checked flag. Reached through a component's
    /// back-reference by checked-state propagation.
    pub fn set_checked(&self, checked: bool) {
        self.node.checked.store(checked, Ordering::Release);
    }

    /// The extracted submenu items, if this item is a submenu.
    pub fn children(&self) -> Option<&[Item]> {
        self.node.children.as_deref()
    }

    /// Whether two handles refer to the same item node.
    pub fn same_item(&self, other: &Item) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    pub(crate) fn node(&self) -> &Arc<ItemNode> {
        &self.node
    }

    pub(crate) fn from_node(node: Arc<ItemNode>) -> Item {
        Item { node }
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("component", self.component())
            .field("checked", &self.checked())
            .field(
                "children",
                &self.children().map(<[Item]>::len),
            )
            .finish()
    }
}
