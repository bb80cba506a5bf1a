//! Live child components of a container.

use crate::container::NodeId;
use crate::items::{Item, ItemNode};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// What kind of child a container holds.
///
/// Only menu items can carry submenus; anything else (separators, arbitrary
/// host widgets) is a leaf in the extracted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// A selectable menu item, possibly with a submenu container.
    MenuItem,
    /// Any other host component embedded in the menu.
    Other,
}

/// A live child of a [`Container`](crate::Container).
///
/// A `Component` is a shared handle owned by the host; cloning it clones the
/// handle. The connector reads the checked flag and submenu node during
/// extraction and stores a weak back-reference to the extracted [`Item`] for
/// later checked-state propagation.
#[derive(Clone)]
pub struct Component {
    inner: Arc<Inner>,
}

struct Inner {
    kind: ComponentKind,
    label: String,
    checked: AtomicBool,
    submenu: Mutex<Option<NodeId>>,
    item: Mutex<Option<Weak<ItemNode>>>,
}

impl Component {
    /// Creates a component of the given kind.
    pub fn new(kind: ComponentKind, label: impl Into<String>) -> Self {
        Component {
            inner: Arc::new(Inner {
                kind,
                label: label.into(),
                checked: AtomicBool::new(false),
                submenu: Mutex::new(None),
                item: Mutex::new(None),
            }),
        }
    }

    /// Creates a menu-item component.
    pub fn menu_item(label: impl Into<String>) -> Self {
        Component::new(ComponentKind::MenuItem, label)
    }

    /// The component's kind.
    pub fn kind(&self) -> ComponentKind {
        self.inner.kind
    }

    /// The component's label, for host display and diagnostics.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// The host-owned checked flag, snapshotted into items at extraction.
    pub fn checked_flag(&self) -> bool {
        self.inner.checked.load(Ordering::Acquire)
    }

    /// Sets the host-owned checked flag.
    pub fn set_checked_flag(&self, checked: bool) {
        self.inner.checked.store(checked, Ordering::Release);
    }

    /// The container node backing this component's submenu, if any.
    pub fn submenu(&self) -> Option<NodeId> {
        *lock(&self.inner.submenu)
    }

    /// Marks this component as carrying a submenu rooted at `node`.
    pub fn set_submenu(&self, node: Option<NodeId>) {
        *lock(&self.inner.submenu) = node;
    }

    /// The item this component was last extracted into, if that tree is
    /// still alive.
    pub fn item(&self) -> Option<Item> {
        lock(&self.inner.item)
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Item::from_node)
    }

    /// Points this component's back-reference at `item`, replacing any
    /// reference from an earlier extraction. The reference is weak: it never
    /// keeps a discarded tree alive.
    pub fn attach_item(&self, item: &Item) {
        *lock(&self.inner.item) = Some(Arc::downgrade(item.node()));
    }

    /// Whether two handles refer to the same underlying component.
    pub fn same_component(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("kind", &self.inner.kind)
            .field("label", &self.inner.label)
            .field("checked", &self.checked_flag())
            .field("submenu", &self.submenu())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
