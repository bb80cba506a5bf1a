//! The container registry seam.
//!
//! Containers are owned and mutated exclusively by the host's registry; the
//! connector only reads them, synchronously, at extraction time.

use crate::component::Component;
use crate::error::BoxError;
use std::fmt;
use std::sync::Arc;

/// Identity of a container node within one application's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An externally owned node whose children enumerate candidate menu items.
pub trait Container: Send + Sync {
    /// The node's children, in display order.
    fn children(&self) -> Vec<Component>;
}

/// Resolves `(app id, node id)` to a live [`Container`].
///
/// Implemented by the host. A failed lookup (unknown app, unknown node) is
/// reported as an `Err`; the connector logs it and treats the subtree as
/// empty, it never retries.
pub trait ContainerRegistry: Send + Sync {
    /// Looks up the container node `node_id` in application `app_id`.
    fn container(&self, app_id: &str, node_id: NodeId) -> Result<Arc<dyn Container>, BoxError>;
}
