//! Error types for the connector.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ConnectorError`] - Top-level error type for all connector operations
//!
//! Errors never escape the connector's public surface: entry points are
//! fault-guarded and convert failures into diagnostics plus a `None` return.
//! The types here exist so the guard and the logs have something precise to
//! report.

use crate::container::NodeId;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all connector operations.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Neither a native listener path nor a gesture registry is available.
    #[error("no event registration capability is available")]
    NoCapability,

    /// The external registry could not resolve a container node.
    #[error("could not get node {node_id} from app {app_id}")]
    Resolution {
        /// The application id the lookup was scoped to.
        app_id: String,
        /// The node id that failed to resolve.
        node_id: NodeId,
        /// The underlying registry error.
        #[source]
        source: BoxError,
    },

    /// A panic was caught at a guard boundary.
    #[error("fault in `{operation}`: {message}")]
    Faulted {
        /// The public operation that faulted.
        operation: String,
        /// The extracted panic message.
        message: String,
    },
}

impl ConnectorError {
    /// Builds a resolution failure for the given lookup key.
    pub fn resolution(app_id: impl Into<String>, node_id: NodeId, source: BoxError) -> Self {
        ConnectorError::Resolution {
            app_id: app_id.into(),
            node_id,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_display_names_both_identifiers() {
        let err = ConnectorError::resolution("x", NodeId(42), "no such node".into());
        let shown = err.to_string();
        assert!(shown.contains("x"), "display should carry the app id");
        assert!(shown.contains("42"), "display should carry the node id");
    }
}
