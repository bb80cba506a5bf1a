//! # ctxwire - Context-Menu Connector
//!
//! `ctxwire` binds a host-owned target element to a context-menu trigger and
//! keeps a hierarchical item model synchronized with an externally owned tree
//! of container nodes.
//!
//! The host implements the seams from [`ctxwire-core`](ctxwire_core) (target,
//! gesture registry, container registry, menu) and drives the connector:
//!
//! ```rust,ignore
//! use ctxwire::{Capabilities, Connector, ReadyGate};
//!
//! let capabilities = Capabilities::native(ReadyGate::immediate());
//! let connector = Connector::new(capabilities, host_registry);
//!
//! connector.init(target.clone());
//! let binding = connector.binding(target.as_ref()).unwrap();
//! binding.update_open_on("contextmenu").await;
//!
//! // On the before-open notification:
//! connector.generate_items(&menu, "app-1", root_node);
//! binding.open_menu(&menu);
//! ```
//!
//! Every entry point is fault-guarded: a panic anywhere inside the connector
//! (or inside a host trait implementation it calls) is logged and converted
//! into a `None` return. The host page never observes an unwinding panic
//! originating here.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod capability;
mod connector;
mod extract;
mod guard;
mod ready;
pub mod testing;

pub use capability::{Capabilities, GestureRegistry};
pub use connector::{Connector, TargetBinding};
pub use guard::{guarded, guarded_async};
pub use ready::{ReadyGate, ReadySignal, ready_gate};

pub use ctxwire_core::{
    BEFORE_OPEN_EVENT, BoxError, Component, ComponentKind, ConnectorError, Container,
    ContainerRegistry, ContextMenu, DEFAULT_OPEN_ON, Item, NodeId, Target, TargetId, TriggerEvent,
    TriggerHandler,
};
