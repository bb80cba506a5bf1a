//! # ctxwire-core
//!
//! Core traits and types for the ctxwire context-menu connector.
//!
//! This crate has minimal dependencies and defines the currency exchanged
//! between the connector and its host: the trait seams the host implements
//! and the data types both sides share.
//!
//! # Seams
//!
//! The connector never owns the UI. Everything it touches on the host side
//! goes through one of four traits:
//!
//! - [`Target`] — the element the trigger event is attached to
//! - [`GestureRegistry`] — specialized registration for abstracted
//!   pointer/touch event types
//! - [`ContainerRegistry`] / [`Container`] — the externally owned node tree
//!   that enumerates candidate menu items
//! - [`ContextMenu`] — the menu whose item model the connector rebuilds
//!
//! # Shared types
//!
//! - [`TriggerEvent`] — the event that opened (or will open) the menu
//! - [`Component`] — a live child of a container, with its checked flag and
//!   optional submenu node
//! - [`Item`] — one node of the extracted item tree
//!
//! # Error Types
//!
//! - [`ConnectorError`] - Top-level error type
//! - [`BoxError`] - Boxed dynamic error alias

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod component;
mod container;
mod error;
mod event;
mod items;
mod menu;
mod target;

// Re-exports
pub use component::{Component, ComponentKind};
pub use container::{Container, ContainerRegistry, NodeId};
pub use error::{BoxError, ConnectorError};
pub use event::{BEFORE_OPEN_EVENT, DEFAULT_OPEN_ON, TriggerEvent, TriggerHandler};
pub use items::Item;
pub use menu::ContextMenu;
pub use target::{Target, TargetId};
