//! Fault-containment tests: a panicking host implementation never unwinds
//! out of a public entry point.

use ctxwire::testing::{FakeTarget, RecordingMenu, StaticContainers};
use ctxwire::{
    BoxError, Capabilities, Component, Connector, Container, ContainerRegistry, NodeId, ReadyGate,
    Target, TargetId, TriggerHandler,
};
use std::sync::Arc;

struct PanickingTarget;

impl Target for PanickingTarget {
    fn id(&self) -> TargetId {
        panic!("host target identity blew up")
    }

    fn add_event_listener(&self, _event_type: &str, _handler: TriggerHandler) {}
    fn remove_event_listener(&self, _event_type: &str) {}
    fn dispatch_event(&self, _event_type: &str) {}
}

struct ExplodingListenerTarget;

impl Target for ExplodingListenerTarget {
    fn id(&self) -> TargetId {
        TargetId(1)
    }

    fn add_event_listener(&self, _event_type: &str, _handler: TriggerHandler) {
        panic!("listener table corrupted")
    }

    fn remove_event_listener(&self, _event_type: &str) {}
    fn dispatch_event(&self, _event_type: &str) {}
}

struct PanickingRegistry;

impl ContainerRegistry for PanickingRegistry {
    fn container(&self, _app_id: &str, _node_id: NodeId) -> Result<Arc<dyn Container>, BoxError> {
        panic!("registry invariant violated")
    }
}

#[test]
fn init_contains_a_panicking_target() {
    let connector = Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        StaticContainers::new(),
    );

    assert_eq!(connector.init(Arc::new(PanickingTarget)), None);
}

#[tokio::test]
async fn update_open_on_contains_a_panicking_registration() {
    let connector = Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        StaticContainers::new(),
    );
    let target: Arc<ExplodingListenerTarget> = Arc::new(ExplodingListenerTarget);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    assert_eq!(binding.update_open_on("click").await, None);
}

#[test]
fn generate_items_contains_a_panicking_registry() {
    let connector = Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        Arc::new(PanickingRegistry),
    );
    let menu = RecordingMenu::new();

    assert_eq!(connector.generate_items(menu.as_ref(), "app", NodeId(1)), None);
    assert!(menu.items().is_none());
}

#[test]
fn set_checked_is_guarded_and_infallible() {
    let connector = Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        StaticContainers::new(),
    );

    assert_eq!(
        connector.set_checked(&Component::menu_item("a"), true),
        Some(())
    );
}

#[tokio::test]
async fn a_panicking_trigger_handler_does_not_unwind_into_the_host() {
    // The before-open dispatch panics, the way a host listener might; the
    // synthesized firing must still return normally.
    struct ExplodingDispatchTarget(Arc<FakeTarget>);

    impl Target for ExplodingDispatchTarget {
        fn id(&self) -> TargetId {
            self.0.id()
        }

        fn add_event_listener(&self, event_type: &str, handler: TriggerHandler) {
            self.0.add_event_listener(event_type, handler);
        }

        fn remove_event_listener(&self, event_type: &str) {
            self.0.remove_event_listener(event_type);
        }

        fn dispatch_event(&self, _event_type: &str) {
            panic!("host before-open listener blew up")
        }
    }

    let inner = FakeTarget::new(3);
    let target = Arc::new(ExplodingDispatchTarget(inner.clone()));
    let connector = Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        StaticContainers::new(),
    );
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();
    binding.update_open_on("click").await.unwrap();

    let event = inner.synthesize("click");
    assert!(event.default_prevented(), "handler ran up to the dispatch");
    assert!(
        binding.open_event().is_some(),
        "the event was stored before the host callback panicked"
    );
}
