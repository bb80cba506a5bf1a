//! Trigger-binding state machine tests using the in-memory fakes.

use ctxwire::testing::{FakeGestureRegistry, FakeTarget, StaticContainers};
use ctxwire::{
    BEFORE_OPEN_EVENT, Capabilities, Connector, DEFAULT_OPEN_ON, ReadyGate, ready_gate,
};
use std::sync::Arc;

fn native_connector() -> Connector {
    Connector::new(
        Capabilities::native(ReadyGate::immediate()),
        StaticContainers::new(),
    )
}

#[tokio::test]
async fn init_is_idempotent() {
    let connector = native_connector();
    let target = FakeTarget::new(1);

    connector.init(target.clone()).unwrap();
    let first = connector.binding(target.as_ref()).unwrap();

    connector.init(target.clone()).unwrap();
    let second = connector.binding(target.as_ref()).unwrap();

    assert!(
        Arc::ptr_eq(&first, &second),
        "a second init must not replace the existing binding"
    );
}

#[tokio::test]
async fn init_without_capability_installs_nothing() {
    let connector = Connector::new(
        Capabilities::unavailable(ReadyGate::immediate()),
        StaticContainers::new(),
    );
    let target = FakeTarget::new(1);

    connector.init(target.clone()).unwrap();
    assert!(connector.binding(target.as_ref()).is_none());
}

#[tokio::test]
async fn click_trigger_dispatches_one_before_open() {
    let connector = native_connector();
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    binding.update_open_on("click").await.unwrap();
    let event = target.synthesize("click");

    assert_eq!(target.notifications(), vec![BEFORE_OPEN_EVENT.to_owned()]);
    assert!(event.default_prevented());
    assert!(event.propagation_stopped());

    let stored = binding.open_event().expect("trigger must store the event");
    assert!(
        stored.same_event(&event),
        "the stored open event must be the one that fired"
    );
}

#[tokio::test]
async fn removed_listener_no_longer_fires() {
    let connector = native_connector();
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    binding.update_open_on("click").await.unwrap();
    binding.remove_listener().unwrap();
    target.synthesize("click");

    assert!(target.notifications().is_empty());
    assert_eq!(binding.bound_event_type(), None);
}

#[tokio::test]
async fn remove_listener_when_unbound_is_a_no_op() {
    let connector = native_connector();
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    assert_eq!(binding.remove_listener(), Some(()));
}

#[tokio::test]
async fn rebinding_replaces_the_previous_event_type() {
    let connector = native_connector();
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    binding.update_open_on("click").await.unwrap();
    binding.update_open_on("dblclick").await.unwrap();

    assert_eq!(target.listener_count("click"), 0);
    assert_eq!(target.listener_count("dblclick"), 1);
    assert_eq!(binding.bound_event_type().as_deref(), Some("dblclick"));
}

#[tokio::test]
async fn gesture_types_register_through_the_gesture_path() {
    let gestures = FakeGestureRegistry::recognizing([DEFAULT_OPEN_ON]);
    let capabilities =
        Capabilities::native(ReadyGate::immediate()).with_gestures(gestures.clone());
    let connector = Connector::new(capabilities, StaticContainers::new());
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    binding.open_on_default().await.unwrap();
    assert_eq!(gestures.listener_count(target.as_ref(), DEFAULT_OPEN_ON), 1);
    assert_eq!(target.listener_count(DEFAULT_OPEN_ON), 0);

    gestures.fire(target.as_ref(), DEFAULT_OPEN_ON);
    assert_eq!(target.notifications(), vec![BEFORE_OPEN_EVENT.to_owned()]);

    binding.remove_listener().unwrap();
    assert_eq!(gestures.listener_count(target.as_ref(), DEFAULT_OPEN_ON), 0);
}

#[tokio::test]
async fn unrecognized_types_fall_back_to_the_native_path() {
    let gestures = FakeGestureRegistry::recognizing([DEFAULT_OPEN_ON]);
    let capabilities =
        Capabilities::native(ReadyGate::immediate()).with_gestures(gestures.clone());
    let connector = Connector::new(capabilities, StaticContainers::new());
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    binding.open_on_click().await.unwrap();
    assert_eq!(target.listener_count("click"), 1);
    assert_eq!(gestures.listener_count(target.as_ref(), "click"), 0);
}

#[tokio::test]
async fn nothing_attaches_before_the_gate_resolves() {
    let (signal, gate) = ready_gate();
    let connector = Connector::new(Capabilities::native(gate), StaticContainers::new());
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    let pending = tokio::spawn({
        let binding = binding.clone();
        async move { binding.update_open_on("click").await }
    });
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    assert_eq!(
        target.listener_count("click"),
        0,
        "no listener before readiness"
    );
    // The event type is already recorded while the registration is pending.
    assert_eq!(binding.bound_event_type().as_deref(), Some("click"));
    target.synthesize("click");
    assert!(target.notifications().is_empty());

    signal.notify();
    pending.await.unwrap().unwrap();
    assert_eq!(target.listener_count("click"), 1);
}

// Pins the known semantics of overlapping rebinds: there is no generation
// counter, so a rebind superseded while parked on the gate still attaches
// its listener once the gate resolves.
#[tokio::test]
async fn overlapping_rebinds_can_double_attach() {
    let (signal, gate) = ready_gate();
    let connector = Connector::new(Capabilities::native(gate), StaticContainers::new());
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();

    let first = tokio::spawn({
        let binding = binding.clone();
        async move { binding.update_open_on("click").await }
    });
    tokio::task::yield_now().await;
    let second = tokio::spawn({
        let binding = binding.clone();
        async move { binding.update_open_on("dblclick").await }
    });
    tokio::task::yield_now().await;

    signal.notify();
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert_eq!(target.listener_count("click"), 1, "stale rebind leaked");
    assert_eq!(target.listener_count("dblclick"), 1);
    assert_eq!(binding.bound_event_type().as_deref(), Some("dblclick"));
}

#[tokio::test]
async fn remove_connector_tears_down_and_allows_reinit() {
    let connector = native_connector();
    let target = FakeTarget::new(1);
    connector.init(target.clone()).unwrap();
    let binding = connector.binding(target.as_ref()).unwrap();
    binding.update_open_on("click").await.unwrap();

    connector.remove_connector(target.as_ref()).unwrap();
    assert!(connector.binding(target.as_ref()).is_none());
    assert_eq!(target.listener_count("click"), 0);
    target.synthesize("click");
    assert!(target.notifications().is_empty());

    connector.init(target.clone()).unwrap();
    let fresh = connector.binding(target.as_ref()).unwrap();
    assert!(
        !Arc::ptr_eq(&binding, &fresh),
        "re-init after teardown must produce fresh state"
    );
}
