//! Common test utilities for building flows and stores.
use callflow::prelude::*;

/// A store with the default flow plus one menu node connected from start.
///
/// Shape: `start -> menu`
#[allow(dead_code)]
pub fn store_with_menu() -> (FlowStore, String) {
    let mut store = FlowStore::new();
    let menu_id = store.add_node(NodeKind::Menu).id.clone();
    store
        .add_edge(START_NODE_ID, &menu_id)
        .expect("edge start -> menu should be valid");
    (store, menu_id)
}

/// A store containing a cycle between a menu and a condition node.
///
/// Shape: `start -> menu -> condition -> menu`
#[allow(dead_code)]
pub fn looped_store() -> (FlowStore, String, String) {
    let mut store = FlowStore::new();
    let menu_id = store.add_node(NodeKind::Menu).id.clone();
    let condition_id = store.add_node(NodeKind::Condition).id.clone();
    store
        .add_edge(START_NODE_ID, &menu_id)
        .expect("edge start -> menu should be valid");
    store
        .add_edge(&menu_id, &condition_id)
        .expect("edge menu -> condition should be valid");
    store
        .add_edge(&condition_id, &menu_id)
        .expect("back-edge condition -> menu should be valid");
    (store, menu_id, condition_id)
}

/// Moves a node to an exact position so canvas geometry is predictable.
#[allow(dead_code)]
pub fn place_node(store: &mut FlowStore, id: &str, x: f64, y: f64) {
    store.update_node(id, NodeUpdate::position(Position::new(x, y)));
}
