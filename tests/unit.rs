//! Unit tests for the data model, the factory, and the mutation store.
mod common;
use callflow::editor;
use callflow::prelude::*;
use common::*;
use std::collections::HashSet;

#[test]
fn factory_ids_are_unique() {
    let mut store = FlowStore::new();
    let mut ids = HashSet::new();
    for kind in NodeKind::ALL.into_iter().cycle().take(24) {
        let id = store.add_node(kind).id.clone();
        assert!(ids.insert(id), "factory produced a duplicate id");
    }
    // Plus the start node.
    assert_eq!(store.flow().nodes.len(), 25);
}

#[test]
fn default_flow_contains_only_the_start_node() {
    let store = FlowStore::new();
    assert_eq!(store.flow().nodes.len(), 1);
    let start = store.flow().start_node().expect("start node must exist");
    assert_eq!(start.id, START_NODE_ID);
    assert_eq!(start.kind(), NodeKind::Greeting);
    assert!(store.flow().edges.is_empty());
}

#[test]
fn menu_defaults_to_three_options() {
    let NodePayload::Menu { options, .. } = NodeFactory::default_payload(NodeKind::Menu) else {
        panic!("menu kind must produce a menu payload");
    };
    let descriptions: Vec<_> = options.iter().map(|o| o.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Sales", "Support", "Billing"]);
}

#[test]
fn add_node_selects_the_new_node() {
    let mut store = FlowStore::new();
    let id = store.add_node(NodeKind::Message).id.clone();
    assert_eq!(store.selected_id(), Some(id.as_str()));
    assert_eq!(store.selected_node().map(|n| n.kind()), Some(NodeKind::Message));
}

#[test]
fn add_menu_and_connect_from_start() {
    let mut store = FlowStore::new();
    let menu_id = store.add_node(NodeKind::Menu).id.clone();
    store
        .add_edge(START_NODE_ID, &menu_id)
        .expect("edge start -> menu should be valid");
    assert_eq!(store.flow().edges.len(), 1);
    assert_eq!(store.selected_id(), Some(menu_id.as_str()));
}

#[test]
fn deleting_the_start_node_is_rejected() {
    let (mut store, _menu_id) = store_with_menu();
    let nodes_before = store.flow().nodes.len();
    let edges_before = store.flow().edges.len();

    let result = store.delete_node(START_NODE_ID);

    assert_eq!(result, Err(FlowError::StartNodeProtected));
    assert_eq!(store.flow().nodes.len(), nodes_before);
    assert_eq!(store.flow().edges.len(), edges_before);
}

#[test]
fn deleting_a_node_cascades_edge_removal() {
    let (mut store, menu_id, condition_id) = looped_store();
    assert_eq!(store.flow().edges.len(), 3);

    store.delete_node(&menu_id).expect("menu node is deletable");

    assert!(!store.flow().has_node(&menu_id));
    assert!(
        store.flow().edges.iter().all(|e| !e.touches(&menu_id)),
        "no edge may still reference the deleted node"
    );
    // Every edge in the loop touched the menu node.
    assert_eq!(store.flow().edges.len(), 0);
    assert!(store.flow().has_node(&condition_id));
}

#[test]
fn deleting_the_selected_node_clears_the_selection() {
    let (mut store, menu_id) = store_with_menu();
    store.select(Some(&menu_id));
    store.delete_node(&menu_id).expect("menu node is deletable");
    assert_eq!(store.selected_id(), None);
    assert!(store.selected_node().is_none());
}

#[test]
fn deleting_an_unknown_node_is_a_silent_no_op() {
    let mut store = FlowStore::new();
    assert_eq!(store.delete_node("node-99"), Ok(()));
    assert_eq!(store.flow().nodes.len(), 1);
}

#[test]
fn self_loop_edges_are_rejected() {
    let (mut store, menu_id) = store_with_menu();
    let edges_before = store.flow().edges.len();
    let result = store.add_edge(&menu_id, &menu_id);
    assert_eq!(result.unwrap_err(), FlowError::SelfLoop(menu_id));
    assert_eq!(store.flow().edges.len(), edges_before);
}

#[test]
fn duplicate_edges_are_rejected() {
    let (mut store, menu_id) = store_with_menu();
    let result = store.add_edge(START_NODE_ID, &menu_id);
    assert!(matches!(result, Err(FlowError::DuplicateEdge { .. })));
    assert_eq!(store.flow().edges.len(), 1, "exactly one (start, menu) edge");
}

#[test]
fn edges_to_unknown_nodes_are_rejected() {
    let mut store = FlowStore::new();
    let result = store.add_edge(START_NODE_ID, "node-42");
    assert_eq!(
        result.unwrap_err(),
        FlowError::UnknownNode("node-42".to_string())
    );
    assert!(store.flow().edges.is_empty());
}

#[test]
fn remove_edge_is_a_no_op_when_absent() {
    let (mut store, menu_id) = store_with_menu();
    store.remove_edge(&menu_id, START_NODE_ID); // reversed pair does not exist
    assert_eq!(store.flow().edges.len(), 1);
    store.remove_edge(START_NODE_ID, &menu_id);
    assert!(store.flow().edges.is_empty());
}

#[test]
fn update_node_merges_position_and_payload() {
    let (mut store, menu_id) = store_with_menu();
    store.update_node(&menu_id, NodeUpdate::position(Position::new(10.0, 20.0)));
    let node = store.flow().node(&menu_id).expect("menu node exists");
    assert_eq!(node.position, Position::new(10.0, 20.0));
    assert_eq!(node.kind(), NodeKind::Menu, "payload untouched by position update");

    store.update_node(
        &menu_id,
        NodeUpdate::payload(NodePayload::Message {
            message: "replaced".to_string(),
        }),
    );
    let node = store.flow().node(&menu_id).expect("menu node exists");
    assert_eq!(node.position, Position::new(10.0, 20.0));
    assert_eq!(node.kind(), NodeKind::Message);
}

#[test]
fn update_node_with_unknown_id_is_a_silent_no_op() {
    let mut store = FlowStore::new();
    let before = store.flow().clone();
    store.update_node("node-7", NodeUpdate::position(Position::new(1.0, 1.0)));
    assert_eq!(store.flow().nodes, before.nodes);
}

#[test]
fn stale_selection_reads_as_no_selection() {
    let mut store = FlowStore::new();
    store.select(Some("node-404"));
    assert_eq!(store.selected_id(), Some("node-404"));
    assert!(store.selected_node().is_none());
}

#[test]
fn metadata_patch_merges_only_provided_fields() {
    let mut store = FlowStore::new();
    store.update_metadata(MetadataPatch {
        name: Some("Support line".to_string()),
        is_active: Some(true),
        ..Default::default()
    });
    let flow = store.flow();
    assert_eq!(flow.name, "Support line");
    assert!(flow.is_active);
    assert_eq!(flow.language, "en-US", "unpatched field keeps its value");
}

#[test]
fn view_mode_is_a_pure_flag() {
    let mut store = FlowStore::new();
    assert_eq!(store.view_mode(), ViewMode::Canvas);
    store.set_view_mode(ViewMode::List);
    assert_eq!(store.view_mode(), ViewMode::List);
    assert_eq!(store.flow().nodes.len(), 1, "no structural effect");
}

#[test]
fn adopted_flows_seed_the_id_generators() {
    let (mut store, _menu_id) = store_with_menu();
    store.add_node(NodeKind::Message);
    let snapshot = store.save();
    let existing: HashSet<String> = snapshot.nodes.iter().map(|n| n.id.clone()).collect();

    let mut adopted = FlowStore::with_flow(snapshot);
    let new_id = adopted.add_node(NodeKind::Transfer).id.clone();
    assert!(
        !existing.contains(&new_id),
        "id generator must be seeded past adopted ids"
    );
    let new_edge = adopted
        .add_edge(START_NODE_ID, &new_id)
        .expect("edge to the new node should be valid")
        .id
        .clone();
    assert!(adopted.flow().edges.iter().filter(|e| e.id == new_edge).count() == 1);
}

#[test]
fn editor_fields_round_trip_through_apply() {
    let mut payload = NodeFactory::default_payload(NodeKind::Transfer);
    let fields = editor::fields_for(&payload);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].key, "department");
    assert_eq!(fields[1].value, "support");

    assert!(editor::apply_field(&mut payload, "department", "billing"));
    let NodePayload::Transfer { department, .. } = &payload else {
        panic!("payload variant must be unchanged");
    };
    assert_eq!(*department, Department::Billing);
}

#[test]
fn editor_rejects_unknown_keys_and_unparsable_values() {
    let mut payload = NodeFactory::default_payload(NodeKind::Input);
    let before = payload.clone();
    assert!(!editor::apply_field(&mut payload, "department", "sales"));
    assert!(!editor::apply_field(&mut payload, "inputType", "telepathy"));
    assert_eq!(payload, before);
}

#[test]
fn editor_parses_menu_option_lists() {
    let mut payload = NodeFactory::default_payload(NodeKind::Menu);
    assert!(editor::apply_field(
        &mut payload,
        "options",
        "1: Orders\n2: Returns"
    ));
    let NodePayload::Menu { options, .. } = &payload else {
        panic!("payload variant must be unchanged");
    };
    assert_eq!(options.len(), 2);
    assert_eq!(options[0], MenuOption::new("1", "Orders"));
    assert_eq!(options[1], MenuOption::new("2", "Returns"));
}

#[test]
fn error_display_names_the_ids_involved() {
    let err = FlowError::DuplicateEdge {
        source_id: "node-1".to_string(),
        target_id: "node-2".to_string(),
    };
    assert!(err.to_string().contains("node-1"));
    assert!(err.to_string().contains("node-2"));

    let import_err = ImportError::DanglingEdge {
        edge_id: "edge-3".to_string(),
        node_id: "node-9".to_string(),
    };
    assert!(import_err.to_string().contains("edge-3"));
    assert!(import_err.to_string().contains("node-9"));
}

#[test]
fn duplicate_edge_endpoints_are_data_not_an_error_chain() {
    use std::error::Error;

    // The endpoint ids are plain payload; neither variant wraps an
    // underlying error.
    let err: Box<dyn Error> = Box::new(FlowError::DuplicateEdge {
        source_id: "node-1".to_string(),
        target_id: "node-2".to_string(),
    });
    assert!(err.source().is_none());
    assert!(err.to_string().contains("node-1"));

    let err: Box<dyn Error> = Box::new(ImportError::DuplicateEdge {
        source_id: "node-1".to_string(),
        target_id: "node-2".to_string(),
    });
    assert!(err.source().is_none());
    assert!(err.to_string().contains("node-2"));
}
