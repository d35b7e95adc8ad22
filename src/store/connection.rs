//! Edge invariant checks, kept separate from the store surface so the
//! structural rules are testable on their own.

use crate::error::FlowError;
use crate::flow::CallFlow;

/// Validates a prospective edge against the structural invariants:
/// both endpoints exist, no self-loop, no duplicate ordered pair.
pub(crate) fn check_new_edge(flow: &CallFlow, source: &str, target: &str) -> Result<(), FlowError> {
    if !flow.has_node(source) {
        return Err(FlowError::UnknownNode(source.to_string()));
    }
    if !flow.has_node(target) {
        return Err(FlowError::UnknownNode(target.to_string()));
    }
    if source == target {
        return Err(FlowError::SelfLoop(source.to_string()));
    }
    if flow.has_edge(source, target) {
        return Err(FlowError::DuplicateEdge {
            source_id: source.to_string(),
            target_id: target.to_string(),
        });
    }
    Ok(())
}

/// Removes the first edge matching the ordered pair. Returns whether one was
/// removed.
pub(crate) fn remove_edge(flow: &mut CallFlow, source: &str, target: &str) -> bool {
    match flow
        .edges
        .iter()
        .position(|e| e.source == source && e.target == target)
    {
        Some(index) => {
            flow.edges.remove(index);
            true
        }
        None => false,
    }
}

/// Removes every edge touching the given node; the deletion cascade.
/// Returns the number of edges removed.
pub(crate) fn remove_edges_for(flow: &mut CallFlow, node_id: &str) -> usize {
    let before = flow.edges.len();
    flow.edges.retain(|e| !e.touches(node_id));
    before - flow.edges.len()
}
