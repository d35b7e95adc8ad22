//! Flow document export and validating import.
//!
//! Export writes the full aggregate verbatim as pretty-printed UTF-8 JSON;
//! the host wraps it in a data-URI download named by [`export_filename`].
//! Import is the structural inverse: parse, then validate every invariant
//! of the data model before the aggregate is handed out.

use ahash::AHashSet;

use crate::error::ImportError;
use crate::flow::{CallFlow, START_NODE_ID};

/// Serializes the aggregate as pretty-printed JSON.
pub fn export_flow(flow: &CallFlow) -> serde_json::Result<String> {
    serde_json::to_string_pretty(flow)
}

/// Download filename for an exported flow: `<slugified-name>-flow.json`.
pub fn export_filename(flow: &CallFlow) -> String {
    format!("{}-flow.json", slugify(&flow.name))
}

/// Lowercases and collapses every non-alphanumeric run into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("untitled");
    }
    slug
}

/// Parses and validates a flow document.
///
/// The document is accepted whole or rejected with the first violation
/// found; a partially valid flow never escapes this function.
pub fn import_flow(json: &str) -> Result<CallFlow, ImportError> {
    let flow: CallFlow =
        serde_json::from_str(json).map_err(|e| ImportError::Json(e.to_string()))?;
    validate(&flow)?;
    Ok(flow)
}

/// Checks the structural invariants of the data model: unique node ids,
/// start-node presence, edge referential integrity, no self-loops, no
/// duplicate ordered pairs.
pub fn validate(flow: &CallFlow) -> Result<(), ImportError> {
    let mut node_ids = AHashSet::with_capacity(flow.nodes.len());
    for node in &flow.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(ImportError::DuplicateNodeId(node.id.clone()));
        }
    }
    if !node_ids.contains(START_NODE_ID) {
        return Err(ImportError::MissingStartNode(START_NODE_ID));
    }

    let mut pairs = AHashSet::with_capacity(flow.edges.len());
    for edge in &flow.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(ImportError::DanglingEdge {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        if edge.source == edge.target {
            return Err(ImportError::SelfLoop(edge.id.clone()));
        }
        if !pairs.insert((edge.source.as_str(), edge.target.as_str())) {
            return Err(ImportError::DuplicateEdge {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
            });
        }
    }
    Ok(())
}
