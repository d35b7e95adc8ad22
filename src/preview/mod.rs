//! Read-only hierarchical preview of the graph.
//!
//! The tree starts at the start node and follows outgoing edges. Flows may
//! legally contain cycles (a menu looping back to an earlier step), so the
//! traversal keeps a visited set of the ids on the current path and renders
//! a back-edge as a reference leaf instead of recursing; naive recursion
//! would never terminate.

use ahash::AHashSet;
use crate::error::FlowError;
use crate::flow::{CallFlow, CallFlowNode, NodePayload, START_NODE_ID};

mod formatter;

pub use formatter::PreviewFormatter;

/// Payload summaries are cut to this many characters.
const SUMMARY_LIMIT: usize = 60;

/// One rendered step of the preview tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewNode {
    pub id: String,
    pub label: &'static str,
    pub summary: String,
    /// A back-reference to a step already on the current path; rendered as a
    /// leaf, never descended into.
    pub is_reference: bool,
    pub children: Vec<PreviewNode>,
}

/// Derives the preview tree from a flow snapshot.
pub struct PreviewTree;

impl PreviewTree {
    /// Builds the tree rooted at the start node.
    pub fn build(flow: &CallFlow) -> Result<PreviewNode, FlowError> {
        let start = flow
            .start_node()
            .ok_or(FlowError::MissingStartNode(START_NODE_ID))?;
        let mut on_path = AHashSet::new();
        Ok(Self::render(flow, start, &mut on_path))
    }

    fn render(flow: &CallFlow, node: &CallFlowNode, on_path: &mut AHashSet<String>) -> PreviewNode {
        on_path.insert(node.id.clone());
        let children = flow
            .edges_from(&node.id)
            .filter_map(|edge| flow.node(&edge.target))
            .map(|target| {
                if on_path.contains(&target.id) {
                    Self::reference(target)
                } else {
                    Self::render(flow, target, on_path)
                }
            })
            .collect();
        on_path.remove(&node.id);

        PreviewNode {
            id: node.id.clone(),
            label: node.kind().label(),
            summary: Self::summarize(&node.payload),
            is_reference: false,
            children,
        }
    }

    fn reference(node: &CallFlowNode) -> PreviewNode {
        PreviewNode {
            id: node.id.clone(),
            label: node.kind().label(),
            summary: Self::summarize(&node.payload),
            is_reference: true,
            children: Vec::new(),
        }
    }

    /// A one-line summary of the payload: the primary text field truncated,
    /// or a synthesized label for `transfer` and `condition`.
    pub fn summarize(payload: &NodePayload) -> String {
        match payload {
            NodePayload::Transfer { department, .. } => {
                format!("Transfer to {department}")
            }
            NodePayload::Condition {
                condition_type,
                condition_value,
            } => format!("If {condition_type} matches '{condition_value}'"),
            other => truncate(other.primary_text().unwrap_or_default()),
        }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= SUMMARY_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(SUMMARY_LIMIT).collect();
    format!("{cut}...")
}
