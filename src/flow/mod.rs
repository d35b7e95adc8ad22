//! The call-flow data model: the [`CallFlow`] aggregate, its nodes and
//! edges, and the factory producing fully-initialized nodes.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

mod edge;
pub mod factory;
mod node;

pub use edge::CallFlowEdge;
pub use factory::{IdGenerator, NodeFactory};
pub use node::{
    CallFlowNode, ConditionKind, Department, InputMode, MenuOption, NodeKind, NodePayload, Position,
};

/// Reserved id of the mandatory entry-point node.
pub const START_NODE_ID: &str = "start";

/// Current wall-clock time as epoch milliseconds.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// The aggregate describing one IVR script: metadata plus the node/edge graph.
///
/// Exactly one node carries [`START_NODE_ID`]; it is the designated entry
/// point and must always exist. The graph may legally contain cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFlow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: u64,
    pub updated_at: u64,
    pub nodes: Vec<CallFlowNode>,
    pub edges: Vec<CallFlowEdge>,
    pub is_active: bool,
    pub language: String,
    pub voice_type: String,
}

impl CallFlow {
    /// A freshly minted flow containing only the start node.
    pub fn starter(name: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: format!("flow-{now}"),
            name: name.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
            nodes: vec![CallFlowNode {
                id: START_NODE_ID.to_string(),
                position: Position::new(250.0, 40.0),
                payload: NodePayload::Greeting {
                    message: "Hello! Thank you for calling.".to_string(),
                },
            }],
            edges: Vec::new(),
            is_active: false,
            language: "en-US".to_string(),
            voice_type: "female".to_string(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&CallFlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut CallFlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn start_node(&self) -> Option<&CallFlowNode> {
        self.node(START_NODE_ID)
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn edges_from<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a CallFlowEdge> {
        self.edges.iter().filter(move |e| e.source == node_id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = now_millis();
    }
}

impl Default for CallFlow {
    fn default() -> Self {
        Self::starter("Untitled flow")
    }
}
