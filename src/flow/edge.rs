use serde::{Deserialize, Serialize};

/// A directed "next step" relation between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallFlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl CallFlowEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Whether the edge touches the given node on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
