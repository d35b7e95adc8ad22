//! The [`FlowStore`]: single owner of the [`CallFlow`] aggregate.
//!
//! All mutation flows through the store. Every public operation either fully
//! succeeds or fully no-ops; there is no transactional rollback layered on
//! top, so partial updates are never allowed to escape.

use crate::error::FlowError;
use crate::flow::{
    CallFlow, CallFlowEdge, CallFlowNode, IdGenerator, NodeFactory, NodeKind, NodePayload,
    Position, START_NODE_ID,
};

mod connection;

/// Which surface the hosting view is currently rendering. Pure UI flag,
/// no structural effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    List,
    #[default]
    Canvas,
}

/// Partial change to a single node: position and/or payload.
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub position: Option<Position>,
    pub payload: Option<NodePayload>,
}

impl NodeUpdate {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn payload(payload: NodePayload) -> Self {
        Self {
            payload: Some(payload),
            ..Default::default()
        }
    }
}

/// Partial change to the flow's metadata fields.
#[derive(Debug, Clone, Default)]
pub struct MetadataPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub voice_type: Option<String>,
    pub is_active: Option<bool>,
}

/// Owns the canonical [`CallFlow`] for one editing session, together with
/// the selection, the view mode, and the id generators.
#[derive(Debug, Clone)]
pub struct FlowStore {
    flow: CallFlow,
    selected: Option<String>,
    view_mode: ViewMode,
    factory: NodeFactory,
    edge_ids: IdGenerator,
}

impl FlowStore {
    /// A store over a freshly minted default flow (start node only).
    pub fn new() -> Self {
        Self::with_flow(CallFlow::default())
    }

    /// Adopts a host-supplied flow. Id generators are seeded past any ids
    /// already present so later additions cannot collide.
    pub fn with_flow(flow: CallFlow) -> Self {
        let mut factory = NodeFactory::new();
        factory.ids_mut().seed_past(flow.nodes.iter().map(|n| n.id.as_str()));
        let mut edge_ids = IdGenerator::new("edge");
        edge_ids.seed_past(flow.edges.iter().map(|e| e.id.as_str()));
        Self {
            flow,
            selected: None,
            view_mode: ViewMode::default(),
            factory,
            edge_ids,
        }
    }

    pub fn flow(&self) -> &CallFlow {
        &self.flow
    }

    /// Constructs a node of the given kind, appends it, and selects it.
    /// Always succeeds.
    pub fn add_node(&mut self, kind: NodeKind) -> &CallFlowNode {
        let node = self.factory.create(kind);
        self.selected = Some(node.id.clone());
        self.flow.nodes.push(node);
        self.flow.touch();
        self.flow.nodes.last().expect("node was just pushed")
    }

    /// Merges a partial change into the node matching `id`. Silent no-op on
    /// an unknown id: the node may have been deleted out from under a live
    /// property editor, which is not an error.
    pub fn update_node(&mut self, id: &str, update: NodeUpdate) {
        let Some(node) = self.flow.node_mut(id) else {
            return;
        };
        if let Some(position) = update.position {
            node.position = position;
        }
        if let Some(payload) = update.payload {
            node.payload = payload;
        }
        self.flow.touch();
    }

    /// Removes a node and cascades removal of every incident edge. The start
    /// node is protected: deleting it is rejected and the flow is unchanged.
    pub fn delete_node(&mut self, id: &str) -> Result<(), FlowError> {
        if id == START_NODE_ID {
            return Err(FlowError::StartNodeProtected);
        }
        let Some(index) = self.flow.nodes.iter().position(|n| n.id == id) else {
            return Ok(());
        };
        self.flow.nodes.remove(index);
        connection::remove_edges_for(&mut self.flow, id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.flow.touch();
        Ok(())
    }

    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        if let Some(name) = patch.name {
            self.flow.name = name;
        }
        if let Some(description) = patch.description {
            self.flow.description = description;
        }
        if let Some(language) = patch.language {
            self.flow.language = language;
        }
        if let Some(voice_type) = patch.voice_type {
            self.flow.voice_type = voice_type;
        }
        if let Some(is_active) = patch.is_active {
            self.flow.is_active = is_active;
        }
        self.flow.touch();
    }

    /// Sets the active node for the property editor. Existence is not
    /// validated here; readers resolve stale ids to "no selection".
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected node, if the selection still resolves. A selection left
    /// pointing at a deleted node reads as `None`.
    pub fn selected_node(&self) -> Option<&CallFlowNode> {
        self.selected.as_deref().and_then(|id| self.flow.node(id))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Appends a new edge after validating referential integrity, the
    /// self-loop ban, and the duplicate-pair ban. On rejection the aggregate
    /// is untouched.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<&CallFlowEdge, FlowError> {
        connection::check_new_edge(&self.flow, source, target)?;
        let edge = CallFlowEdge::new(self.edge_ids.next_id(), source, target);
        self.flow.edges.push(edge);
        self.flow.touch();
        Ok(self.flow.edges.last().expect("edge was just pushed"))
    }

    /// Removes the first edge matching the ordered pair; no-op if absent.
    pub fn remove_edge(&mut self, source: &str, target: &str) {
        if connection::remove_edge(&mut self.flow, source, target) {
            self.flow.touch();
        }
    }

    /// Hands the aggregate back to the host for persistence; the explicit
    /// save action of the session. The store itself never persists.
    pub fn save(&mut self) -> CallFlow {
        self.flow.touch();
        self.flow.clone()
    }
}

impl Default for FlowStore {
    fn default() -> Self {
        Self::new()
    }
}
