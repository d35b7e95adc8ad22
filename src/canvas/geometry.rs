//! Pure canvas geometry.
//!
//! Node boxes and connector anchors are computed from the `position` already
//! in the data model plus fixed node dimensions, never read back from a
//! rendered surface, so hit-testing works without any rendering environment.

use crate::flow::{CallFlow, CallFlowNode, Position};

/// Rendered node box size in canvas units.
pub const NODE_WIDTH: f64 = 200.0;
pub const NODE_HEIGHT: f64 = 80.0;

/// Pointer hit radius around a connector anchor.
pub const CONNECTOR_RADIUS: f64 = 10.0;

/// Axis-aligned node bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

pub fn node_rect(node: &CallFlowNode) -> Rect {
    Rect {
        x: node.position.x,
        y: node.position.y,
        width: NODE_WIDTH,
        height: NODE_HEIGHT,
    }
}

/// Anchor of the input connector: centered on the node's left edge.
pub fn input_connector(node: &CallFlowNode) -> Position {
    Position::new(node.position.x, node.position.y + NODE_HEIGHT / 2.0)
}

/// Anchor of the output connector: centered on the node's right edge.
pub fn output_connector(node: &CallFlowNode) -> Position {
    Position::new(
        node.position.x + NODE_WIDTH,
        node.position.y + NODE_HEIGHT / 2.0,
    )
}

/// What a pointer coordinate lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas space.
    Canvas,
    NodeBody(String),
    InputConnector(String),
    OutputConnector(String),
}

/// Resolves a pointer coordinate to the topmost hit. Nodes later in the
/// list render on top, so iteration runs back to front; connector circles
/// take precedence over the body they overlap.
pub fn hit_test(flow: &CallFlow, at: Position) -> HitTarget {
    for node in flow.nodes.iter().rev() {
        if at.distance_to(output_connector(node)) <= CONNECTOR_RADIUS {
            return HitTarget::OutputConnector(node.id.clone());
        }
        if at.distance_to(input_connector(node)) <= CONNECTOR_RADIUS {
            return HitTarget::InputConnector(node.id.clone());
        }
        if node_rect(node).contains(at) {
            return HitTarget::NodeBody(node.id.clone());
        }
    }
    HitTarget::Canvas
}

/// Segment along which an edge between two nodes is drawn: source output
/// connector to target input connector.
pub fn edge_segment(source: &CallFlowNode, target: &CallFlowNode) -> (Position, Position) {
    (output_connector(source), input_connector(target))
}
