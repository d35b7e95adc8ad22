//! The pointer-driven canvas interaction state machine.
//!
//! Raw pointer events come in, [`FlowStore`] mutations come out. The whole
//! interaction state is one explicit finite value owned by one controller,
//! so a "stuck drag" cannot hide in scattered booleans: `pointer_up` returns
//! the controller to [`Interaction::Idle`] for *any* coordinates, which is
//! how the host's global pointer-up listener keeps releases outside the
//! canvas from wedging a gesture.

use crate::error::FlowError;
use crate::flow::Position;
use crate::store::{FlowStore, NodeUpdate};

pub mod geometry;

pub use geometry::HitTarget;

/// Pointer motion below this distance counts as a click, not a drag.
const DRAG_THRESHOLD: f64 = 3.0;

/// The interaction state. Exactly one of these exists at any instant.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// No pointer interaction in progress.
    Idle,
    /// A node body is held; moves reposition the node.
    Dragging {
        node_id: String,
        /// Pointer offset from the node's origin at press time, so the node
        /// does not jump to the cursor.
        grab_offset: Position,
        /// Where the press happened; motion is measured against this.
        pressed_at: Position,
        /// Whether the pointer has exceeded the click threshold.
        moved: bool,
    },
    /// An output connector is held; a tracker line follows the pointer.
    Connecting { source_id: String, pointer: Position },
}

/// What a completed gesture amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Pointer-up with no interaction in progress.
    Released,
    /// A sub-threshold press-release on a node body.
    Selected(String),
    /// A drag finished; the node was repositioned along the way.
    Moved(String),
    /// A connection gesture landed on an input connector and the edge was
    /// accepted by the store.
    Connected { source: String, target: String },
    /// A connection gesture landed on an input connector but the store
    /// refused the edge (self-loop, duplicate). Surfaced for the toast layer.
    ConnectionRejected(FlowError),
    /// A connection gesture was released somewhere other than an input
    /// connector; no edge was created.
    ConnectionCancelled,
}

/// Turns raw pointer input into store mutations. Single-threaded and
/// synchronous; cancellation is simply releasing the pointer.
#[derive(Debug, Clone)]
pub struct CanvasController {
    state: Interaction,
}

impl CanvasController {
    pub fn new() -> Self {
        Self {
            state: Interaction::Idle,
        }
    }

    pub fn state(&self) -> &Interaction {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == Interaction::Idle
    }

    /// Pointer pressed at a canvas coordinate.
    ///
    /// On a node body (or its input connector) this selects the node and
    /// enters `Dragging`; dragging an already-selected node is allowed. On
    /// an output connector it enters `Connecting`. On empty canvas it clears
    /// the selection.
    pub fn pointer_down(&mut self, store: &mut FlowStore, at: Position) {
        match geometry::hit_test(store.flow(), at) {
            HitTarget::NodeBody(node_id) | HitTarget::InputConnector(node_id) => {
                let Some(node) = store.flow().node(&node_id) else {
                    return;
                };
                let grab_offset =
                    Position::new(at.x - node.position.x, at.y - node.position.y);
                store.select(Some(&node_id));
                self.state = Interaction::Dragging {
                    node_id,
                    grab_offset,
                    pressed_at: at,
                    moved: false,
                };
            }
            HitTarget::OutputConnector(source_id) => {
                self.state = Interaction::Connecting {
                    source_id,
                    pointer: at,
                };
            }
            HitTarget::Canvas => {
                store.select(None);
            }
        }
    }

    /// Pointer moved. Ignored while `Idle`; repositions the dragged node once
    /// past the click threshold; updates the tracker endpoint while
    /// connecting.
    pub fn pointer_move(&mut self, store: &mut FlowStore, at: Position) {
        match &mut self.state {
            Interaction::Idle => {}
            Interaction::Dragging {
                node_id,
                grab_offset,
                pressed_at,
                moved,
            } => {
                if !*moved && at.distance_to(*pressed_at) < DRAG_THRESHOLD {
                    return;
                }
                *moved = true;
                let position = Position::new(at.x - grab_offset.x, at.y - grab_offset.y);
                let node_id = node_id.clone();
                store.update_node(&node_id, NodeUpdate::position(position));
            }
            Interaction::Connecting { pointer, .. } => {
                *pointer = at;
            }
        }
    }

    /// Pointer released, anywhere. Always returns to `Idle`, including for
    /// coordinates outside the canvas bounds.
    ///
    /// A connection released over an input connector is handed to the store,
    /// which owns the structural rules; the controller does not pre-filter
    /// self-loops or duplicates.
    pub fn pointer_up(&mut self, store: &mut FlowStore, at: Position) -> GestureOutcome {
        match std::mem::replace(&mut self.state, Interaction::Idle) {
            Interaction::Idle => GestureOutcome::Released,
            Interaction::Dragging { node_id, moved, .. } => {
                if moved {
                    GestureOutcome::Moved(node_id)
                } else {
                    GestureOutcome::Selected(node_id)
                }
            }
            Interaction::Connecting { source_id, .. } => {
                match geometry::hit_test(store.flow(), at) {
                    HitTarget::InputConnector(target_id) => {
                        match store.add_edge(&source_id, &target_id) {
                            Ok(_) => GestureOutcome::Connected {
                                source: source_id,
                                target: target_id,
                            },
                            Err(err) => GestureOutcome::ConnectionRejected(err),
                        }
                    }
                    _ => GestureOutcome::ConnectionCancelled,
                }
            }
        }
    }

    /// The in-progress connection segment, from the source node's output
    /// connector to the current pointer, for rendering the tracker line.
    pub fn tracker_line(&self, store: &FlowStore) -> Option<(Position, Position)> {
        let Interaction::Connecting { source_id, pointer } = &self.state else {
            return None;
        };
        let source = store.flow().node(source_id)?;
        Some((geometry::output_connector(source), *pointer))
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}
