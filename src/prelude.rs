//! Prelude module for convenient imports
//!
//! Re-exports the types needed to drive a full editing session: the data
//! model, the store, the canvas controller, the preview renderer, and the
//! export/import functions.
//!
//! # Example
//!
//! ```rust
//! use callflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut store = FlowStore::new();
//! let menu_id = store.add_node(NodeKind::Menu).id.clone();
//! store.add_edge(START_NODE_ID, &menu_id)?;
//!
//! let tree = PreviewTree::build(store.flow())?;
//! println!("{}", PreviewFormatter::format(&tree));
//!
//! let json = export_flow(store.flow())?;
//! let restored = import_flow(&json)?;
//! assert_eq!(&restored, store.flow());
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Data model
pub use crate::flow::{
    CallFlow, CallFlowEdge, CallFlowNode, ConditionKind, Department, IdGenerator, InputMode,
    MenuOption, NodeFactory, NodeKind, NodePayload, Position, START_NODE_ID,
};

// Mutation store
pub use crate::store::{FlowStore, MetadataPatch, NodeUpdate, ViewMode};

// Canvas interaction
pub use crate::canvas::{CanvasController, GestureOutcome, HitTarget, Interaction};

// Preview rendering
pub use crate::preview::{PreviewFormatter, PreviewNode, PreviewTree};

// Export / import
pub use crate::export::{export_filename, export_flow, import_flow, slugify};

// Error types
pub use crate::error::{FlowError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
