//! # Callflow - IVR Call-Flow Designer Core
//!
//! **Callflow** is the authoring core of an interactive call-flow designer:
//! a typed node-and-edge graph model for Interactive Voice Response (IVR)
//! scripts, an invariant-guarded mutation store, a pointer-driven canvas
//! interaction state machine, a cycle-safe preview renderer, and validating
//! JSON import/export. It authors and validates the structure a separate
//! execution engine later consumes; it does not run calls.
//!
//! ## Core Workflow
//!
//! 1. **Open a session**: create a [`store::FlowStore`] over a fresh default
//!    flow (a lone start node) or adopt a host-supplied [`flow::CallFlow`].
//! 2. **Mutate**: add nodes, edit payloads, and connect steps through the
//!    store, directly (list view, property editor) or mediated by the
//!    [`canvas::CanvasController`] (drag, connect gestures). Every operation
//!    either fully succeeds or rejects without touching the aggregate.
//! 3. **Review**: derive a read-only [`preview::PreviewTree`] from the
//!    current snapshot; cycles render as reference leaves.
//! 4. **Persist**: hand the aggregate back to the host via
//!    [`store::FlowStore::save`], or [`export::export_flow`] it as a
//!    pretty-printed JSON document; [`export::import_flow`] is the
//!    validating inverse.
//!
//! ## Quick Start
//!
//! ```rust
//! use callflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A fresh session starts with only the protected start node.
//!     let mut store = FlowStore::new();
//!     assert_eq!(store.flow().nodes.len(), 1);
//!
//!     // Author a small script: greeting -> menu -> transfer.
//!     let menu_id = store.add_node(NodeKind::Menu).id.clone();
//!     let transfer_id = store.add_node(NodeKind::Transfer).id.clone();
//!     store.add_edge(START_NODE_ID, &menu_id)?;
//!     store.add_edge(&menu_id, &transfer_id)?;
//!
//!     // The start node is the entry point and cannot be deleted.
//!     assert_eq!(
//!         store.delete_node(START_NODE_ID),
//!         Err(FlowError::StartNodeProtected)
//!     );
//!
//!     // Review the flow as a tree, then export it for the host.
//!     let tree = PreviewTree::build(store.flow())?;
//!     println!("{}", PreviewFormatter::format(&tree));
//!     let json = export_flow(store.flow())?;
//!     println!("download as {}", export_filename(store.flow()));
//!
//!     // Import validates the document before accepting it.
//!     let restored = import_flow(&json)?;
//!     assert_eq!(&restored, store.flow());
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod editor;
pub mod error;
pub mod export;
pub mod flow;
pub mod prelude;
pub mod preview;
pub mod store;
