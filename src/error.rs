use thiserror::Error;

/// Structural rejections raised at the mutation boundary.
///
/// Every `FlowStore` operation either fully succeeds or returns one of these
/// and leaves the aggregate untouched. The hosting UI renders them as toasts;
/// nothing here is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("The start node is the entry point of the flow and cannot be deleted")]
    StartNodeProtected,

    #[error("Edge endpoint references unknown node '{0}'")]
    UnknownNode(String),

    #[error("Node '{0}' cannot be connected to itself")]
    SelfLoop(String),

    #[error("An edge from '{source_id}' to '{target_id}' already exists")]
    DuplicateEdge {
        source_id: String,
        target_id: String,
    },

    #[error("Flow has no start node '{0}'")]
    MissingStartNode(&'static str),
}

/// Errors that can occur while importing a flow document.
///
/// Validation runs after parsing and before the aggregate is handed out, so a
/// document is either accepted whole or rejected with the first violation
/// found; the current flow is never replaced with a partially valid one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(String),

    #[error("Imported flow has no start node '{0}'")]
    MissingStartNode(&'static str),

    #[error("Imported flow contains duplicate node id '{0}'")]
    DuplicateNodeId(String),

    #[error("Edge '{edge_id}' references unknown node '{node_id}'")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("Edge '{0}' connects a node to itself")]
    SelfLoop(String),

    #[error("Imported flow contains a duplicate edge from '{source_id}' to '{target_id}'")]
    DuplicateEdge {
        source_id: String,
        target_id: String,
    },
}
