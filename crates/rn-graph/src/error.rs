//! Graph-specific error types.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph mutation and rendering errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this identifier is already present.
    #[error("node '{id}' already exists")]
    DuplicateNode { id: String },

    /// The identifier does not name a node in the graph.
    #[error("node '{id}' not found")]
    NotFound { id: String },

    /// A rendering order referenced a node the graph does not hold.
    #[error("render order references unknown node '{id}'")]
    UnknownNodeInOrder { id: String },
}
