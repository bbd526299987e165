use thiserror::Error;

use crate::color::VertexId;

/** errors raised while building instances, reading configuration or exporting results.
The coloring algorithms themselves never fail on a well-formed instance.
*/
#[derive(Error, Debug)]
pub enum ColoringError {
    /// unknown graph generator name
    #[error("unknown graph type '{0}' (valid: random, grid, complete, tree, dimacs)")]
    UnknownGraphType(String),

    /// edge referencing a vertex outside the instance (or a self loop)
    #[error("invalid edge ({u},{v}) in a graph with {n} vertices")]
    InvalidEdge {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// number of vertices of the graph
        n: usize
    },

    /// generator parameter out of its domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// malformed DIMACS instance
    #[error("parse error: {0}")]
    Parse(String),

    /// inconsistent admission policy
    #[error("configuration error: {0}")]
    Config(String),

    /// file access
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// results store
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON configuration or statistics
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// result type of the crate
pub type Result<T> = std::result::Result<T, ColoringError>;
