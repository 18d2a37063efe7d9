//! Error types for the GraphNexus library.

use thiserror::Error;

/// All errors that can occur while loading or querying a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A line could not be parsed (wrong token count, unparsable integer).
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// An edge carried a negative weight.
    #[error("Negative weight {weight} on edge ({u}, {v})")]
    InvalidWeight { u: String, v: String, weight: i64 },

    /// The declared vertex count disagrees with the vertices actually loaded.
    #[error("Declared {declared} vertices but loaded {actual}")]
    VertexCountMismatch { declared: usize, actual: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Edge and weight lists have incompatible lengths.
    #[error("Edge list holds {edges} endpoints but {weights} weights were given")]
    SizeMismatch { edges: usize, weights: usize },

    /// A vertex named by the caller is not in the graph.
    #[error("Vertex {0:?} not found")]
    UnknownVertex(String),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience result type for GraphNexus operations.
pub type GraphResult<T> = Result<T, GraphError>;
