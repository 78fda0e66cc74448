//! # CLI Errors

use colgraph_core::GraphError;
use thiserror::Error;

/// Errors surfaced by the colgraph binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file is not valid TOML or does not match the dataset layout.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The dataset file exceeds the size limit.
    #[error("Dataset file size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// A `[config]` capacity exceeds the reservation limit.
    #[error("Dataset {field} {requested} exceeds maximum allowed {max}")]
    CapacityTooLarge {
        field: &'static str,
        requested: usize,
        max: usize,
    },

    /// Two vertex records share a user id.
    #[error("Duplicate vertex id '{0}'")]
    DuplicateVertex(String),

    /// A record or argument names a vertex id that the dataset does not define.
    #[error("Unknown vertex id '{0}'")]
    UnknownVertex(String),

    /// The graph engine rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
