//! # Storage
//!
//! The tables a graph owns:
//! - `columnar`: one column per property slot
//! - `identity`: dense index → user id, edge → endpoints
//! - `adjacency`: vertex → outgoing edges

pub mod adjacency;
pub mod columnar;
pub mod identity;

pub use adjacency::AdjacencyIndex;
pub use columnar::ColumnStore;
pub use identity::{EndpointTable, IdentityTable};
