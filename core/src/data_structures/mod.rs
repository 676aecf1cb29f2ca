//! Graph storage consumed by the engines

pub mod graph;

pub use self::graph::{AdjacencyMode, EdgeListGraph, EdgeRecord, FlowGraph, GraphError};
