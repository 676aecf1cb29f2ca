//! Core algorithm trait definitions for the preflow engines
//!
//! This module establishes the shared vocabulary of the crate: dense node and
//! edge identifiers, the signed capacity type, the string-parameter
//! `Algorithm` interface used by solver front ends, and the error taxonomy of
//! the algorithm layer.
//!
//! # Key Design Principles
//! - Dense integer identifiers; no object identity beyond the index
//! - Signed capacities so that source deficits can be recorded as excess
//! - Every fallible public operation returns `Result<_, AlgorithmError>`

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Dense node identifier in `[0, V)`
pub type NodeId = usize;

/// Dense edge identifier; original ids come first, synthesized ids follow
pub type EdgeId = usize;

/// Capacity, residual, flow and excess values
pub type Capacity = i64;

/// Distance label used by push-relabel
pub type Height = usize;

/// Global relabel pass tag
pub type Wave = u64;

/// Comprehensive error types for algorithm operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid node: {node} (graph has {node_count} nodes)")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("Source and sink must differ, both are {0}")]
    SameTerminals(NodeId),

    #[error("Adjacency lists must be prepared with undirected neighbours before solving")]
    AdjacencyNotPrepared,

    #[error("Residual network is malformed: edge {edge} has no reverse edge")]
    UnresolvedReverse { edge: EdgeId },

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Algorithm execution metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Number of push operations
    pub push_operations: usize,
    /// Number of relabel operations
    pub relabel_operations: usize,
    /// Number of global relabels
    pub global_relabels: usize,
    /// Number of node processing rounds taken from the active queue
    pub nodes_processed: usize,
    /// Nodes left holding excess without any residual arc
    pub stranded_nodes: usize,
    /// Pushes postponed by the wave check
    pub deferred_pushes: usize,
    /// Wall-clock time spent inside the engine
    pub execution_time: Duration,
}

/// Main algorithm trait for solver front ends
///
/// Parameters travel as strings so that front ends can be configured from
/// command lines or key/value files without knowing the concrete solver.
pub trait Algorithm: Debug + Send + Sync {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g. max_flow)
    fn category(&self) -> &'static str;

    /// Returns a one-paragraph description including complexity
    fn description(&self) -> &'static str;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String>;

    /// Returns every parameter with its current value
    fn get_parameters(&self) -> HashMap<String, String>;
}

/// Returns `Ok(())` when `node` is a valid id for a graph with `node_count` nodes
pub(crate) fn check_node(node: NodeId, node_count: usize) -> Result<(), AlgorithmError> {
    if node < node_count {
        Ok(())
    } else {
        Err(AlgorithmError::InvalidNode { node, node_count })
    }
}

/// Validates a terminal pair
pub(crate) fn check_terminals(
    source: NodeId,
    sink: NodeId,
    node_count: usize,
) -> Result<(), AlgorithmError> {
    check_node(source, node_count)?;
    check_node(sink, node_count)?;
    if source == sink {
        return Err(AlgorithmError::SameTerminals(source));
    }
    Ok(())
}
