//! Preflow core - push-relabel maximum flow
//!
//! Two engines compute maximum flows over a directed graph with integer
//! capacities:
//!
//! - [`PreflowPush`]: classic FIFO preflow-push over the original edges,
//!   seeded with exact distances to the sink;
//! - [`HeuristicPushRelabel`]: push-relabel over a symmetric
//!   [`ResidualNetwork`], picking the lowest residual neighbour at each step
//!   and periodically recomputing labels with a wave-tagged global relabel.
//!
//! [`MaxFlowSolver`] selects between them from a [`SolverConfig`].
//!
//! ```
//! use preflow_core::{EdgeListGraph, FlowGraph, MaxFlowSolver};
//!
//! let mut graph = EdgeListGraph::new(3);
//! graph.add_edge(0, 1, 7).unwrap();
//! graph.add_edge(1, 2, 3).unwrap();
//! graph.prepare_adjacency(true);
//!
//! let result = MaxFlowSolver::default().solve(&graph, 0, 2).unwrap();
//! assert_eq!(result.max_flow, 3);
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod execution;
pub mod optimization;
pub mod validation;

pub use crate::algorithm::graph::{
    HeuristicConfig, HeuristicPushRelabel, MaxFlowAlgorithm, MaxFlowResult, MaxFlowSolver,
    PreflowPush, PreflowPushFlow, ResidualFlow, ResidualNetwork, SolverConfig,
};
pub use crate::algorithm::traits::{
    Algorithm, AlgorithmError, Capacity, EdgeId, FlowMetrics, NodeId,
};
pub use crate::data_structures::graph::{AdjacencyMode, EdgeListGraph, FlowGraph, GraphError};
pub use crate::execution::{ExecutionHistory, ExecutionTracer, NoopTracer, ResidualView, TraceEvent};
