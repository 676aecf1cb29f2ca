//! Graph adapter for the flow engines
//!
//! The engines never touch storage directly: they read topology and weights
//! through the [`FlowGraph`] trait. Any adjacency-list or edge-list backing can
//! implement it. [`EdgeListGraph`] is the stock implementation: a dense edge
//! list with a hash lookup from `(source, target)` to edge id, plus neighbour
//! lists that are materialised on demand by [`FlowGraph::prepare_adjacency`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::traits::{Capacity, EdgeId, NodeId};

/// How neighbour lists were prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjacencyMode {
    /// Outgoing neighbours only
    Directed,
    /// Outgoing neighbours followed by incoming-only neighbours
    Undirected,
}

/// Read-only topology and weight oracle consumed by the flow engines
///
/// Neighbour queries are only meaningful after `prepare_adjacency`; the
/// engines check [`FlowGraph::adjacency_mode`] before running.
pub trait FlowGraph {
    /// Number of nodes `V`
    fn node_count(&self) -> usize;

    /// Number of original edges
    fn edge_count(&self) -> usize;

    /// Edge count after synthesizing a reverse for every edge lacking one
    fn undirected_edge_count(&self) -> usize;

    /// Builds neighbour lists; with `include_undirected` incoming neighbours
    /// are appended after the outgoing ones
    fn prepare_adjacency(&mut self, include_undirected: bool);

    /// Mode of the last `prepare_adjacency` call, if any
    fn adjacency_mode(&self) -> Option<AdjacencyMode>;

    /// Ordered neighbour ids of `node`
    fn neighbours(&self, node: NodeId) -> &[NodeId];

    /// Original edge id for `source -> target`, `None` when no such edge exists
    fn edge_id(&self, source: NodeId, target: NodeId) -> Option<EdgeId>;

    /// Capacity of an original edge
    fn weight(&self, edge: EdgeId) -> Capacity;

    /// Capacities of all original edges, indexed by edge id
    fn weights(&self) -> &[Capacity];

    /// `(source, target)` of an original edge
    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId);
}

/// Graph construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("Self loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Duplicate edge {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("Negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: NodeId,
        to: NodeId,
        capacity: Capacity,
    },
}

/// Serializable description of one directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub capacity: Capacity,
}

/// Edge-list graph with `(source, target)` lookup
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    node_count: usize,
    endpoints: Vec<(NodeId, NodeId)>,
    weights: Vec<Capacity>,
    lookup: HashMap<(NodeId, NodeId), EdgeId>,
    neighbours: Vec<Vec<NodeId>>,
    mode: Option<AdjacencyMode>,
}

impl EdgeListGraph {
    /// Create an edgeless graph with `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            ..Self::default()
        }
    }

    /// Build a graph from edge records; ids follow record order
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new(node_count);
        for record in edges {
            graph.add_edge(record.source, record.target, record.capacity)?;
        }
        Ok(graph)
    }

    /// Add a directed edge and return its dense id
    ///
    /// Adding an edge invalidates previously prepared neighbour lists.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        capacity: Capacity,
    ) -> Result<EdgeId, GraphError> {
        for node in [source, target] {
            if node >= self.node_count {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if capacity < 0 {
            return Err(GraphError::NegativeCapacity {
                from: source,
                to: target,
                capacity,
            });
        }
        if self.lookup.contains_key(&(source, target)) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: target,
            });
        }

        let id = self.endpoints.len();
        self.endpoints.push((source, target));
        self.weights.push(capacity);
        self.lookup.insert((source, target), id);
        self.neighbours.clear();
        self.mode = None;
        Ok(id)
    }

    /// All edges as serializable records, in id order
    pub fn records(&self) -> Vec<EdgeRecord> {
        self.endpoints
            .iter()
            .zip(&self.weights)
            .map(|(&(source, target), &capacity)| EdgeRecord {
                source,
                target,
                capacity,
            })
            .collect()
    }
}

impl FlowGraph for EdgeListGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    fn undirected_edge_count(&self) -> usize {
        let missing = self
            .endpoints
            .iter()
            .filter(|&&(source, target)| !self.lookup.contains_key(&(target, source)))
            .count();
        self.endpoints.len() + missing
    }

    fn prepare_adjacency(&mut self, include_undirected: bool) {
        let mut neighbours = vec![Vec::new(); self.node_count];
        for &(source, target) in &self.endpoints {
            neighbours[source].push(target);
        }

        if include_undirected {
            for &(source, target) in &self.endpoints {
                // Antiparallel pairs are already listed as outgoing neighbours
                if !self.lookup.contains_key(&(target, source)) {
                    neighbours[target].push(source);
                }
            }
        }

        self.neighbours = neighbours;
        self.mode = Some(if include_undirected {
            AdjacencyMode::Undirected
        } else {
            AdjacencyMode::Directed
        });
    }

    fn adjacency_mode(&self) -> Option<AdjacencyMode> {
        self.mode
    }

    fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.neighbours.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn edge_id(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.lookup.get(&(source, target)).copied()
    }

    fn weight(&self, edge: EdgeId) -> Capacity {
        self.weights[edge]
    }

    fn weights(&self) -> &[Capacity] {
        &self.weights
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.endpoints[edge]
    }
}
