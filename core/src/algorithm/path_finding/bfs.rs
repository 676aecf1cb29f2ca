//! Breadth-first distance oracle
//!
//! Computes, for every node, the number of edges on a shortest path to a
//! target using only edges of positive capacity. Nodes that cannot reach the
//! target get `None`; callers must never read that as a distance of zero.
//!
//! # Algorithmic Complexity
//!
//! - **Time Complexity**: O(V + E)
//! - **Space Complexity**: O(V + E) for the incoming adjacency
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::FlowGraph;

/// Shortest residual distance provider
pub trait DistanceOracle {
    /// Distance in edges from each node to `target`, `None` when unreachable
    fn distances_to<G: FlowGraph + ?Sized>(&self, graph: &G, target: NodeId) -> Vec<Option<usize>>;
}

/// Unit-weight BFS over positive-capacity edges, run backwards from the target
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl DistanceOracle for BreadthFirstSearch {
    fn distances_to<G: FlowGraph + ?Sized>(&self, graph: &G, target: NodeId) -> Vec<Option<usize>> {
        let node_count = graph.node_count();
        let mut incoming = vec![Vec::new(); node_count];
        for edge in 0..graph.edge_count() {
            if graph.weight(edge) > 0 {
                let (from, to) = graph.endpoints(edge);
                incoming[to].push(from);
            }
        }

        let mut distances = vec![None; node_count];
        let mut queue = VecDeque::new();
        distances[target] = Some(0);
        queue.push_back(target);

        while let Some(node) = queue.pop_front() {
            let next = distances[node].map_or(0, |d| d + 1);
            for &from in &incoming[node] {
                if distances[from].is_none() {
                    distances[from] = Some(next);
                    queue.push_back(from);
                }
            }
        }

        distances
    }
}
