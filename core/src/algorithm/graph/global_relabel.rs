//! Global relabeling via wave-tagged breadth-first colouring
//!
//! Recomputes exact residual distances and stamps every reached node with a
//! fresh wave id, so that the heuristic engine can tell which labels are
//! still trustworthy.
//!
//! 1. Pass one colours nodes that can reach the sink, rooted at the sink with
//!    level 0. A node `n` is reached from `cur` when the arc `n -> cur` still
//!    has residual capacity.
//! 2. If some nodes stay uncoloured, pass two does the same from the source
//!    at level `V`, touching only nodes pass one missed.
//! 3. Nodes reached by neither pass can reach neither terminal; they are
//!    lifted to at least `2V` and keep their old wave.
//!
//! Labels are only ever raised. Raising every node to `max(old, exact)` keeps
//! `height[u] <= height[v] + 1` on every residual arc `u -> v`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use log::debug;

use crate::algorithm::graph::residual::ResidualNetwork;
use crate::algorithm::state::SolverState;
use crate::algorithm::traits::{Capacity, Height, NodeId, Wave};

/// Run one global relabel; returns how many nodes were coloured
pub fn global_relabel(
    network: &ResidualNetwork,
    residuals: &[Capacity],
    state: &mut SolverState,
    source: NodeId,
    sink: NodeId,
) -> usize {
    state.current_wave += 1;
    let wave = state.current_wave;
    let node_count = network.node_count();
    let mut colored = vec![false; node_count];

    let mut count = bfs_coloring(network, residuals, state, &mut colored, sink, 0, wave);
    if count < node_count {
        count += bfs_coloring(network, residuals, state, &mut colored, source, node_count, wave);
    }

    if count < node_count {
        let ceiling = 2 * node_count;
        for node in (0..node_count).filter(|&node| !colored[node]) {
            state.raise_height(node, ceiling);
        }
    }

    debug!(
        "Global relabel wave {}: {} of {} nodes coloured",
        wave, count, node_count
    );
    count
}

/// Reverse-residual BFS from `root`, raising labels to `start_level + depth`
fn bfs_coloring(
    network: &ResidualNetwork,
    residuals: &[Capacity],
    state: &mut SolverState,
    colored: &mut [bool],
    root: NodeId,
    start_level: Height,
    wave: Wave,
) -> usize {
    if colored[root] {
        return 0;
    }

    colored[root] = true;
    state.raise_height(root, start_level);
    state.wave[root] = wave;
    let mut count = 1;

    let mut queue = VecDeque::new();
    queue.push_back((root, start_level));

    while let Some((node, level)) = queue.pop_front() {
        for &arc in network.arcs(node) {
            let neighbour = network.head(arc);
            if colored[neighbour] || residuals[network.reverse(arc)] <= 0 {
                continue;
            }

            colored[neighbour] = true;
            state.raise_height(neighbour, level + 1);
            state.wave[neighbour] = wave;
            queue.push_back((neighbour, level + 1));
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::{EdgeListGraph, FlowGraph};

    fn network(node_count: usize, edges: &[(NodeId, NodeId, Capacity)]) -> ResidualNetwork {
        let mut graph = EdgeListGraph::new(node_count);
        for &(from, to, capacity) in edges {
            graph.add_edge(from, to, capacity).unwrap();
        }
        graph.prepare_adjacency(true);
        ResidualNetwork::build(&graph).unwrap()
    }

    #[test]
    fn test_exact_distances_from_sink() {
        // 0 -> 1 -> 2 -> 3, sink 3
        let network = network(4, &[(0, 1, 5), (1, 2, 5), (2, 3, 5)]);
        let residuals = network.initial_residuals().to_vec();
        let mut state = SolverState::new(4);
        state.heights[0] = 4;

        let colored = global_relabel(&network, &residuals, &mut state, 0, 3);

        assert_eq!(colored, 4);
        assert_eq!(state.heights, vec![4, 2, 1, 0]);
        assert_eq!(state.current_wave, 1);
        assert!(state.wave.iter().all(|&w| w == 1));
    }

    #[test]
    fn test_source_pass_and_unreached_nodes() {
        // Source 0 saturated into 1; 1 can only go back to 0. Node 2 is isolated, sink 3.
        let network = network(4, &[(0, 1, 5), (2, 3, 1)]);
        let mut residuals = network.initial_residuals().to_vec();
        residuals[0] = 0;
        residuals[network.reverse(0)] = 5;
        let mut state = SolverState::new(4);
        state.heights[0] = 4;

        let colored = global_relabel(&network, &residuals, &mut state, 0, 3);

        // Pass one reaches 3 and 2; pass two reaches 0 and 1
        assert_eq!(colored, 4);
        assert_eq!(state.heights[2], 1);
        assert_eq!(state.heights[0], 4);
        assert_eq!(state.heights[1], 5);
    }

    #[test]
    fn test_unreached_nodes_are_lifted_without_wave() {
        // 2 -> 1 only; node 2 reaches nothing that matters once 2->1 is drained
        let network = network(4, &[(0, 3, 1), (2, 1, 1)]);
        let mut residuals = network.initial_residuals().to_vec();
        residuals[1] = 0;
        residuals[network.reverse(1)] = 1;
        let mut state = SolverState::new(4);
        state.heights[0] = 4;

        global_relabel(&network, &residuals, &mut state, 0, 3);

        // 1 -> 2 is residual but neither reaches a terminal
        assert_eq!(state.heights[1], 8);
        assert_eq!(state.heights[2], 8);
        assert_eq!(state.wave[1], 0);
        assert_eq!(state.wave[0], 1);
    }

    #[test]
    fn test_heights_never_lowered() {
        let network = network(3, &[(0, 1, 2), (1, 2, 2)]);
        let residuals = network.initial_residuals().to_vec();
        let mut state = SolverState::new(3);
        state.heights = vec![3, 5, 0];

        global_relabel(&network, &residuals, &mut state, 0, 2);
        assert_eq!(state.heights, vec![3, 5, 0]);

        global_relabel(&network, &residuals, &mut state, 0, 2);
        assert_eq!(state.current_wave, 2);
        assert_eq!(state.wave[1], 2);
    }
}
