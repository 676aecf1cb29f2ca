//! Parallel batch solving
//!
//! Each engine run is strictly sequential. Independent terminal pairs over
//! the same read-only graph share nothing mutable, so a batch fans out over
//! rayon's work-stealing pool with one solver invocation per pair.
//!
//! Results come back in input order regardless of completion order.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::algorithm::graph::max_flow::{MaxFlowResult, MaxFlowSolver, SolverConfig};
use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::graph::FlowGraph;

/// Solve every `(source, sink)` pair in parallel
pub fn solve_batch<G>(
    graph: &G,
    pairs: &[(NodeId, NodeId)],
    config: SolverConfig,
) -> Vec<Result<MaxFlowResult, AlgorithmError>>
where
    G: FlowGraph + Sync + ?Sized,
{
    let started = Instant::now();
    let solver = MaxFlowSolver::with_config(config);

    let results: Vec<_> = pairs
        .par_iter()
        .map(|&(source, sink)| solver.solve(graph, source, sink))
        .collect();

    info!(
        "Solved {} terminal pairs in {:?} on {} threads",
        pairs.len(),
        started.elapsed(),
        rayon::current_num_threads()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::MaxFlowAlgorithm;
    use crate::data_structures::graph::EdgeListGraph;

    fn clrs_graph() -> EdgeListGraph {
        let mut graph = EdgeListGraph::new(6);
        for (from, to, capacity) in [
            (0, 1, 16),
            (0, 2, 13),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ] {
            graph.add_edge(from, to, capacity).unwrap();
        }
        graph.prepare_adjacency(true);
        graph
    }

    #[test]
    fn test_batch_matches_sequential() {
        let graph = clrs_graph();
        let pairs = [(0, 5), (0, 3), (1, 5), (5, 0), (2, 4)];

        for algorithm in [MaxFlowAlgorithm::PreflowPush, MaxFlowAlgorithm::HeuristicPushRelabel] {
            let config = SolverConfig {
                algorithm,
                ..SolverConfig::default()
            };
            let batch = solve_batch(&graph, &pairs, config);
            let solver = MaxFlowSolver::with_config(config);

            assert_eq!(batch.len(), pairs.len());
            for (result, &(source, sink)) in batch.iter().zip(&pairs) {
                let expected = solver.solve(&graph, source, sink).unwrap();
                assert_eq!(result.as_ref().unwrap().max_flow, expected.max_flow);
            }
            assert_eq!(batch[0].as_ref().unwrap().max_flow, 23);
            assert_eq!(batch[3].as_ref().unwrap().max_flow, 0);
        }
    }

    #[test]
    fn test_batch_reports_errors_per_pair() {
        let graph = clrs_graph();
        let results = solve_batch(&graph, &[(0, 5), (3, 3), (0, 9)], SolverConfig::default());

        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err(), &AlgorithmError::SameTerminals(3));
        assert!(matches!(
            results[2],
            Err(AlgorithmError::InvalidNode { node: 9, .. })
        ));
    }
}
