//! Flow Correctness Verification
//!
//! Independent checks for engine output: capacity feasibility, conservation
//! at interior nodes, label admissibility on the residual graph, and
//! min-cut/max-flow agreement. [`reference_max_flow`] is a plain
//! Edmonds-Karp over the original edges, used as ground truth in tests.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use thiserror::Error;

use crate::algorithm::traits::{Capacity, EdgeId, Height, NodeId};
use crate::data_structures::graph::FlowGraph;
use crate::execution::tracer::ResidualView;

/// Verification failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Expected {expected} edge flows, got {actual}")]
    FlowCount { expected: usize, actual: usize },

    #[error("Edge {edge} carries {flow} outside [0, {capacity}]")]
    CapacityViolation {
        edge: EdgeId,
        flow: Capacity,
        capacity: Capacity,
    },

    #[error("Node {node} has net inflow {imbalance}")]
    ConservationViolation { node: NodeId, imbalance: Capacity },

    #[error("Residual arc {tail} -> {head} is too steep: heights {tail_height} and {head_height}")]
    InvalidLabeling {
        tail: NodeId,
        head: NodeId,
        tail_height: Height,
        head_height: Height,
    },

    #[error("Cut must contain the source and exclude the sink")]
    CutSeparation,

    #[error("Cut capacity {cut} differs from flow value {value}")]
    CutMismatch { cut: Capacity, value: Capacity },
}

/// Every original edge carries flow within `[0, weight]`
pub fn check_feasibility<G: FlowGraph + ?Sized>(
    graph: &G,
    flows: &[Capacity],
) -> Result<(), VerificationError> {
    if flows.len() != graph.edge_count() {
        return Err(VerificationError::FlowCount {
            expected: graph.edge_count(),
            actual: flows.len(),
        });
    }

    for (edge, (&flow, &capacity)) in flows.iter().zip(graph.weights()).enumerate() {
        if flow < 0 || flow > capacity {
            return Err(VerificationError::CapacityViolation {
                edge,
                flow,
                capacity,
            });
        }
    }
    Ok(())
}

/// Inflow equals outflow at every node but the terminals; returns the net
/// inflow at the sink
pub fn check_conservation<G: FlowGraph + ?Sized>(
    graph: &G,
    flows: &[Capacity],
    source: NodeId,
    sink: NodeId,
) -> Result<Capacity, VerificationError> {
    let mut balance = vec![0; graph.node_count()];
    for (edge, &flow) in flows.iter().enumerate() {
        let (from, to) = graph.endpoints(edge);
        balance[from] -= flow;
        balance[to] += flow;
    }

    if let Some((node, &imbalance)) = balance
        .iter()
        .enumerate()
        .find(|&(node, &imbalance)| node != source && node != sink && imbalance != 0)
    {
        return Err(VerificationError::ConservationViolation { node, imbalance });
    }
    Ok(balance[sink])
}

/// `height[u] <= height[v] + 1` on every residual arc `u -> v`
pub fn check_admissibility(view: &dyn ResidualView) -> Result<(), VerificationError> {
    let mut violation = None;
    view.for_each_residual_arc(&mut |tail, head, _| {
        let (tail_height, head_height) = (view.height(tail), view.height(head));
        if violation.is_none() && tail_height > head_height + 1 {
            violation = Some(VerificationError::InvalidLabeling {
                tail,
                head,
                tail_height,
                head_height,
            });
        }
    });
    violation.map_or(Ok(()), Err)
}

/// The capacity of edges leaving `cut` equals `value`
pub fn verify_min_cut<G: FlowGraph + ?Sized>(
    graph: &G,
    cut: &[NodeId],
    source: NodeId,
    sink: NodeId,
    value: Capacity,
) -> Result<(), VerificationError> {
    let mut inside = vec![false; graph.node_count()];
    for &node in cut {
        inside[node] = true;
    }
    if !inside[source] || inside[sink] {
        return Err(VerificationError::CutSeparation);
    }

    let cut_capacity = (0..graph.edge_count())
        .filter(|&edge| {
            let (from, to) = graph.endpoints(edge);
            inside[from] && !inside[to]
        })
        .map(|edge| graph.weight(edge))
        .sum();

    if cut_capacity != value {
        return Err(VerificationError::CutMismatch {
            cut: cut_capacity,
            value,
        });
    }
    Ok(())
}

/// Edmonds-Karp maximum flow over the original directed edges
pub fn reference_max_flow<G: FlowGraph + ?Sized>(graph: &G, source: NodeId, sink: NodeId) -> Capacity {
    // Arc 2i is edge i, arc 2i + 1 its zero-capacity reverse
    let node_count = graph.node_count();
    let mut heads = Vec::with_capacity(2 * graph.edge_count());
    let mut residual = Vec::with_capacity(2 * graph.edge_count());
    let mut outgoing = vec![Vec::new(); node_count];
    for edge in 0..graph.edge_count() {
        let (from, to) = graph.endpoints(edge);
        outgoing[from].push(heads.len());
        heads.push(to);
        residual.push(graph.weight(edge));
        outgoing[to].push(heads.len());
        heads.push(from);
        residual.push(0);
    }

    let mut value = 0;
    loop {
        let mut parent: Vec<Option<usize>> = vec![None; node_count];
        let mut seen = vec![false; node_count];
        let mut queue = VecDeque::from([source]);
        seen[source] = true;

        while let Some(node) = queue.pop_front() {
            if node == sink {
                break;
            }
            for &arc in &outgoing[node] {
                let next = heads[arc];
                if !seen[next] && residual[arc] > 0 {
                    seen[next] = true;
                    parent[next] = Some(arc);
                    queue.push_back(next);
                }
            }
        }

        if !seen[sink] {
            return value;
        }

        let mut path = Vec::new();
        let mut node = sink;
        while let Some(arc) = parent[node] {
            path.push(arc);
            node = heads[arc ^ 1];
        }

        let bottleneck = path.iter().map(|&arc| residual[arc]).min().unwrap_or(0);
        for &arc in &path {
            residual[arc] -= bottleneck;
            residual[arc ^ 1] += bottleneck;
        }
        value += bottleneck;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::{MaxFlowAlgorithm, MaxFlowSolver, PreflowPush, SolverConfig};
    use crate::algorithm::graph::push_relabel::HeuristicPushRelabel;
    use crate::data_structures::graph::EdgeListGraph;
    use crate::execution::tracer::TraceEvent;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn random_graph(rng: &mut StdRng) -> EdgeListGraph {
        let node_count = rng.gen_range(2..=12);
        let density = rng.gen_range(0.1..0.6);
        let mut graph = EdgeListGraph::new(node_count);
        for from in 0..node_count {
            for to in 0..node_count {
                if from != to && rng.gen_bool(density) {
                    graph.add_edge(from, to, rng.gen_range(0..=20)).unwrap();
                }
            }
        }
        graph.prepare_adjacency(true);
        graph
    }

    fn terminals(rng: &mut StdRng, node_count: usize) -> (NodeId, NodeId) {
        let source = rng.gen_range(0..node_count);
        let sink = (source + rng.gen_range(1..node_count)) % node_count;
        (source, sink)
    }

    #[test]
    fn test_reference_on_textbook_network() {
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
        assert_eq!(reference_max_flow(&graph, 0, 5), 23);
        assert_eq!(reference_max_flow(&graph, 5, 0), 0);
    }

    #[test]
    fn test_detects_violations() {
        let mut graph = EdgeListGraph::new(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, 3).unwrap();

        assert_eq!(
            check_feasibility(&graph, &[5, 4]),
            Err(VerificationError::CapacityViolation {
                edge: 1,
                flow: 4,
                capacity: 3
            })
        );
        assert!(matches!(
            check_feasibility(&graph, &[1]),
            Err(VerificationError::FlowCount { .. })
        ));
        assert_eq!(
            check_conservation(&graph, &[3, 2], 0, 2),
            Err(VerificationError::ConservationViolation { node: 1, imbalance: 1 })
        );
        assert_eq!(check_conservation(&graph, &[3, 3], 0, 2), Ok(3));
        assert_eq!(verify_min_cut(&graph, &[0, 1], 0, 2, 3), Ok(()));
        assert_eq!(
            verify_min_cut(&graph, &[0], 0, 2, 3),
            Err(VerificationError::CutMismatch { cut: 5, value: 3 })
        );
        assert_eq!(
            verify_min_cut(&graph, &[1, 2], 0, 2, 3),
            Err(VerificationError::CutSeparation)
        );
    }

    #[test]
    fn test_engines_match_reference_on_random_graphs() {
        init_logging();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let graph = random_graph(&mut rng);
            let (source, sink) = terminals(&mut rng, graph.node_count());
            let expected = reference_max_flow(&graph, source, sink);

            for config in [
                SolverConfig {
                    algorithm: MaxFlowAlgorithm::PreflowPush,
                    ..SolverConfig::default()
                },
                SolverConfig::default(),
                SolverConfig {
                    global_relabel: false,
                    ..SolverConfig::default()
                },
                SolverConfig {
                    relabel_interval: Some(1),
                    ..SolverConfig::default()
                },
            ] {
                let result = MaxFlowSolver::with_config(config)
                    .solve(&graph, source, sink)
                    .unwrap();

                assert_eq!(result.max_flow, expected, "{:?} on {:?}", config, graph.records());
                check_feasibility(&graph, &result.edge_flows).unwrap();
                assert_eq!(
                    check_conservation(&graph, &result.edge_flows, source, sink),
                    Ok(expected)
                );
                verify_min_cut(&graph, &result.min_cut, source, sink, expected).unwrap();
            }
        }
    }

    #[test]
    fn test_labels_valid_after_every_event() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let graph = random_graph(&mut rng);
            let (source, sink) = terminals(&mut rng, graph.node_count());
            let mut check = |_event: &TraceEvent, view: &dyn ResidualView| {
                check_admissibility(view).unwrap();
            };

            let classic = PreflowPush::new()
                .run_traced(&graph, source, sink, &mut check)
                .unwrap();
            let heuristic = HeuristicPushRelabel::new(true)
                .run_traced(&graph, source, sink, &mut check)
                .unwrap();
            assert_eq!(classic.value, heuristic.value());
        }
    }
}
