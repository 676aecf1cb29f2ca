//! Heuristic push-relabel with local and global relabeling
//!
//! Works directly on a [`ResidualNetwork`]. Each active node is discharged by
//! repeatedly choosing its lowest residual neighbour: if the node sits
//! strictly higher the excess is pushed there, otherwise the node is
//! relabelled to one above that neighbour. Optionally, every `floor(V/2)`
//! processed nodes a [`global_relabel`] refreshes all labels and stamps a new
//! wave; pushes are then only allowed towards neighbours whose wave is at
//! least the pusher's, so stale labels cannot drive flow.
//!
//! The run ends once `excess[s] + excess[t] >= 0`, i.e. every unit that left
//! the source has either reached the sink or come back.
//!
//! # Starved nodes
//!
//! A node holding excess without any residual arc is popped, marked stranded
//! and left alone. It is re-enqueued as soon as a push reaches it, after a
//! global relabel, or when the queue runs dry, provided it has a residual arc
//! again. If nothing can be re-enqueued the run stops with the excess
//! stranded.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::global_relabel::global_relabel;
use crate::algorithm::graph::residual::ResidualNetwork;
use crate::algorithm::state::SolverState;
use crate::algorithm::traits::{
    check_terminals, AlgorithmError, Capacity, EdgeId, FlowMetrics, Height, NodeId,
};
use crate::data_structures::graph::FlowGraph;
use crate::execution::tracer::{ExecutionTracer, NoopTracer, ResidualView, TraceEvent};

/// Heuristic engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Run periodic global relabels and gate pushes by wave
    pub global_relabel: bool,
    /// Processed nodes between global relabels; `floor(V/2)` when unset
    pub relabel_interval: Option<usize>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            global_relabel: true,
            relabel_interval: None,
        }
    }
}

/// Final capacities and residuals over the full residual id space
#[derive(Debug, Clone)]
pub struct ResidualFlow {
    network: ResidualNetwork,
    residuals: Vec<Capacity>,
    source: NodeId,
    sink: NodeId,
    value: Capacity,
    pub metrics: FlowMetrics,
}

impl ResidualFlow {
    /// Flow value: net excess collected at the sink
    pub fn value(&self) -> Capacity {
        self.value
    }

    pub fn network(&self) -> &ResidualNetwork {
        &self.network
    }

    pub fn capacities(&self) -> &[Capacity] {
        self.network.capacities()
    }

    pub fn residuals(&self) -> &[Capacity] {
        &self.residuals
    }

    /// `capacity[e] - residual[e]`
    ///
    /// This is the raw residual complement, not the flow carried by `edge`:
    /// a folded pair starts at `a`/`b` against capacity `a + b`, and a
    /// synthesized id starts at residual zero, so both report a non-zero value
    /// before any push. Use [`ResidualFlow::net_flow`] for the flow itself.
    pub fn flow(&self, edge: EdgeId) -> Capacity {
        self.network.capacity(edge) - self.residuals[edge]
    }

    /// Signed flow along `edge` relative to its starting residual; for an
    /// original id this is the net amount sent in the edge's direction
    pub fn net_flow(&self, edge: EdgeId) -> Capacity {
        self.network.initial_residuals()[edge] - self.residuals[edge]
    }

    /// Non-negative flow per original edge id
    ///
    /// A folded antiparallel pair carries one net amount; it is reported on
    /// whichever of the two edges it runs along, and the other gets zero.
    pub fn edge_flows(&self) -> Vec<Capacity> {
        (0..self.network.original_edge_count())
            .map(|edge| self.net_flow(edge).max(0))
            .collect()
    }

    /// Source side of a minimum cut: nodes reachable from the source through
    /// arcs with positive residual, in id order
    pub fn min_cut(&self) -> Vec<NodeId> {
        let mut reached = vec![false; self.network.node_count()];
        let mut queue = VecDeque::new();
        reached[self.source] = true;
        queue.push_back(self.source);

        while let Some(node) = queue.pop_front() {
            for &arc in self.network.arcs(node) {
                let head = self.network.head(arc);
                if !reached[head] && self.residuals[arc] > 0 {
                    reached[head] = true;
                    queue.push_back(head);
                }
            }
        }

        debug_assert!(!reached[self.sink] || self.metrics.stranded_nodes > 0);
        reached
            .iter()
            .enumerate()
            .filter_map(|(node, &inside)| inside.then_some(node))
            .collect()
    }

    /// The `(capacities, residuals)` pair
    pub fn into_parts(self) -> (Vec<Capacity>, Vec<Capacity>) {
        (self.network.capacities().to_vec(), self.residuals)
    }
}

/// Heuristic push-relabel engine
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPushRelabel {
    config: HeuristicConfig,
}

impl HeuristicPushRelabel {
    pub fn new(global_relabel: bool) -> Self {
        Self {
            config: HeuristicConfig {
                global_relabel,
                relabel_interval: None,
            },
        }
    }

    pub fn with_config(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Override the number of processed nodes between global relabels
    pub fn with_interval(mut self, interval: usize) -> Self {
        self.config.relabel_interval = Some(interval);
        self
    }

    pub fn config(&self) -> HeuristicConfig {
        self.config
    }

    /// Compute a maximum flow from `source` to `sink`
    pub fn run<G: FlowGraph + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
    ) -> Result<ResidualFlow, AlgorithmError> {
        self.run_traced(graph, source, sink, &mut NoopTracer)
    }

    /// Like [`HeuristicPushRelabel::run`], reporting every step to `tracer`
    pub fn run_traced<G, T>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
        tracer: &mut T,
    ) -> Result<ResidualFlow, AlgorithmError>
    where
        G: FlowGraph + ?Sized,
        T: ExecutionTracer + ?Sized,
    {
        check_terminals(source, sink, graph.node_count())?;
        let started = Instant::now();
        info!(
            "Heuristic push-relabel on {} nodes, {} edges (global relabel: {})",
            graph.node_count(),
            graph.edge_count(),
            self.config.global_relabel
        );

        let network = ResidualNetwork::build(graph)?;
        let node_count = network.node_count();
        let interval = self
            .config
            .relabel_interval
            .unwrap_or(node_count / 2)
            .max(1);

        let mut run = Run::new(&network, source, sink);
        run.initial_preflow(tracer);
        run.execute(self.config.global_relabel, interval, tracer);

        let Run {
            residuals,
            state,
            mut metrics,
            ..
        } = run;
        metrics.execution_time = started.elapsed();
        let value = state.excess[sink];
        info!(
            "Heuristic push-relabel finished: flow {} after {} pushes, {} relabels, {} global relabels",
            value, metrics.push_operations, metrics.relabel_operations, metrics.global_relabels
        );

        Ok(ResidualFlow {
            network,
            residuals,
            source,
            sink,
            value,
            metrics,
        })
    }
}

/// What discharging a node ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Excess fully pushed out
    Drained,
    /// Excess left but no residual arc
    Stranded,
    /// Push towards `target` blocked by an older wave
    Deferred { target: NodeId },
}

/// Mutable working set of one heuristic run
struct Run<'a> {
    network: &'a ResidualNetwork,
    residuals: Vec<Capacity>,
    state: SolverState,
    source: NodeId,
    sink: NodeId,
    metrics: FlowMetrics,
}

impl<'a> Run<'a> {
    fn new(network: &'a ResidualNetwork, source: NodeId, sink: NodeId) -> Self {
        Self {
            network,
            residuals: network.initial_residuals().to_vec(),
            state: SolverState::new(network.node_count()),
            source,
            sink,
            metrics: FlowMetrics::default(),
        }
    }

    /// Saturate every residual arc leaving the source
    fn initial_preflow<T: ExecutionTracer + ?Sized>(&mut self, tracer: &mut T) {
        debug!("Creating initial preflow");
        let network = self.network;
        self.state.heights[self.source] = network.node_count();

        let mut activated = 0;
        for &arc in network.arcs(self.source) {
            let amount = self.residuals[arc];
            if amount <= 0 {
                continue;
            }
            let head = network.head(arc);
            self.move_flow(arc, amount);
            if head != self.sink && self.state.activate(head) {
                activated += 1;
            }
        }

        debug!("{} nodes active after preflow", activated);
        tracer.trace(
            &TraceEvent::Preflow {
                source: self.source,
                activated,
            },
            &*self,
        );
    }

    fn execute<T: ExecutionTracer + ?Sized>(&mut self, gated: bool, interval: usize, tracer: &mut T) {
        let mut since_global = 0;

        while self.state.excess[self.source] + self.state.excess[self.sink] < 0 {
            if !self.state.has_active() && self.reactivate_stranded() == 0 {
                debug!(
                    "Active queue empty with {} units stranded",
                    -(self.state.excess[self.source] + self.state.excess[self.sink])
                );
                break;
            }
            let Some(node) = self.state.pop_active() else {
                break;
            };

            self.metrics.nodes_processed += 1;
            match self.process(node, gated, tracer) {
                Outcome::Drained => self.state.deactivate(node),
                Outcome::Stranded => {
                    self.state.strand(node);
                    self.metrics.stranded_nodes += 1;
                    trace!("Node {} stranded with excess {}", node, self.state.excess[node]);
                    tracer.trace(
                        &TraceEvent::Stranded {
                            node,
                            excess: self.state.excess[node],
                        },
                        &*self,
                    );
                }
                Outcome::Deferred { target } => {
                    self.state.requeue(node);
                    self.metrics.deferred_pushes += 1;
                    trace!("Node {} deferred: {} carries an older wave", node, target);
                    tracer.trace(&TraceEvent::Deferred { node, target }, &*self);
                }
            }

            since_global += 1;
            if gated && since_global >= interval {
                self.global_relabel(tracer);
                since_global = 0;
            }
        }
    }

    /// Discharge `node` until it has no excess, is stranded, or is deferred
    fn process<T: ExecutionTracer + ?Sized>(&mut self, node: NodeId, gated: bool, tracer: &mut T) -> Outcome {
        let network = self.network;

        while self.state.excess[node] > 0 {
            let mut lowest: Option<(EdgeId, NodeId, Height)> = None;
            for &arc in network.arcs(node) {
                if self.residuals[arc] <= 0 {
                    continue;
                }
                let head = network.head(arc);
                let height = self.state.heights[head];
                if lowest.map_or(true, |(_, _, best)| height < best) {
                    lowest = Some((arc, head, height));
                }
            }

            let Some((arc, next, min_height)) = lowest else {
                return Outcome::Stranded;
            };

            if self.state.heights[node] > min_height {
                if gated && self.state.wave[node] > self.state.wave[next] {
                    return Outcome::Deferred { target: next };
                }

                let delta = self.state.excess[node].min(self.residuals[arc]);
                self.move_flow(arc, delta);
                self.metrics.push_operations += 1;
                if next != self.source && next != self.sink {
                    self.state.activate(next);
                }
                tracer.trace(
                    &TraceEvent::Push {
                        from: node,
                        to: next,
                        edge: arc,
                        amount: delta,
                    },
                    &*self,
                );
            } else {
                self.state.heights[node] = min_height + 1;
                self.metrics.relabel_operations += 1;
                tracer.trace(
                    &TraceEvent::Relabel {
                        node,
                        height: min_height + 1,
                    },
                    &*self,
                );
            }
        }

        Outcome::Drained
    }

    fn global_relabel<T: ExecutionTracer + ?Sized>(&mut self, tracer: &mut T) {
        let colored = global_relabel(
            self.network,
            &self.residuals,
            &mut self.state,
            self.source,
            self.sink,
        );
        self.metrics.global_relabels += 1;
        tracer.trace(
            &TraceEvent::GlobalRelabel {
                wave: self.state.current_wave,
                colored,
            },
            &*self,
        );
        self.reactivate_stranded();
    }

    /// Re-enqueue stranded nodes that hold excess and have a residual arc again
    fn reactivate_stranded(&mut self) -> usize {
        let network = self.network;
        let mut revived = 0;
        for node in self.state.stranded_nodes() {
            let has_arc = network.arcs(node).iter().any(|&arc| self.residuals[arc] > 0);
            if self.state.excess[node] > 0 && has_arc {
                self.state.activate(node);
                revived += 1;
            }
        }
        if revived > 0 {
            trace!("{} stranded nodes re-enqueued", revived);
        }
        revived
    }

    /// Move `delta` along `arc`, crediting the reverse arc and the head's excess
    #[inline]
    fn move_flow(&mut self, arc: EdgeId, delta: Capacity) {
        let network = self.network;
        self.residuals[arc] -= delta;
        self.residuals[network.reverse(arc)] += delta;
        self.state.transfer(network.tail(arc), network.head(arc), delta);
    }
}

impl ResidualView for Run<'_> {
    fn node_count(&self) -> usize {
        self.state.node_count()
    }

    fn height(&self, node: NodeId) -> Height {
        self.state.heights[node]
    }

    fn excess(&self, node: NodeId) -> Capacity {
        self.state.excess[node]
    }

    fn for_each_residual_arc(&self, visit: &mut dyn FnMut(NodeId, NodeId, Capacity)) {
        for (arc, &residual) in self.residuals.iter().enumerate() {
            if residual > 0 {
                visit(self.network.tail(arc), self.network.head(arc), residual);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::graph::EdgeListGraph;
    use crate::execution::history::ExecutionHistory;
    use crate::validation::correctness::check_conservation;

    fn prepared(node_count: usize, edges: &[(NodeId, NodeId, Capacity)]) -> EdgeListGraph {
        let mut graph = EdgeListGraph::new(node_count);
        for &(from, to, capacity) in edges {
            graph.add_edge(from, to, capacity).unwrap();
        }
        graph.prepare_adjacency(true);
        graph
    }

    fn both_modes() -> [HeuristicPushRelabel; 2] {
        [HeuristicPushRelabel::new(false), HeuristicPushRelabel::new(true)]
    }

    #[test]
    fn test_single_path_bottleneck() {
        // s=0 -> a=1 (7), a -> t=2 (3)
        let graph = prepared(3, &[(0, 1, 7), (1, 2, 3)]);
        for engine in both_modes() {
            let flow = engine.run(&graph, 0, 2).unwrap();
            assert_eq!(flow.value(), 3);
            assert_eq!(flow.net_flow(0), 3);
            assert_eq!(flow.net_flow(1), 3);
            assert_eq!(flow.flow(1), 3);
            assert_eq!(flow.min_cut(), vec![0, 1]);
        }
    }

    #[test]
    fn test_two_branch_network() {
        // s=0, a=1, b=2, t=3
        let graph = prepared(4, &[(0, 1, 10), (0, 2, 5), (1, 3, 5), (2, 3, 10), (1, 2, 3)]);
        for engine in both_modes() {
            let flow = engine.run(&graph, 0, 3).unwrap();
            assert_eq!(flow.value(), 13);
            assert_eq!(flow.net_flow(2), 5);
            assert_eq!(flow.net_flow(4), 3);
        }
    }

    #[test]
    fn test_disconnected_sink_terminates() {
        let graph = prepared(4, &[(0, 1, 4), (1, 2, 2)]);
        for engine in both_modes() {
            let flow = engine.run(&graph, 0, 3).unwrap();
            assert_eq!(flow.value(), 0);
            for edge in 0..graph.edge_count() {
                assert_eq!(flow.net_flow(edge), 0);
            }
            assert_eq!(flow.min_cut(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_antiparallel_pair_respects_direction() {
        // 0 <-> 1 with weights 4 and 6, then 1 -> 2
        let graph = prepared(3, &[(0, 1, 4), (1, 0, 6), (1, 2, 5)]);
        let flow = HeuristicPushRelabel::new(true).run(&graph, 0, 2).unwrap();
        assert_eq!(flow.value(), 4);
        assert_eq!(flow.net_flow(0), 4);
        assert_eq!(flow.net_flow(1), -4);
        assert_eq!(flow.capacities()[0], 10);
        // Raw complement of a folded id is not its flow
        assert_eq!(flow.flow(0), 10);
        assert_ne!(flow.flow(0), flow.edge_flows()[0]);
        assert_eq!(flow.edge_flows(), vec![4, 0, 4]);
    }

    #[test]
    fn test_residual_pairs_stay_consistent() {
        let graph = prepared(
            6,
            &[(0, 1, 16), (0, 2, 13), (2, 1, 4), (1, 3, 12), (3, 2, 9), (2, 4, 14), (4, 3, 7), (3, 5, 20), (4, 5, 4)],
        );
        let flow = HeuristicPushRelabel::new(true).run(&graph, 0, 5).unwrap();
        assert_eq!(flow.value(), 23);

        let network = flow.network();
        for edge in 0..network.edge_count() {
            let residual = flow.residuals()[edge];
            assert!(residual >= 0 && residual <= network.capacity(edge));
            assert_eq!(
                residual + flow.residuals()[network.reverse(edge)],
                network.capacity(edge)
            );
            assert_eq!(flow.net_flow(edge), -flow.net_flow(network.reverse(edge)));
        }

        let edge_flows = flow.edge_flows();
        for edge in 0..network.original_edge_count() {
            assert_eq!(edge_flows[edge], flow.net_flow(edge).max(0));
            assert!(edge_flows[edge] <= graph.weight(edge));
        }
        assert_eq!(check_conservation(&graph, &edge_flows, 0, 5), Ok(23));
    }

    #[test]
    fn test_interval_override_counts_global_relabels() {
        let graph = prepared(4, &[(0, 1, 10), (0, 2, 5), (1, 3, 5), (2, 3, 10), (1, 2, 3)]);
        let flow = HeuristicPushRelabel::new(true)
            .with_interval(1)
            .run(&graph, 0, 3)
            .unwrap();
        assert_eq!(flow.value(), 13);
        assert_eq!(flow.metrics.global_relabels, flow.metrics.nodes_processed);

        let flow = HeuristicPushRelabel::new(false).run(&graph, 0, 3).unwrap();
        assert_eq!(flow.metrics.global_relabels, 0);
    }

    #[test]
    fn test_labels_stay_admissible_at_every_step() {
        let graph = prepared(
            6,
            &[(0, 1, 3), (0, 2, 7), (1, 3, 4), (2, 1, 2), (2, 4, 3), (3, 5, 5), (4, 3, 1), (4, 5, 6), (3, 2, 2)],
        );
        for engine in both_modes() {
            let mut steps = 0;
            let mut tracer = |_event: &TraceEvent, view: &dyn ResidualView| {
                steps += 1;
                view.for_each_residual_arc(&mut |tail, head, _| {
                    assert!(view.height(tail) <= view.height(head) + 1);
                });
            };
            let flow = engine.run_traced(&graph, 0, 5, &mut tracer).unwrap();
            assert_eq!(flow.value(), 7);
            assert!(steps > 1);
        }
    }

    #[test]
    fn test_stranded_node_does_not_stall() {
        let graph = prepared(3, &[(0, 1, 5)]);
        let network = ResidualNetwork::build(&graph).unwrap();
        let mut run = Run::new(&network, 0, 1);
        run.initial_preflow(&mut NoopTracer);

        // Node 2 has no arcs at all; hand it excess taken from the source
        run.state.excess[0] -= 3;
        run.state.excess[2] = 3;
        run.state.activate(2);
        run.execute(true, 1, &mut NoopTracer);

        assert_eq!(run.metrics.stranded_nodes, 1);
        assert!(run.state.is_stranded(2));
        assert!(!run.state.is_active(2));
        assert_eq!(run.state.excess[2], 3);
        assert_eq!(run.state.excess[1], 5);
    }

    #[test]
    fn test_wave_gate_defers_push() {
        let graph = prepared(3, &[(0, 1, 5), (1, 2, 5)]);
        let network = ResidualNetwork::build(&graph).unwrap();
        let mut run = Run::new(&network, 0, 2);
        run.initial_preflow(&mut NoopTracer);

        // Node 1 carries a newer wave than the sink it would push to
        run.state.heights[1] = 1;
        run.state.current_wave = 1;
        run.state.wave[1] = 1;
        let residuals = run.residuals.clone();

        assert_eq!(run.state.pop_active(), Some(1));
        assert_eq!(run.process(1, true, &mut NoopTracer), Outcome::Deferred { target: 2 });
        assert_eq!(run.state.excess[1], 5);
        assert_eq!(run.residuals, residuals);
        assert!(run.state.is_active(1));

        // Without the gate the same push goes through
        assert_eq!(run.process(1, false, &mut NoopTracer), Outcome::Drained);
        assert_eq!(run.state.excess[2], 5);
    }

    #[test]
    fn test_deferred_node_requeued_until_global_relabel() {
        let graph = prepared(4, &[(0, 1, 5), (0, 3, 2), (1, 2, 5), (3, 2, 2)]);
        let network = ResidualNetwork::build(&graph).unwrap();
        let mut run = Run::new(&network, 0, 2);
        run.initial_preflow(&mut NoopTracer);

        run.state.heights[1] = 1;
        run.state.heights[3] = 1;
        run.state.current_wave = 1;
        run.state.wave[1] = 1;

        let mut history = ExecutionHistory::new();
        run.execute(true, 3, &mut history);

        // 1 is deferred behind 3, deferred again, then pushes once the
        // global relabel has stamped the sink with the current wave
        let events = history.events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], TraceEvent::Deferred { node: 1, target: 2 });
        assert!(matches!(events[1], TraceEvent::Push { from: 3, to: 2, amount: 2, .. }));
        assert_eq!(events[2], TraceEvent::Deferred { node: 1, target: 2 });
        assert_eq!(events[3], TraceEvent::GlobalRelabel { wave: 2, colored: 4 });
        assert!(matches!(events[4], TraceEvent::Push { from: 1, to: 2, amount: 5, .. }));

        assert_eq!(run.state.wave[2], 2);
        assert_eq!(run.metrics.deferred_pushes, 2);
        assert_eq!(run.metrics.global_relabels, 1);
        assert_eq!(run.state.excess[2], 7);
        assert!(!run.state.is_active(1));
    }

    #[test]
    fn test_stranded_node_revived_when_arc_returns() {
        let graph = prepared(4, &[(0, 1, 5), (1, 2, 5), (3, 2, 4)]);
        let network = ResidualNetwork::build(&graph).unwrap();
        let arc = network.arcs(3)[0];
        let reverse = network.reverse(arc);

        // Gated: revived by the global relabel. Ungated: revived when the queue empties.
        for gated in [true, false] {
            let mut run = Run::new(&network, 0, 2);
            run.initial_preflow(&mut NoopTracer);

            run.residuals[arc] = 0;
            run.residuals[reverse] = 4;
            run.state.excess[0] -= 3;
            run.state.excess[3] = 3;
            assert_eq!(run.process(3, gated, &mut NoopTracer), Outcome::Stranded);
            run.state.strand(3);
            assert_eq!(run.reactivate_stranded(), 0);
            assert!(run.state.is_stranded(3));

            run.residuals[arc] = 4;
            run.residuals[reverse] = 0;

            let mut revived_push = false;
            let mut tracer = |event: &TraceEvent, _view: &dyn ResidualView| {
                if let TraceEvent::Push { from: 3, .. } = event {
                    revived_push = true;
                }
            };
            run.execute(gated, 1, &mut tracer);

            assert!(revived_push);
            assert!(!run.state.is_stranded(3));
            assert!(!run.state.is_active(3));
            assert_eq!(run.state.excess[3], 0);
            assert_eq!(run.state.excess[2], 8);
        }
    }

    #[test]
    fn test_rejects_bad_terminals() {
        let graph = prepared(2, &[(0, 1, 1)]);
        let engine = HeuristicPushRelabel::default();
        assert_eq!(
            engine.run(&graph, 0, 0).unwrap_err(),
            AlgorithmError::SameTerminals(0)
        );
        assert!(matches!(
            engine.run(&graph, 0, 9),
            Err(AlgorithmError::InvalidNode { node: 9, .. })
        ));
    }

    #[test]
    fn test_requires_prepared_adjacency() {
        let mut graph = EdgeListGraph::new(2);
        graph.add_edge(0, 1, 1).unwrap();
        assert_eq!(
            HeuristicPushRelabel::default().run(&graph, 0, 1).unwrap_err(),
            AlgorithmError::AdjacencyNotPrepared
        );
    }
}
