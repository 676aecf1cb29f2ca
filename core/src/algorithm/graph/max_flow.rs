//! Maximum Flow Algorithm Implementation
//!
//! This module implements the classic FIFO preflow-push algorithm seeded by
//! an exact distance labeling, and the [`MaxFlowSolver`] front end that
//! dispatches between it and the heuristic engine in
//! [`crate::algorithm::graph::push_relabel`].
//!
//! # Classic preflow-push
//!
//! 1. Heights start at the oracle's distance to the sink (`V` when the sink is
//!    unreachable); the source is pinned to `V`.
//! 2. Every edge leaving the source is saturated.
//! 3. Active nodes are taken in FIFO order. A node pushes along each arc with
//!    `height[node] == height[next] + 1` while it has excess; if excess
//!    remains it is relabelled to `1 + min(height[next])` over its residual
//!    arcs and re-enqueued.
//!
//! Residual capacity from `u` to `v` combines the unused capacity of `u -> v`
//! with the flow already on `v -> u`; pushes cancel that flow first. This
//! lets excess drain back to the source when the sink is unreachable.
//!
//! # Algorithmic Complexity
//!
//! - **Time Complexity**: O(V³) with FIFO selection
//! - **Space Complexity**: O(V + E)
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::push_relabel::{HeuristicConfig, HeuristicPushRelabel};
use crate::algorithm::path_finding::bfs::{BreadthFirstSearch, DistanceOracle};
use crate::algorithm::state::SolverState;
use crate::algorithm::traits::{
    check_terminals, Algorithm, AlgorithmError, Capacity, EdgeId, FlowMetrics, Height, NodeId,
};
use crate::data_structures::graph::{AdjacencyMode, FlowGraph};
use crate::execution::tracer::{ExecutionTracer, NoopTracer, ResidualView, TraceEvent};

/// Maximum flow algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFlowAlgorithm {
    /// FIFO preflow-push with exact initial labels
    PreflowPush,
    /// Push-relabel with local relabels and optional global relabeling
    HeuristicPushRelabel,
}

/// Residual arc of the classic engine: one neighbour, up to two original edges
#[derive(Debug, Clone, Copy)]
struct FlowArc {
    head: NodeId,
    /// Original edge `tail -> head`
    forward: Option<EdgeId>,
    /// Original edge `head -> tail`, whose flow can be cancelled
    backward: Option<EdgeId>,
}

/// Flow network with residual tracking over original edge ids
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    weights: Vec<Capacity>,
    flows: Vec<Capacity>,
    adjacency: Vec<Vec<FlowArc>>,
    state: SolverState,
    metrics: FlowMetrics,
}

impl FlowNetwork {
    /// Build the working network from a graph with undirected adjacency
    pub fn from_graph<G: FlowGraph + ?Sized>(graph: &G) -> Result<Self, AlgorithmError> {
        if graph.adjacency_mode() != Some(AdjacencyMode::Undirected) {
            return Err(AlgorithmError::AdjacencyNotPrepared);
        }

        let node_count = graph.node_count();
        let adjacency = (0..node_count)
            .map(|node| {
                graph
                    .neighbours(node)
                    .iter()
                    .map(|&head| FlowArc {
                        head,
                        forward: graph.edge_id(node, head),
                        backward: graph.edge_id(head, node),
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            weights: graph.weights().to_vec(),
            flows: vec![0; graph.edge_count()],
            adjacency,
            state: SolverState::new(node_count),
            metrics: FlowMetrics::default(),
        })
    }

    /// Residual capacity of an arc
    fn residual(&self, arc: &FlowArc) -> Capacity {
        let unused = arc.forward.map_or(0, |edge| self.weights[edge] - self.flows[edge]);
        let cancellable = arc.backward.map_or(0, |edge| self.flows[edge]);
        unused + cancellable
    }

    /// Seed labels from distances to the sink
    pub fn initialize_heights(&mut self, distances: &[Option<usize>], source: NodeId) {
        let node_count = self.state.node_count();
        for (height, distance) in self.state.heights.iter_mut().zip(distances) {
            *height = distance.unwrap_or(node_count);
        }
        self.state.heights[source] = node_count;
    }

    /// Saturate every edge leaving the source; returns how many nodes became active
    pub fn initialize_preflow(&mut self, source: NodeId, sink: NodeId) -> usize {
        let mut activated = 0;
        for index in 0..self.adjacency[source].len() {
            let arc = self.adjacency[source][index];
            let Some(edge) = arc.forward else {
                continue;
            };
            let amount = self.weights[edge] - self.flows[edge];
            if amount <= 0 {
                continue;
            }

            self.flows[edge] += amount;
            self.state.transfer(source, arc.head, amount);
            if arc.head != sink && self.state.activate(arc.head) {
                activated += 1;
            }
        }
        activated
    }

    /// Move `delta` from `tail` along `arc`, cancelling reverse flow first
    fn apply_push(&mut self, tail: NodeId, arc: &FlowArc, delta: Capacity) {
        let mut remaining = delta;
        if let Some(edge) = arc.backward {
            let cancelled = self.flows[edge].min(remaining);
            self.flows[edge] -= cancelled;
            remaining -= cancelled;
        }
        if let Some(edge) = arc.forward {
            self.flows[edge] += remaining;
            remaining = 0;
        }
        debug_assert_eq!(remaining, 0, "pushed more than the residual capacity");
        self.state.transfer(tail, arc.head, delta);
    }

    /// Push excess along admissible arcs; relabel and re-enqueue if some remains
    fn discharge<T: ExecutionTracer + ?Sized>(
        &mut self,
        node: NodeId,
        source: NodeId,
        sink: NodeId,
        tracer: &mut T,
    ) {
        for index in 0..self.adjacency[node].len() {
            if self.state.excess[node] == 0 {
                break;
            }

            let arc = self.adjacency[node][index];
            let residual = self.residual(&arc);
            if residual <= 0 || self.state.heights[node] != self.state.heights[arc.head] + 1 {
                continue;
            }

            let delta = self.state.excess[node].min(residual);
            self.apply_push(node, &arc, delta);
            self.metrics.push_operations += 1;
            if arc.head != source && arc.head != sink {
                self.state.activate(arc.head);
            }
            let edge = arc.forward.or(arc.backward).unwrap_or_default();
            tracer.trace(
                &TraceEvent::Push {
                    from: node,
                    to: arc.head,
                    edge,
                    amount: delta,
                },
                &*self,
            );
        }

        if self.state.excess[node] <= 0 {
            self.state.deactivate(node);
            return;
        }

        match self.relabel(node) {
            Some(height) => {
                self.state.requeue(node);
                tracer.trace(&TraceEvent::Relabel { node, height }, &*self);
            }
            None => {
                self.state.strand(node);
                self.metrics.stranded_nodes += 1;
                trace!("Node {} stranded with excess {}", node, self.state.excess[node]);
                tracer.trace(
                    &TraceEvent::Stranded {
                        node,
                        excess: self.state.excess[node],
                    },
                    self,
                );
            }
        }
    }

    /// Relabel to one above the lowest residual neighbour
    fn relabel(&mut self, node: NodeId) -> Option<Height> {
        let lowest = self.adjacency[node]
            .iter()
            .filter(|arc| self.residual(arc) > 0)
            .map(|arc| self.state.heights[arc.head])
            .min()?;

        let height = lowest + 1;
        self.state.heights[node] = height;
        self.metrics.relabel_operations += 1;
        Some(height)
    }

    /// Nodes reachable from `source` through residual arcs, in id order
    pub fn source_side(&self, source: NodeId) -> Vec<NodeId> {
        let mut reached = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::new();
        reached[source] = true;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for arc in &self.adjacency[node] {
                if !reached[arc.head] && self.residual(arc) > 0 {
                    reached[arc.head] = true;
                    queue.push_back(arc.head);
                }
            }
        }

        reached
            .iter()
            .enumerate()
            .filter_map(|(node, &inside)| inside.then_some(node))
            .collect()
    }

    /// Flow on each original edge
    pub fn flows(&self) -> &[Capacity] {
        &self.flows
    }

    /// Get maximum flow value at sink
    pub fn get_max_flow(&self, sink: NodeId) -> Capacity {
        self.state.excess[sink]
    }
}

impl ResidualView for FlowNetwork {
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
        for (tail, arcs) in self.adjacency.iter().enumerate() {
            for arc in arcs {
                let residual = self.residual(arc);
                if residual > 0 {
                    visit(tail, arc.head, residual);
                }
            }
        }
    }
}

/// Result of the classic engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflowPushFlow {
    /// Flow per original edge id
    pub flows: Vec<Capacity>,
    /// Net flow into the sink
    pub value: Capacity,
    /// Source side of a minimum cut
    pub min_cut: Vec<NodeId>,
    pub metrics: FlowMetrics,
}

/// Classic FIFO preflow-push engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PreflowPush<O = BreadthFirstSearch> {
    oracle: O,
}

impl PreflowPush {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: DistanceOracle> PreflowPush<O> {
    /// Use a custom distance oracle for the initial labels
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Compute a maximum flow from `source` to `sink`
    pub fn run<G: FlowGraph + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
    ) -> Result<PreflowPushFlow, AlgorithmError> {
        self.run_traced(graph, source, sink, &mut NoopTracer)
    }

    /// Like [`PreflowPush::run`], reporting every step to `tracer`
    pub fn run_traced<G, T>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
        tracer: &mut T,
    ) -> Result<PreflowPushFlow, AlgorithmError>
    where
        G: FlowGraph + ?Sized,
        T: ExecutionTracer + ?Sized,
    {
        check_terminals(source, sink, graph.node_count())?;
        let started = Instant::now();
        info!(
            "Preflow-push on {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let mut network = FlowNetwork::from_graph(graph)?;
        let distances = self.oracle.distances_to(graph, sink);
        network.initialize_heights(&distances, source);

        let activated = network.initialize_preflow(source, sink);
        debug!("Preflow saturated source edges, {} nodes active", activated);
        tracer.trace(&TraceEvent::Preflow { source, activated }, &network);

        while let Some(node) = network.state.pop_active() {
            network.metrics.nodes_processed += 1;
            network.discharge(node, source, sink, tracer);
        }

        let value = network.get_max_flow(sink);
        let min_cut = network.source_side(source);
        let FlowNetwork {
            flows, mut metrics, ..
        } = network;
        metrics.execution_time = started.elapsed();
        info!(
            "Preflow-push finished: flow {} after {} pushes, {} relabels",
            value, metrics.push_operations, metrics.relabel_operations
        );

        Ok(PreflowPushFlow {
            flows,
            value,
            min_cut,
            metrics,
        })
    }
}

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub algorithm: MaxFlowAlgorithm,
    /// Heuristic engine only
    pub global_relabel: bool,
    /// Heuristic engine only; `floor(V/2)` when unset
    pub relabel_interval: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: MaxFlowAlgorithm::HeuristicPushRelabel,
            global_relabel: true,
            relabel_interval: None,
        }
    }
}

impl SolverConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, AlgorithmError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AlgorithmError::InvalidConfig(e.to_string()))?;
        if config.relabel_interval == Some(0) {
            return Err(AlgorithmError::InvalidConfig(
                "relabel_interval must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    fn heuristic(&self) -> HeuristicConfig {
        HeuristicConfig {
            global_relabel: self.global_relabel,
            relabel_interval: self.relabel_interval,
        }
    }
}

/// Maximum flow result with flow and cut information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Engine that produced the result
    pub algorithm: MaxFlowAlgorithm,
    /// Maximum flow value
    pub max_flow: Capacity,
    /// Non-negative flow per original edge id
    pub edge_flows: Vec<Capacity>,
    /// Source side of a minimum cut
    pub min_cut: Vec<NodeId>,
    /// Algorithm performance metrics
    pub metrics: FlowMetrics,
}

/// Maximum flow front end dispatching between the two engines
#[derive(Debug, Clone, Default)]
pub struct MaxFlowSolver {
    config: SolverConfig,
}

impl MaxFlowSolver {
    /// Create new maximum flow solver with specified algorithm
    pub fn new(algorithm: MaxFlowAlgorithm) -> Self {
        Self {
            config: SolverConfig {
                algorithm,
                ..SolverConfig::default()
            },
        }
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve maximum flow with the configured engine
    pub fn solve<G: FlowGraph + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
    ) -> Result<MaxFlowResult, AlgorithmError> {
        self.solve_traced(graph, source, sink, &mut NoopTracer)
    }

    /// Solve maximum flow, reporting every engine step to `tracer`
    pub fn solve_traced<G, T>(
        &self,
        graph: &G,
        source: NodeId,
        sink: NodeId,
        tracer: &mut T,
    ) -> Result<MaxFlowResult, AlgorithmError>
    where
        G: FlowGraph + ?Sized,
        T: ExecutionTracer + ?Sized,
    {
        let algorithm = self.config.algorithm;
        match algorithm {
            MaxFlowAlgorithm::PreflowPush => {
                let flow = PreflowPush::new().run_traced(graph, source, sink, tracer)?;
                Ok(MaxFlowResult {
                    algorithm,
                    max_flow: flow.value,
                    edge_flows: flow.flows,
                    min_cut: flow.min_cut,
                    metrics: flow.metrics,
                })
            }
            MaxFlowAlgorithm::HeuristicPushRelabel => {
                let flow = HeuristicPushRelabel::with_config(self.config.heuristic())
                    .run_traced(graph, source, sink, tracer)?;
                Ok(MaxFlowResult {
                    algorithm,
                    max_flow: flow.value(),
                    edge_flows: flow.edge_flows(),
                    min_cut: flow.min_cut(),
                    metrics: flow.metrics.clone(),
                })
            }
        }
    }
}

fn invalid(name: &str, reason: &str) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl Algorithm for MaxFlowSolver {
    fn name(&self) -> &'static str {
        match self.config.algorithm {
            MaxFlowAlgorithm::PreflowPush => "Preflow-Push FIFO",
            MaxFlowAlgorithm::HeuristicPushRelabel => "Heuristic Push-Relabel",
        }
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> &'static str {
        "Push-relabel maximum flow: FIFO preflow-push with exact initial labels, or \
         lowest-neighbour push-relabel with periodic wave-tagged global relabeling. O(V^3)."
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError> {
        match name {
            "algorithm" => {
                self.config.algorithm = match value {
                    "preflow_push" => MaxFlowAlgorithm::PreflowPush,
                    "heuristic_push_relabel" | "heuristic" => MaxFlowAlgorithm::HeuristicPushRelabel,
                    _ => {
                        return Err(invalid(
                            name,
                            "expected preflow_push or heuristic_push_relabel",
                        ))
                    }
                };
                Ok(())
            }
            "global_relabel" => {
                self.config.global_relabel = value
                    .parse::<bool>()
                    .map_err(|_| invalid(name, "global_relabel must be true or false"))?;
                Ok(())
            }
            "relabel_interval" => {
                if value == "auto" {
                    self.config.relabel_interval = None;
                    return Ok(());
                }
                let interval = value
                    .parse::<usize>()
                    .ok()
                    .filter(|&interval| interval > 0)
                    .ok_or_else(|| invalid(name, "relabel_interval must be a positive integer or auto"))?;
                self.config.relabel_interval = Some(interval);
                Ok(())
            }
            _ => Err(invalid(name, "unknown parameter")),
        }
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        match name {
            "algorithm" => Some(
                match self.config.algorithm {
                    MaxFlowAlgorithm::PreflowPush => "preflow_push",
                    MaxFlowAlgorithm::HeuristicPushRelabel => "heuristic_push_relabel",
                }
                .to_string(),
            ),
            "global_relabel" => Some(self.config.global_relabel.to_string()),
            "relabel_interval" => Some(
                self.config
                    .relabel_interval
                    .map_or_else(|| "auto".to_string(), |interval| interval.to_string()),
            ),
            _ => None,
        }
    }

    fn get_parameters(&self) -> HashMap<String, String> {
        ["algorithm", "global_relabel", "relabel_interval"]
            .into_iter()
            .filter_map(|name| Some((name.to_string(), self.get_parameter(name)?)))
            .collect()
    }
}
