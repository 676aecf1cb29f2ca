//! Residual network construction
//!
//! Turns the adapter's possibly asymmetric edge set into a symmetric residual
//! graph in which every edge id has an antiparallel partner:
//!
//! - both directions present in the original graph: the pair is folded into
//!   one undirected pair and each direction's capacity becomes the sum of both
//!   weights;
//! - only one direction present: a new id is appended after the original id
//!   range for the missing direction, with the existing direction's weight as
//!   capacity.
//!
//! Each id starts with its own original weight as residual (zero for
//! synthesized ids), so `residual[e] + residual[reverse[e]] == capacity[e]`
//! for the whole run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, trace};

use crate::algorithm::traits::{AlgorithmError, Capacity, EdgeId, NodeId};
use crate::data_structures::graph::{AdjacencyMode, FlowGraph};

const PROGRESS_INTERVAL: usize = 50_000;

/// Symmetric residual graph over the full (original + synthesized) id space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualNetwork {
    original_edge_count: usize,
    capacities: Vec<Capacity>,
    initial_residuals: Vec<Capacity>,
    reverse: Vec<EdgeId>,
    tails: Vec<NodeId>,
    heads: Vec<NodeId>,
    /// Outgoing residual arcs per node, in neighbour-list order
    arcs: Vec<Vec<EdgeId>>,
}

impl ResidualNetwork {
    /// Build the residual network from a graph whose undirected adjacency
    /// has been prepared
    pub fn build<G: FlowGraph + ?Sized>(graph: &G) -> Result<Self, AlgorithmError> {
        if graph.adjacency_mode() != Some(AdjacencyMode::Undirected) {
            return Err(AlgorithmError::AdjacencyNotPrepared);
        }

        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        let total = graph.undirected_edge_count().max(edge_count);

        let mut capacities = graph.weights().to_vec();
        capacities.resize(total, 0);
        let initial_residuals = capacities.clone();
        let mut reverse: Vec<Option<EdgeId>> = vec![None; total];
        let mut tails = vec![0; total];
        let mut heads = vec![0; total];
        for edge in 0..edge_count {
            let (from, to) = graph.endpoints(edge);
            tails[edge] = from;
            heads[edge] = to;
        }

        debug!(
            "Filling reverse and capacity vectors for {} edges ({} after undirecting)",
            edge_count, total
        );

        let mut next_id = edge_count;
        let mut pairs = 0usize;
        for node in 0..node_count {
            for &neighbour in graph.neighbours(node) {
                match (graph.edge_id(node, neighbour), graph.edge_id(neighbour, node)) {
                    (Some(forward), Some(backward)) => {
                        if reverse[forward].is_some() {
                            continue;
                        }
                        reverse[forward] = Some(backward);
                        reverse[backward] = Some(forward);
                        let folded = graph.weight(forward) + graph.weight(backward);
                        capacities[forward] = folded;
                        capacities[backward] = folded;
                    }
                    (Some(existing), None) | (None, Some(existing)) => {
                        if reverse[existing].is_some() {
                            continue;
                        }
                        if next_id >= total {
                            return Err(AlgorithmError::UnresolvedReverse { edge: existing });
                        }
                        let synthesized = next_id;
                        next_id += 1;
                        reverse[existing] = Some(synthesized);
                        reverse[synthesized] = Some(existing);
                        capacities[synthesized] = graph.weight(existing);
                        tails[synthesized] = heads[existing];
                        heads[synthesized] = tails[existing];
                    }
                    // Adjacency entry without any backing edge; left unresolved
                    (None, None) => continue,
                }

                pairs += 1;
                if pairs % PROGRESS_INTERVAL == 0 {
                    trace!("{} edge pairs processed", pairs);
                }
            }
        }

        let reverse = reverse
            .into_iter()
            .enumerate()
            .map(|(edge, partner)| partner.ok_or(AlgorithmError::UnresolvedReverse { edge }))
            .collect::<Result<Vec<_>, _>>()?;

        let mut arcs = vec![Vec::new(); node_count];
        for (node, node_arcs) in arcs.iter_mut().enumerate() {
            for &neighbour in graph.neighbours(node) {
                let arc = graph
                    .edge_id(node, neighbour)
                    .or_else(|| graph.edge_id(neighbour, node).map(|edge| reverse[edge]));
                if let Some(arc) = arc {
                    node_arcs.push(arc);
                }
            }
        }

        debug!("Residual network ready: {} pairs, {} synthesized ids", pairs, next_id - edge_count);

        Ok(Self {
            original_edge_count: edge_count,
            capacities,
            initial_residuals,
            reverse,
            tails,
            heads,
            arcs,
        })
    }

    pub fn node_count(&self) -> usize {
        self.arcs.len()
    }

    /// Size of the full id space
    pub fn edge_count(&self) -> usize {
        self.capacities.len()
    }

    pub fn original_edge_count(&self) -> usize {
        self.original_edge_count
    }

    pub fn capacities(&self) -> &[Capacity] {
        &self.capacities
    }

    pub fn capacity(&self, edge: EdgeId) -> Capacity {
        self.capacities[edge]
    }

    /// Residual each id starts from
    pub fn initial_residuals(&self) -> &[Capacity] {
        &self.initial_residuals
    }

    #[inline]
    pub fn reverse(&self, edge: EdgeId) -> EdgeId {
        self.reverse[edge]
    }

    #[inline]
    pub fn tail(&self, edge: EdgeId) -> NodeId {
        self.tails[edge]
    }

    #[inline]
    pub fn head(&self, edge: EdgeId) -> NodeId {
        self.heads[edge]
    }

    /// Outgoing residual arcs of `node`
    #[inline]
    pub fn arcs(&self, node: NodeId) -> &[EdgeId] {
        &self.arcs[node]
    }

    /// Whether `edge` was appended by the builder rather than taken from the graph
    pub fn is_synthesized(&self, edge: EdgeId) -> bool {
        edge >= self.original_edge_count
    }
}
