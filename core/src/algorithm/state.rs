//! Per-run solver state for the push-relabel engines
//!
//! Every array an invocation mutates lives in one owned [`SolverState`]
//! value: distance labels, excess, wave tags, and the FIFO of active nodes
//! with its membership flags. Algorithm steps receive it by exclusive
//! reference; nothing is global and nothing outlives the call.
//!
//! # Invariants
//! - A node is in `active` iff `is_active[node]`; no node is queued twice
//! - `stranded[node]` implies `!is_active[node]`
//! - Heights never decrease

use std::collections::VecDeque;

use crate::algorithm::traits::{Capacity, Height, NodeId, Wave};

/// Owned working data for a single push-relabel invocation
#[derive(Debug, Clone)]
pub struct SolverState {
    /// Distance label per node
    pub heights: Vec<Height>,
    /// Inflow minus outflow per node
    pub excess: Vec<Capacity>,
    /// Global relabel pass that last certified each height
    pub wave: Vec<Wave>,
    /// Latest global relabel pass
    pub current_wave: Wave,
    active: VecDeque<NodeId>,
    is_active: Vec<bool>,
    stranded: Vec<bool>,
}

impl SolverState {
    /// Zeroed state for `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            heights: vec![0; node_count],
            excess: vec![0; node_count],
            wave: vec![0; node_count],
            current_wave: 0,
            active: VecDeque::new(),
            is_active: vec![false; node_count],
            stranded: vec![false; node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.heights.len()
    }

    /// Enqueue `node` unless it is already queued; returns whether it was added
    pub fn activate(&mut self, node: NodeId) -> bool {
        if self.is_active[node] {
            return false;
        }
        self.is_active[node] = true;
        self.stranded[node] = false;
        self.active.push_back(node);
        true
    }

    /// Take the oldest active node; it stays flagged active until
    /// [`SolverState::deactivate`] or [`SolverState::requeue`]
    pub fn pop_active(&mut self) -> Option<NodeId> {
        self.active.pop_front()
    }

    /// Put a popped node back at the end of the queue
    pub fn requeue(&mut self, node: NodeId) {
        debug_assert!(self.is_active[node]);
        self.active.push_back(node);
    }

    /// Clear the active flag of a popped node
    pub fn deactivate(&mut self, node: NodeId) {
        self.is_active[node] = false;
    }

    /// Drop a popped node from the active set, leaving its excess in place
    pub fn strand(&mut self, node: NodeId) {
        self.is_active[node] = false;
        self.stranded[node] = true;
    }

    pub fn is_active(&self, node: NodeId) -> bool {
        self.is_active[node]
    }

    pub fn is_stranded(&self, node: NodeId) -> bool {
        self.stranded[node]
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Stranded nodes, in id order
    pub fn stranded_nodes(&self) -> Vec<NodeId> {
        self.stranded
            .iter()
            .enumerate()
            .filter_map(|(node, &stranded)| stranded.then_some(node))
            .collect()
    }

    /// Move `delta` units of excess from `from` to `to`
    #[inline]
    pub fn transfer(&mut self, from: NodeId, to: NodeId, delta: Capacity) {
        self.excess[from] -= delta;
        self.excess[to] += delta;
    }

    /// Raise a label; lower values are ignored
    #[inline]
    pub fn raise_height(&mut self, node: NodeId, height: Height) {
        if self.heights[node] < height {
            self.heights[node] = height;
        }
    }
}
