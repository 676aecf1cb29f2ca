//! Execution history management for push-relabel tracing
//!
//! [`ExecutionHistory`] is a tracer that keeps the full event sequence of a
//! run plus per-kind counters, so a run can be inspected or exported after
//! the fact. Snapshots of the labels are not kept; only events are.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::traits::NodeId;
use crate::execution::tracer::{ExecutionTracer, ResidualView, TraceEvent};

/// History lookup errors
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Step {step} out of range (history has {len} events)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("History serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Recorded event sequence of a single run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionHistory {
    events: Vec<TraceEvent>,
    counts: BTreeMap<String, usize>,
    /// Cap on stored events; counters keep running past it
    #[serde(skip)]
    limit: Option<usize>,
}

impl ExecutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that stores at most `limit` events
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Number of recorded events
    pub fn step_count(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Event at `step`
    pub fn get(&self, step: usize) -> Result<&TraceEvent, HistoryError> {
        self.events.get(step).ok_or(HistoryError::StepOutOfRange {
            step,
            len: self.events.len(),
        })
    }

    /// How many events of `kind` were observed (including dropped ones)
    pub fn count(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    /// Steps at which `node` pushed or was relabelled
    pub fn find_node_visits(&self, node: NodeId) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| match **event {
                TraceEvent::Push { from, .. } => from == node,
                TraceEvent::Relabel { node: n, .. } => n == node,
                _ => false,
            })
            .map(|(step, _)| step)
            .collect()
    }

    /// JSON export of the recorded history
    pub fn export(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a history from [`ExecutionHistory::export`] output
    pub fn import(json: &str) -> Result<Self, HistoryError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ExecutionTracer for ExecutionHistory {
    fn trace(&mut self, event: &TraceEvent, _view: &dyn ResidualView) {
        *self.counts.entry(event.kind().to_string()).or_insert(0) += 1;
        if self.limit.map_or(true, |limit| self.events.len() < limit) {
            self.events.push(*event);
        }
    }
}
