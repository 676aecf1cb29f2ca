//! Execution tracing for the push-relabel engines
//!
//! Engines report every state mutation (preflow, push, relabel, global
//! relabel, strand, defer) to an [`ExecutionTracer`] together with a read-only
//! [`ResidualView`] of the run. Tracers observe; they never steer the run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, EdgeId, Height, NodeId, Wave};

/// One observable step of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Every edge leaving the source has been saturated
    Preflow { source: NodeId, activated: usize },
    /// `amount` units moved along residual arc `edge`
    Push {
        from: NodeId,
        to: NodeId,
        edge: EdgeId,
        amount: Capacity,
    },
    /// Node label raised to `height`
    Relabel { node: NodeId, height: Height },
    /// Global relabel finished with `colored` nodes reached
    GlobalRelabel { wave: Wave, colored: usize },
    /// Node holds excess but has no residual arc
    Stranded { node: NodeId, excess: Capacity },
    /// Push from `node` postponed because `target` carries an older wave
    Deferred { node: NodeId, target: NodeId },
}

impl TraceEvent {
    /// Short kind label used for counting
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Preflow { .. } => "preflow",
            TraceEvent::Push { .. } => "push",
            TraceEvent::Relabel { .. } => "relabel",
            TraceEvent::GlobalRelabel { .. } => "global_relabel",
            TraceEvent::Stranded { .. } => "stranded",
            TraceEvent::Deferred { .. } => "deferred",
        }
    }
}

/// Read-only window onto a run's residual graph and labels
pub trait ResidualView {
    fn node_count(&self) -> usize;

    fn height(&self, node: NodeId) -> Height;

    fn excess(&self, node: NodeId) -> Capacity;

    /// Calls `visit(tail, head, residual)` for every arc with positive residual
    fn for_each_residual_arc(&self, visit: &mut dyn FnMut(NodeId, NodeId, Capacity));
}

/// Receives trace events from an engine
pub trait ExecutionTracer {
    fn trace(&mut self, event: &TraceEvent, view: &dyn ResidualView);
}

/// Tracer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl ExecutionTracer for NoopTracer {
    #[inline]
    fn trace(&mut self, _event: &TraceEvent, _view: &dyn ResidualView) {}
}

impl<F> ExecutionTracer for F
where
    F: FnMut(&TraceEvent, &dyn ResidualView),
{
    fn trace(&mut self, event: &TraceEvent, view: &dyn ResidualView) {
        self(event, view)
    }
}
