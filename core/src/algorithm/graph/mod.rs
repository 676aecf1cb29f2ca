//! Maximum flow engines and the residual machinery they share
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod residual;
pub mod global_relabel;
pub mod push_relabel;
pub mod max_flow;

pub use self::residual::ResidualNetwork;
pub use self::global_relabel::global_relabel;
pub use self::push_relabel::{HeuristicConfig, HeuristicPushRelabel, ResidualFlow};
pub use self::max_flow::{
    FlowNetwork, MaxFlowAlgorithm, MaxFlowResult, MaxFlowSolver, PreflowPush, PreflowPushFlow,
    SolverConfig,
};
