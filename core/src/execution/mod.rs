//! Step-level observation of engine runs

pub mod tracer;
pub mod history;

pub use self::tracer::{ExecutionTracer, NoopTracer, ResidualView, TraceEvent};
pub use self::history::{ExecutionHistory, HistoryError};
