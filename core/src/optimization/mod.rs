//! Throughput helpers layered over the sequential engines

pub mod parallel;

pub use self::parallel::solve_batch;
