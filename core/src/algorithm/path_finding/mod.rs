//! Shortest-path oracles used to seed distance labels
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bfs;

pub use self::bfs::{BreadthFirstSearch, DistanceOracle};
