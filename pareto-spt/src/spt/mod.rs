//! Pareto-optimal shortest path tree.
//!
//! A router that optimizes several objectives at once has no single best
//! state per vertex. This module keeps, per vertex, the set of states that
//! no other state renders obsolete, and answers the queries a search needs
//! while running and after it finishes.

mod config;
mod dominance;
mod stats;
mod tree;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, DominanceConfig};
pub use dominance::dominates;
pub use stats::SptStats;
pub use tree::{MultiShortestPathTree, ShortestPathTree};
