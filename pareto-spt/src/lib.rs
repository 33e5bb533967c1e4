//! Pareto-optimal shortest path tree for multi-modal routing.
//!
//! A router optimizing generalized cost, elapsed time and walk distance at
//! once has no single best state per vertex. [`spt::MultiShortestPathTree`]
//! keeps the non-dominated states of every vertex while a search runs and
//! picks the reported answer once it is done.

pub mod demo;
pub mod domain;
pub mod spt;
