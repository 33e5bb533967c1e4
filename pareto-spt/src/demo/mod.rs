//! A minimal multi-modal router driving the shortest path tree.
//!
//! This is the smallest search that exercises every tree operation: a
//! synthetic street grid with transit and bike rental, concrete path
//! states, and a label-setting loop over a binary heap.

mod network;
mod search;
mod state;

pub use network::{Edge, EdgeKind, Network, RouteId};
pub use search::{SearchError, SearchResult, SearchStats, plan, search};
pub use state::{DemoRequest, DemoState};
