//! Label-setting search over the demo network.
//!
//! States are expanded cheapest-first from a binary heap. The heap cannot
//! drop entries, so a state that gets pruned from the tree after being
//! queued is still popped later; [`ShortestPathTree::visit`] tells us to
//! skip it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{PathState, VertexId};
use crate::spt::{DominanceConfig, MultiShortestPathTree, ShortestPathTree};

use super::network::Network;
use super::state::{DemoRequest, DemoState};

/// Error from the demo search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The request names a vertex the network does not have
    #[error("vertex {0} is not in the network")]
    UnknownVertex(VertexId),
}

/// Counters from one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Generated states the tree accepted.
    pub accepted: usize,

    /// States popped and expanded.
    pub expanded: usize,

    /// States popped but no longer on their vertex's frontier.
    pub skipped: usize,

    /// Generated states the tree rejected.
    pub rejected: usize,
}

/// Result of [`plan`]: the finished tree plus search counters.
#[derive(Debug)]
pub struct SearchResult {
    pub tree: MultiShortestPathTree<DemoState, DemoRequest>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The best itinerary-worthy state at `dest`.
    pub fn best(&self, dest: VertexId) -> Option<&Arc<DemoState>> {
        self.tree.state(dest)
    }
}

/// Heap entry ordered so that the cheapest state pops first.
struct QueueEntry {
    weight: f64,
    /// Insertion counter, for a stable order between equal weights.
    seq: u64,
    state: Arc<DemoState>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Run a search from `request.origin` to exhaustion, recording states in
/// `tree`.
pub fn search<T: ShortestPathTree<DemoState>>(
    network: &Network,
    request: &DemoRequest,
    tree: &mut T,
) -> Result<SearchStats, SearchError> {
    if !network.contains(request.origin) {
        return Err(SearchError::UnknownVertex(request.origin));
    }

    let mut stats = SearchStats::default();
    let mut queue = BinaryHeap::new();
    let mut seq = 0;

    let mut offer = |state: DemoState,
                     tree: &mut T,
                     queue: &mut BinaryHeap<QueueEntry>,
                     stats: &mut SearchStats| {
        let state = Arc::new(state);
        if tree.add(state.clone()) {
            stats.accepted += 1;
            queue.push(QueueEntry {
                weight: state.weight(),
                seq,
                state,
            });
            seq += 1;
        } else {
            stats.rejected += 1;
        }
    };

    offer(DemoState::origin(request), &mut *tree, &mut queue, &mut stats);

    while let Some(QueueEntry { state, .. }) = queue.pop() {
        if !tree.visit(&state) {
            stats.skipped += 1;
            continue;
        }
        stats.expanded += 1;

        for edge in network.outgoing(state.vertex()) {
            if let Some(next) = state.traverse(edge, request) {
                offer(next, &mut *tree, &mut queue, &mut stats);
            }
        }

        if network.is_rental_station(state.vertex()) {
            offer(state.toggle_rental(request), &mut *tree, &mut queue, &mut stats);
        }
    }

    debug!(
        accepted = stats.accepted,
        expanded = stats.expanded,
        skipped = stats.skipped,
        rejected = stats.rejected,
        vertices = tree.vertex_count(),
        "search complete"
    );

    Ok(stats)
}

/// Build a tree for `request` and search the whole network.
pub fn plan(
    network: &Network,
    request: DemoRequest,
    dominance: DominanceConfig,
) -> Result<SearchResult, SearchError> {
    let request = Arc::new(request);
    let mut tree =
        MultiShortestPathTree::with_capacity(request.clone(), dominance, network.vertex_count());
    let stats = search(network, &request, &mut tree)?;
    Ok(SearchResult { tree, stats })
}
