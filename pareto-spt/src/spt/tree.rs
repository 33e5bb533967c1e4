//! Multi-criteria shortest path tree.
//!
//! Each vertex keeps the set of states that no other state at that vertex
//! dominates. The driving search offers every generated state through
//! [`MultiShortestPathTree::add`] and checks every state it pops from its
//! queue with [`MultiShortestPathTree::visit`], skipping those that were
//! pruned after being queued.

use std::fmt;
use std::sync::Arc;

use tracing::{info, trace};

use crate::domain::{PathState, VertexId};

use super::config::DominanceConfig;
use super::dominance::dominates;
use super::stats::SptStats;

/// Operations a driving search needs from its shortest path tree.
pub trait ShortestPathTree<S: PathState> {
    /// Offer a newly generated state. Returns true if it was retained.
    fn add(&mut self, state: Arc<S>) -> bool;

    /// Returns true if this exact state is still retained at its vertex.
    fn visit(&self, state: &Arc<S>) -> bool;

    /// The best complete, accepted state at `dest`.
    fn state(&self, dest: VertexId) -> Option<&Arc<S>>;

    /// All states retained at `dest`, in insertion order.
    fn states(&self, dest: VertexId) -> &[Arc<S>];

    /// Number of vertices holding at least one state.
    fn vertex_count(&self) -> usize;
}

/// Pareto frontier of path states per vertex.
///
/// One tree belongs to one search execution. `R` is the routing request of
/// that search; the tree keeps it for collaborators but never reads it.
#[derive(Debug)]
pub struct MultiShortestPathTree<S, R = ()> {
    /// Routing request the search was started with.
    options: Arc<R>,

    /// Tolerances for the dominance test.
    dominance: DominanceConfig,

    /// Frontier per vertex, indexed by `VertexId::index()`.
    /// An empty list means the vertex has not been reached.
    state_sets: Vec<Vec<Arc<S>>>,

    /// Number of non-empty entries in `state_sets`.
    vertex_count: usize,
}

impl<S: PathState, R> MultiShortestPathTree<S, R> {
    /// Create an empty tree using the default dominance tolerances.
    pub fn new(options: Arc<R>) -> Self {
        Self::with_dominance(options, DominanceConfig::default())
    }

    /// Create an empty tree with explicit dominance tolerances.
    pub fn with_dominance(options: Arc<R>, dominance: DominanceConfig) -> Self {
        Self {
            options,
            dominance,
            state_sets: Vec::new(),
            vertex_count: 0,
        }
    }

    /// Create an empty tree with room for `vertices` vertices.
    ///
    /// Ids are dense, so sizing the table up front avoids regrowing it while
    /// the search spreads out.
    pub fn with_capacity(options: Arc<R>, dominance: DominanceConfig, vertices: usize) -> Self {
        let mut tree = Self::with_dominance(options, dominance);
        tree.state_sets.resize_with(vertices, Vec::new);
        tree
    }

    /// The routing request this tree was built for.
    pub fn options(&self) -> &R {
        &self.options
    }

    /// The dominance tolerances in use.
    pub fn dominance(&self) -> &DominanceConfig {
        &self.dominance
    }

    /// Offer a state to the frontier of its vertex.
    ///
    /// The state is rejected, leaving the frontier untouched, if any retained
    /// state dominates it or if this exact instance is already retained.
    /// Otherwise every retained state it dominates is removed and it is
    /// appended.
    pub fn add(&mut self, state: Arc<S>) -> bool {
        let vertex = state.vertex();
        let index = vertex.index();
        if index >= self.state_sets.len() {
            self.state_sets.resize_with(index + 1, Vec::new);
        }

        let dominance = &self.dominance;
        let states = &mut self.state_sets[index];

        if states.is_empty() {
            states.push(state);
            self.vertex_count += 1;
            return true;
        }

        let rejected = states.iter().any(|old| {
            Arc::ptr_eq(old, &state) || dominates(old.as_ref(), state.as_ref(), dominance)
        });
        if rejected {
            trace!(%vertex, frontier = states.len(), "state dominated, rejected");
            return false;
        }

        let before = states.len();
        states.retain(|old| !dominates(state.as_ref(), old.as_ref(), dominance));
        let pruned = before - states.len();
        if pruned > 0 {
            trace!(%vertex, pruned, "state admitted, pruned dominated states");
        }

        states.push(state);
        true
    }

    /// Returns true if this exact state instance is still on its vertex's
    /// frontier.
    ///
    /// The search queue cannot drop entries, so states pruned after being
    /// queued still come out of it; those should be skipped, not expanded.
    pub fn visit(&self, state: &Arc<S>) -> bool {
        self.states(state.vertex())
            .iter()
            .any(|s| Arc::ptr_eq(s, state))
    }

    /// The best state at `dest` that is a complete path accepted by every
    /// path filter, or `None`.
    pub fn state(&self, dest: VertexId) -> Option<&Arc<S>> {
        let mut best: Option<&Arc<S>> = None;
        for s in self.states(dest) {
            let qualifies = s.is_final() && s.all_path_parsers_accept();
            if qualifies && best.is_none_or(|b| s.better_than(b)) {
                best = Some(s);
            }
        }
        best
    }

    /// All states retained at `dest`, in insertion order. Empty if the
    /// vertex was never reached.
    pub fn states(&self, dest: VertexId) -> &[Arc<S>] {
        self.state_sets
            .get(dest.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every retained state at every vertex.
    pub fn all_states(&self) -> impl Iterator<Item = &Arc<S>> {
        self.state_sets.iter().flatten()
    }

    /// Vertices holding at least one state, in id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.state_sets
            .iter()
            .enumerate()
            .filter(|(_, states)| !states.is_empty())
            .map(|(index, _)| VertexId::new(index as u32))
    }

    /// Number of vertices holding at least one state.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Frontier size statistics.
    pub fn stats(&self) -> SptStats {
        SptStats::from_sizes(
            self.state_sets
                .iter()
                .map(Vec::len)
                .filter(|&size| size > 0),
        )
    }

    /// Log frontier size statistics, one event per histogram bucket.
    pub fn dump(&self) {
        let stats = self.stats();
        info!(
            vertices = stats.vertices,
            states = stats.states,
            max_per_vertex = stats.max_per_vertex,
            avg_per_vertex = stats.avg_per_vertex,
            "SPT frontier sizes"
        );
        for (size, count) in &stats.histogram {
            info!(states = size, vertices = count, "SPT frontier histogram");
        }
    }
}

impl<S: PathState, R> ShortestPathTree<S> for MultiShortestPathTree<S, R> {
    fn add(&mut self, state: Arc<S>) -> bool {
        MultiShortestPathTree::add(self, state)
    }

    fn visit(&self, state: &Arc<S>) -> bool {
        MultiShortestPathTree::visit(self, state)
    }

    fn state(&self, dest: VertexId) -> Option<&Arc<S>> {
        MultiShortestPathTree::state(self, dest)
    }

    fn states(&self, dest: VertexId) -> &[Arc<S>] {
        MultiShortestPathTree::states(self, dest)
    }

    fn vertex_count(&self) -> usize {
        MultiShortestPathTree::vertex_count(self)
    }
}

impl<S, R> fmt::Display for MultiShortestPathTree<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MultiSPT({} vertices)", self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArrivalEdge, EdgeId, ModeFlags};
    use crate::spt::testing::TestState;

    fn tree() -> MultiShortestPathTree<TestState> {
        MultiShortestPathTree::new(Arc::new(()))
    }

    fn v(index: u32) -> VertexId {
        VertexId::new(index)
    }

    fn weights(states: &[Arc<TestState>]) -> Vec<f64> {
        states.iter().map(|s| s.weight()).collect()
    }

    #[test]
    fn first_state_is_accepted() {
        let mut spt = tree();
        let s = Arc::new(TestState::new(3, 10.0, 100, 5.0));

        assert!(spt.add(s.clone()));
        assert_eq!(spt.states(v(3)).len(), 1);
        assert_eq!(spt.vertex_count(), 1);
        assert!(spt.visit(&s));
    }

    #[test]
    fn frontier_scenario() {
        let mut spt = tree();

        let s1 = Arc::new(TestState::new(0, 10.0, 100, 5.0));
        assert!(spt.add(s1.clone()));
        assert_eq!(weights(spt.states(v(0))), vec![10.0]);

        let s2 = Arc::new(TestState::new(0, 9.0, 95, 4.0));
        assert!(spt.add(s2.clone()));
        assert_eq!(weights(spt.states(v(0))), vec![9.0]);

        let s3 = Arc::new(
            TestState::new(0, 50.0, 40, 1.0).with_mode(ModeFlags::WALK.with_bike_renting(true)),
        );
        assert!(spt.add(s3.clone()));
        assert_eq!(weights(spt.states(v(0))), vec![9.0, 50.0]);

        assert!(!spt.visit(&s1));
        assert!(spt.visit(&s2));
        assert!(spt.visit(&s3));
    }

    #[test]
    fn dominated_candidate_is_rejected_without_mutation() {
        let mut spt = tree();
        let good = Arc::new(TestState::new(0, 5.0, 50, 1.0));
        let worse = Arc::new(TestState::new(0, 10.0, 100, 1.0));

        assert!(spt.add(good.clone()));
        assert!(!spt.add(worse.clone()));

        assert_eq!(spt.states(v(0)).len(), 1);
        assert!(spt.visit(&good));
        assert!(!spt.visit(&worse));
    }

    #[test]
    fn rejection_leaves_prunable_states_in_place() {
        let mut spt = tree();
        // The candidate would prune `a`, but `b` dominates the candidate.
        let a = Arc::new(TestState::new(0, 20.0, 200, 1.0).with_routes(&[1]));
        let b = Arc::new(TestState::new(0, 10.0, 150, 100.0).with_routes(&[2]));
        assert!(spt.add(a.clone()));
        assert!(spt.add(b.clone()));

        let candidate = Arc::new(TestState::new(0, 10.0, 150, 100.0));
        assert!(!spt.add(candidate));

        assert_eq!(weights(spt.states(v(0))), vec![20.0, 10.0]);
        assert!(spt.visit(&a));
    }

    #[test]
    fn candidate_prunes_exactly_what_it_dominates() {
        let mut spt = tree();
        let x = Arc::new(TestState::new(0, 10.0, 100, 5.0));
        let y = Arc::new(TestState::new(0, 12.0, 90, 5.0));
        let z = Arc::new(TestState::new(0, 1.0, 1, 5.0).with_mode(ModeFlags::BIKE_RENTING));
        assert!(spt.add(x.clone()));
        assert!(spt.add(y.clone()));
        assert!(spt.add(z.clone()));

        let c = Arc::new(TestState::new(0, 9.0, 80, 5.0));
        assert!(spt.add(c.clone()));

        let retained = spt.states(v(0));
        assert_eq!(retained.len(), 2);
        assert!(Arc::ptr_eq(&retained[0], &z));
        assert!(Arc::ptr_eq(&retained[1], &c));
        assert!(!spt.visit(&x));
        assert!(!spt.visit(&y));
    }

    #[test]
    fn same_instance_is_rejected_twice() {
        let mut spt = tree();
        let s = Arc::new(TestState::new(0, 10.0, 100, 5.0));

        assert!(spt.add(s.clone()));
        assert!(!spt.add(s.clone()));
        assert_eq!(spt.states(v(0)).len(), 1);
    }

    #[test]
    fn same_zero_cost_instance_is_rejected_twice() {
        let mut spt = tree();
        let origin = Arc::new(TestState::new(0, 0.0, 0, 0.0));

        assert!(spt.add(origin.clone()));
        assert!(!spt.add(origin.clone()));
        assert_eq!(spt.states(v(0)).len(), 1);
    }

    #[test]
    fn zero_cost_state_survives_any_arrival() {
        let mut spt = tree();
        let origin = Arc::new(TestState::new(0, 0.0, 0, 0.0));
        assert!(spt.add(origin.clone()));

        for (weight, secs) in [(0.0, 0), (1.0, 1), (0.5, 0)] {
            spt.add(Arc::new(TestState::new(0, weight, secs, 0.0)));
        }

        assert!(spt.visit(&origin));
    }

    #[test]
    fn mode_flags_keep_states_apart() {
        for mode in [
            ModeFlags::BIKE_RENTING,
            ModeFlags::CAR_PARKED,
            ModeFlags::BIKE_PARKED,
        ] {
            let mut spt = tree();
            let plain = Arc::new(TestState::new(0, 10.0, 100, 5.0));
            let flagged = Arc::new(TestState::new(0, 10.0, 100, 5.0).with_mode(mode));

            assert!(spt.add(plain.clone()));
            assert!(spt.add(flagged.clone()));
            assert!(spt.visit(&plain));
            assert!(spt.visit(&flagged));
        }
    }

    #[test]
    fn turn_restricted_arrivals_coexist() {
        let mut spt = tree();
        let worse = Arc::new(
            TestState::new(0, 10.0, 100, 5.0).with_edge(ArrivalEdge::restricted(EdgeId::new(2))),
        );
        let better = Arc::new(
            TestState::new(0, 5.0, 50, 1.0).with_edge(ArrivalEdge::restricted(EdgeId::new(1))),
        );

        assert!(spt.add(worse.clone()));
        assert!(spt.add(better.clone()));
        assert!(spt.visit(&worse));
        assert!(spt.visit(&better));
    }

    #[test]
    fn visit_on_unknown_vertex_is_false() {
        let spt = tree();
        let s = Arc::new(TestState::new(9, 1.0, 1, 1.0));
        assert!(!spt.visit(&s));
    }

    #[test]
    fn best_state_skips_incomplete_and_filtered() {
        let mut spt = tree();
        let complete = Arc::new(TestState::new(0, 20.0, 200, 5.0));
        let incomplete = Arc::new(
            TestState::new(0, 5.0, 50, 5.0)
                .with_mode(ModeFlags::BIKE_RENTING)
                .incomplete(),
        );
        let filtered = Arc::new(
            TestState::new(0, 3.0, 30, 5.0)
                .with_mode(ModeFlags::CAR_PARKED)
                .filtered_out(),
        );
        assert!(spt.add(complete.clone()));
        assert!(spt.add(incomplete));
        assert!(spt.add(filtered));
        assert_eq!(spt.states(v(0)).len(), 3);

        let best = spt.state(v(0)).unwrap();
        assert!(Arc::ptr_eq(best, &complete));
    }

    #[test]
    fn best_state_uses_ranking() {
        let mut spt = tree();
        let a = Arc::new(TestState::new(0, 20.0, 200, 5.0));
        let b = Arc::new(TestState::new(0, 15.0, 300, 5.0).with_mode(ModeFlags::BIKE_PARKED));
        assert!(spt.add(a));
        assert!(spt.add(b.clone()));

        assert!(Arc::ptr_eq(spt.state(v(0)).unwrap(), &b));
    }

    #[test]
    fn best_state_absent() {
        let mut spt = tree();
        assert!(spt.state(v(0)).is_none());

        spt.add(Arc::new(TestState::new(0, 1.0, 1, 1.0).incomplete()));
        assert!(spt.state(v(0)).is_none());
        assert!(spt.state(v(100)).is_none());
    }

    #[test]
    fn states_of_unknown_vertex_is_empty() {
        let mut spt = tree();
        assert!(spt.states(v(4)).is_empty());

        spt.add(Arc::new(TestState::new(10, 1.0, 1, 1.0)));
        assert!(spt.states(v(4)).is_empty());
        assert!(spt.states(v(11)).is_empty());
    }

    #[test]
    fn bulk_retrieval() {
        let mut spt = tree();
        spt.add(Arc::new(TestState::new(4, 1.0, 1, 1.0)));
        spt.add(Arc::new(TestState::new(1, 2.0, 2, 1.0)));
        spt.add(Arc::new(
            TestState::new(1, 3.0, 1, 1.0).with_mode(ModeFlags::BIKE_RENTING),
        ));

        assert_eq!(spt.vertex_count(), 2);
        assert_eq!(spt.vertices().collect::<Vec<_>>(), vec![v(1), v(4)]);
        assert_eq!(spt.all_states().count(), 3);
    }

    #[test]
    fn pruning_does_not_change_vertex_count() {
        let mut spt = tree();
        spt.add(Arc::new(TestState::new(0, 10.0, 100, 1.0)));
        spt.add(Arc::new(TestState::new(0, 1.0, 10, 1.0)));

        assert_eq!(spt.vertex_count(), 1);
        assert_eq!(spt.all_states().count(), 1);
    }

    #[test]
    fn presized_tree_starts_empty() {
        let spt: MultiShortestPathTree<TestState> =
            MultiShortestPathTree::with_capacity(Arc::new(()), DominanceConfig::default(), 16);

        assert_eq!(spt.vertex_count(), 0);
        assert_eq!(spt.vertices().count(), 0);
        assert_eq!(spt.stats().vertices, 0);
    }

    #[test]
    fn options_are_retained() {
        let request = Arc::new(String::from("walk+transit"));
        let spt: MultiShortestPathTree<TestState, String> =
            MultiShortestPathTree::new(request.clone());

        assert_eq!(spt.options(), "walk+transit");
        assert_eq!(spt.dominance(), &DominanceConfig::default());
    }

    #[test]
    fn stats_match_frontiers() {
        let mut spt = tree();
        spt.add(Arc::new(TestState::new(0, 1.0, 1, 1.0)));
        spt.add(Arc::new(TestState::new(2, 1.0, 1, 1.0)));
        spt.add(Arc::new(
            TestState::new(2, 1.0, 1, 1.0).with_mode(ModeFlags::CAR_PARKED),
        ));

        let stats = spt.stats();
        assert_eq!(stats.vertices, 2);
        assert_eq!(stats.states, 3);
        assert_eq!(stats.max_per_vertex, 2);
        assert_eq!(stats.histogram.get(&1), Some(&1));
        assert_eq!(stats.histogram.get(&2), Some(&1));

        spt.dump();
    }

    #[test]
    fn display() {
        let mut spt = tree();
        assert_eq!(spt.to_string(), "MultiSPT(0 vertices)");

        spt.add(Arc::new(TestState::new(0, 1.0, 1, 1.0)));
        spt.add(Arc::new(TestState::new(5, 1.0, 1, 1.0)));
        assert_eq!(spt.to_string(), "MultiSPT(2 vertices)");
    }

    #[test]
    fn usable_through_trait() {
        fn offer<T: ShortestPathTree<TestState>>(tree: &mut T, state: Arc<TestState>) -> bool {
            tree.add(state.clone()) && tree.visit(&state)
        }

        let mut spt = tree();
        assert!(offer(&mut spt, Arc::new(TestState::new(0, 1.0, 1, 1.0))));
        assert_eq!(ShortestPathTree::vertex_count(&spt), 1);
        assert!(ShortestPathTree::state(&spt, v(0)).is_some());
        assert_eq!(ShortestPathTree::states(&spt, v(0)).len(), 1);
    }
}
