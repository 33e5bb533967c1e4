//! The path-state contract the frontier relies on.

use chrono::Duration;

use super::{ArrivalEdge, ModeFlags, VertexId};

/// A snapshot of a partial path, produced by the driving search.
///
/// The frontier only reads states. Numeric fields are expected to be
/// finite and non-negative; producing anything else is a bug upstream.
pub trait PathState {
    /// The vertex this state has reached.
    fn vertex(&self) -> VertexId;

    /// Generalized cost accumulated so far.
    fn weight(&self) -> f64;

    /// Elapsed time since the search origin, in whole seconds.
    fn elapsed_seconds(&self) -> i64;

    /// Distance walked so far, in metres.
    fn walk_distance(&self) -> f64;

    /// Current travel-mode conditions.
    fn mode(&self) -> ModeFlags;

    /// The edge used to arrive here, `None` at the origin.
    fn back_edge(&self) -> Option<ArrivalEdge>;

    /// True if the transit routes used by this state are contained in the
    /// route history of `other`.
    fn route_sequence_subset(&self, other: &Self) -> bool;

    /// True if this state is a legal complete path.
    fn is_final(&self) -> bool;

    /// True if every configured path filter accepts this state.
    fn all_path_parsers_accept(&self) -> bool;

    /// Total order used only to pick the reported answer at a destination.
    fn better_than(&self, other: &Self) -> bool;

    /// Elapsed time as a duration, saturating at [`Duration::MIN`] and
    /// [`Duration::MAX`].
    fn elapsed_time(&self) -> Duration {
        let secs = self.elapsed_seconds();
        Duration::try_seconds(secs).unwrap_or(if secs < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }
}
