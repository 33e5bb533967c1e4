//! Arrival edge references carried by path states.

use super::EdgeId;

/// The edge a path state used to reach its vertex.
///
/// Only the edge identity and whether it carries turn restrictions matter
/// to the frontier; the rest of the edge model lives with the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrivalEdge {
    /// Identity of the traversed edge.
    pub id: EdgeId,
    /// True if one or more turn restrictions start on this edge.
    pub restricted: bool,
}

impl ArrivalEdge {
    /// An edge without turn restrictions.
    pub const fn plain(id: EdgeId) -> Self {
        Self {
            id,
            restricted: false,
        }
    }

    /// An edge carrying at least one turn restriction.
    pub const fn restricted(id: EdgeId) -> Self {
        Self {
            id,
            restricted: true,
        }
    }

    /// Returns true if `other` is a different edge than this one.
    ///
    /// A missing edge (the search origin) is different from every edge.
    pub fn differs_from(&self, other: Option<&ArrivalEdge>) -> bool {
        other.is_none_or(|o| o.id != self.id)
    }
}
