//! Dense identity keys for search vertices and edges.

use std::fmt;

/// Identity of a search-graph vertex.
///
/// Ids are assigned once per vertex instance when the graph is built and
/// are dense, so a frontier can be a plain indexed table. Two vertices that
/// happen to describe the same place are still distinct if they carry
/// different ids.
///
/// # Examples
///
/// ```
/// use pareto_spt::domain::VertexId;
///
/// let v = VertexId::new(7);
/// assert_eq!(v.index(), 7);
/// assert_eq!(v.to_string(), "v7");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

impl VertexId {
    /// Wrap a raw vertex index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the position of this vertex in dense tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Identity of a directed search-graph edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Wrap a raw edge index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the position of this edge in dense tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
