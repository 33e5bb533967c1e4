//! Frontier size statistics for tuning the dominance tolerances.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Summary of how many states each vertex retains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SptStats {
    /// Vertices with a non-empty frontier.
    pub vertices: usize,

    /// Total retained states across all vertices.
    pub states: usize,

    /// Largest frontier at any single vertex.
    pub max_per_vertex: usize,

    /// Mean frontier size, 0 for an empty tree.
    pub avg_per_vertex: f64,

    /// Frontier size -> number of vertices with that size, ascending.
    pub histogram: BTreeMap<usize, usize>,
}

impl SptStats {
    /// Build statistics from the frontier size of every occupied vertex.
    pub fn from_sizes(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut histogram = BTreeMap::new();
        let mut vertices = 0;
        let mut states = 0;
        let mut max_per_vertex = 0;

        for size in sizes {
            *histogram.entry(size).or_insert(0) += 1;
            vertices += 1;
            states += size;
            max_per_vertex = max_per_vertex.max(size);
        }

        let avg_per_vertex = if vertices == 0 {
            0.0
        } else {
            states as f64 / vertices as f64
        };

        Self {
            vertices,
            states,
            max_per_vertex,
            avg_per_vertex,
            histogram,
        }
    }

    /// Render the statistics as a JSON document for an external collector.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SptStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SPT: vertices: {} states: total: {} per vertex max: {} avg: {:.3}",
            self.vertices, self.states, self.max_per_vertex, self.avg_per_vertex
        )?;
        for (size, count) in &self.histogram {
            writeln!(f, "{size} states: {count} vertices.")?;
        }
        Ok(())
    }
}
