//! A small synthetic multi-modal network.

use std::fmt;

use crate::domain::{EdgeId, VertexId};

/// Identity of a transit route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route {}", self.0)
    }
}

/// What an edge can be traversed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Walkable street, rideable with a rented bike
    Street,
    /// A hop between two stops of a transit route
    Transit(RouteId),
}

/// A directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub kind: EdgeKind,
    /// Length in metres.
    pub length_m: f64,
    /// True if turn restrictions start on this edge.
    pub restricted: bool,
}

/// Directed graph with dense vertex and edge ids.
#[derive(Debug, Clone, Default)]
pub struct Network {
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    rental_stations: Vec<bool>,
}

impl Network {
    /// Create a network of `vertex_count` unconnected vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
            rental_stations: vec![false; vertex_count],
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns true if `vertex` belongs to this network.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Add a directed edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not in the network.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        kind: EdgeKind,
        length_m: f64,
    ) -> EdgeId {
        assert!(
            self.contains(from) && self.contains(to),
            "edge endpoint out of range"
        );
        let id = EdgeId::new(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            from,
            to,
            kind,
            length_m,
            restricted: false,
        });
        self.outgoing[from.index()].push(id);
        id
    }

    /// Add a street in both directions.
    pub fn add_street(&mut self, a: VertexId, b: VertexId, length_m: f64) -> (EdgeId, EdgeId) {
        (
            self.add_edge(a, b, EdgeKind::Street, length_m),
            self.add_edge(b, a, EdgeKind::Street, length_m),
        )
    }

    /// Mark an edge as carrying turn restrictions.
    pub fn restrict(&mut self, edge: EdgeId) {
        if let Some(e) = self.edges.get_mut(edge.index()) {
            e.restricted = true;
        }
    }

    /// Mark a vertex as a bike rental station.
    pub fn add_rental_station(&mut self, vertex: VertexId) {
        if let Some(flag) = self.rental_stations.get_mut(vertex.index()) {
            *flag = true;
        }
    }

    /// Returns true if bikes can be rented or returned at `vertex`.
    pub fn is_rental_station(&self, vertex: VertexId) -> bool {
        self.rental_stations
            .get(vertex.index())
            .copied()
            .unwrap_or(false)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Edges leaving `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.outgoing
            .get(vertex.index())
            .into_iter()
            .flatten()
            .filter_map(|id| self.edge(*id))
    }

    /// Build a `width` x `height` street grid with `spacing_m` blocks.
    ///
    /// Vertex `x + y * width` sits at column `x`, row `y`. One transit route
    /// climbs a staircase from the origin corner to the far corner. Both
    /// corners are bike rental stations. Every third eastbound street
    /// carries a turn restriction.
    pub fn grid(width: usize, height: usize, spacing_m: f64) -> Self {
        let mut network = Self::new(width * height);
        let at = |x: usize, y: usize| VertexId::new((x + y * width) as u32);

        for y in 0..height {
            for x in 0..width {
                if x + 1 < width {
                    let (east, _) = network.add_street(at(x, y), at(x + 1, y), spacing_m);
                    if (x + y) % 3 == 0 {
                        network.restrict(east);
                    }
                }
                if y + 1 < height {
                    network.add_street(at(x, y), at(x, y + 1), spacing_m);
                }
            }
        }

        let route = RouteId(1);
        let (mut x, mut y) = (0, 0);
        while x + 1 < width || y + 1 < height {
            let (nx, ny) = if x <= y && x + 1 < width {
                (x + 1, y)
            } else if y + 1 < height {
                (x, y + 1)
            } else {
                (x + 1, y)
            };
            network.add_edge(at(x, y), at(nx, ny), EdgeKind::Transit(route), spacing_m);
            (x, y) = (nx, ny);
        }

        if width * height > 0 {
            network.add_rental_station(at(0, 0));
            network.add_rental_station(at(width - 1, height - 1));
        }

        network
    }
}
