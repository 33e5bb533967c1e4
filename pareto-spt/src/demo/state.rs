//! Concrete path states for the demo search.

use crate::domain::{ArrivalEdge, ModeFlags, PathState, VertexId};

use super::network::{Edge, EdgeKind, RouteId};

/// Routing request for the demo search.
///
/// The shortest path tree keeps this for the search but never reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoRequest {
    /// Where the search starts.
    pub origin: VertexId,

    /// Walking speed in metres per second.
    pub walk_speed: f64,

    /// Riding speed of a rented bike in metres per second.
    pub bike_speed: f64,

    /// Transit vehicle speed in metres per second.
    pub transit_speed: f64,

    /// Cost multiplier for time spent walking.
    pub walk_reluctance: f64,

    /// Cost added when boarding a route not ridden immediately before.
    pub board_cost: f64,

    /// Time and cost of renting or returning a bike.
    pub rental_secs: i64,

    /// Paths walking further than this are rejected at the destination.
    pub max_walk_m: f64,
}

impl DemoRequest {
    /// A request from `origin` with default speeds and costs.
    pub fn from_origin(origin: VertexId) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }
}

impl Default for DemoRequest {
    fn default() -> Self {
        Self {
            origin: VertexId::new(0),
            walk_speed: 1.33,
            bike_speed: 5.0,
            transit_speed: 10.0,
            walk_reluctance: 2.0,
            board_cost: 60.0,
            rental_secs: 60,
            max_walk_m: 2000.0,
        }
    }
}

/// A partial path through the demo network.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    vertex: VertexId,
    weight: f64,
    elapsed_secs: i64,
    walk_m: f64,
    mode: ModeFlags,
    back_edge: Option<ArrivalEdge>,
    /// Routes boarded so far, in boarding order.
    routes: Vec<RouteId>,
    /// Route of the arrival edge, if it was a transit hop.
    riding: Option<RouteId>,
    max_walk_m: f64,
}

impl DemoState {
    /// The zero-cost state at the request origin.
    pub fn origin(request: &DemoRequest) -> Self {
        Self {
            vertex: request.origin,
            weight: 0.0,
            elapsed_secs: 0,
            walk_m: 0.0,
            mode: ModeFlags::WALK,
            back_edge: None,
            routes: Vec::new(),
            riding: None,
            max_walk_m: request.max_walk_m,
        }
    }

    /// Routes boarded so far.
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }

    /// The state after traversing `edge`, or `None` if the current mode
    /// cannot use it.
    pub fn traverse(&self, edge: &Edge, request: &DemoRequest) -> Option<Self> {
        if edge.from != self.vertex {
            return None;
        }

        let mut next = self.clone();
        next.vertex = edge.to;
        next.back_edge = Some(if edge.restricted {
            ArrivalEdge::restricted(edge.id)
        } else {
            ArrivalEdge::plain(edge.id)
        });

        match edge.kind {
            EdgeKind::Street if self.mode.is_bike_renting() => {
                let secs = edge.length_m / request.bike_speed;
                next.add_time(secs, secs);
                next.riding = None;
            }
            EdgeKind::Street => {
                let secs = edge.length_m / request.walk_speed;
                next.add_time(secs, secs * request.walk_reluctance);
                next.walk_m += edge.length_m;
                next.riding = None;
            }
            EdgeKind::Transit(_) if self.mode.is_bike_renting() => return None,
            EdgeKind::Transit(route) => {
                let secs = edge.length_m / request.transit_speed;
                next.add_time(secs, secs);
                if self.riding != Some(route) {
                    next.weight += request.board_cost;
                    next.routes.push(route);
                }
                next.riding = Some(route);
            }
        }

        Some(next)
    }

    /// Pick up or return a bike at the current vertex.
    pub fn toggle_rental(&self, request: &DemoRequest) -> Self {
        let mut next = self.clone();
        next.mode = self.mode.with_bike_renting(!self.mode.is_bike_renting());
        next.riding = None;
        let secs = request.rental_secs as f64;
        next.add_time(secs, secs);
        next
    }

    fn add_time(&mut self, secs: f64, cost: f64) {
        self.elapsed_secs += secs.round() as i64;
        self.weight += cost;
    }
}

impl PathState for DemoState {
    fn vertex(&self) -> VertexId {
        self.vertex
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn elapsed_seconds(&self) -> i64 {
        self.elapsed_secs
    }

    fn walk_distance(&self) -> f64 {
        self.walk_m
    }

    fn mode(&self) -> ModeFlags {
        self.mode
    }

    fn back_edge(&self) -> Option<ArrivalEdge> {
        self.back_edge
    }

    /// True if this state's routes appear, in order, in `other`'s routes.
    fn route_sequence_subset(&self, other: &Self) -> bool {
        let mut theirs = other.routes.iter();
        self.routes.iter().all(|r| theirs.any(|o| o == r))
    }

    /// A path ending on a rented bike is not a legal itinerary.
    fn is_final(&self) -> bool {
        !self.mode.is_bike_renting()
    }

    fn all_path_parsers_accept(&self) -> bool {
        self.walk_m <= self.max_walk_m
    }

    fn better_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }
}
