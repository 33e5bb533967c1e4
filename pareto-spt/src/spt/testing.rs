//! A configurable path state for frontier tests.

use crate::domain::{ArrivalEdge, ModeFlags, PathState, VertexId};

#[derive(Debug, Clone)]
pub struct TestState {
    vertex: VertexId,
    weight: f64,
    elapsed_secs: i64,
    walk: f64,
    mode: ModeFlags,
    back_edge: Option<ArrivalEdge>,
    routes: Vec<u32>,
    complete: bool,
    accepted: bool,
}

impl TestState {
    pub fn new(vertex: u32, weight: f64, elapsed_secs: i64, walk: f64) -> Self {
        Self {
            vertex: VertexId::new(vertex),
            weight,
            elapsed_secs,
            walk,
            mode: ModeFlags::WALK,
            back_edge: None,
            routes: Vec::new(),
            complete: true,
            accepted: true,
        }
    }

    pub fn with_mode(mut self, mode: ModeFlags) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_edge(mut self, edge: ArrivalEdge) -> Self {
        self.back_edge = Some(edge);
        self
    }

    pub fn with_routes(mut self, routes: &[u32]) -> Self {
        self.routes = routes.to_vec();
        self
    }

    pub fn incomplete(mut self) -> Self {
        self.complete = false;
        self
    }

    pub fn filtered_out(mut self) -> Self {
        self.accepted = false;
        self
    }
}

impl PathState for TestState {
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
        self.walk
    }

    fn mode(&self) -> ModeFlags {
        self.mode
    }

    fn back_edge(&self) -> Option<ArrivalEdge> {
        self.back_edge
    }

    fn route_sequence_subset(&self, other: &Self) -> bool {
        self.routes.iter().all(|r| other.routes.contains(r))
    }

    fn is_final(&self) -> bool {
        self.complete
    }

    fn all_path_parsers_accept(&self) -> bool {
        self.accepted
    }

    fn better_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }
}
