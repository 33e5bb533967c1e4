//! Domain types shared between the frontier and the search driving it.
//!
//! Vertices and edges are identified by dense ids. Path states are owned
//! by the search; this crate only sees them through [`PathState`].

mod edge;
mod mode;
mod state;
mod vertex;

pub use edge::ArrivalEdge;
pub use mode::ModeFlags;
pub use state::PathState;
pub use vertex::{EdgeId, VertexId};
