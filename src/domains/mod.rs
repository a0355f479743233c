//! Concrete domains for the planner and the learners.

mod graph;
mod grid_world;

pub use graph::{GraphDomain, GraphHeuristic, GraphNode};
pub use grid_world::{GridState, GridWorld, ManhattanHeuristic, EAST, NORTH, SOUTH, WEST};
