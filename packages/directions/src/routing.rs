//! Route finding between the two endpoints of a request: a connectivity
//! check, followed by a shortest path search over the road graph.

pub mod dijkstra;
pub mod directions;
pub mod graph;
pub mod reachability;
pub mod structs;
