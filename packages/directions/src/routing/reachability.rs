//! Cheap connectivity check between the endpoints, run before committing to
//! a full shortest path search. Endpoints near coastlines or other natural
//! barriers are frequently not joined by any road within the bounding box.

use petgraph::visit::{EdgeRef, VisitMap, Visitable};

use crate::routing::graph::RoadGraph;

/// Determine whether the end node can be reached from the start node using
/// an iterative depth first search. Returns as soon as any edge leading to
/// the end node is found
pub fn is_reachable(graph: &RoadGraph) -> bool {
    let arena = graph.graph();
    let end = graph.end();

    let mut discovered = arena.visit_map();
    let mut stack = vec![graph.start()];
    discovered.visit(graph.start());

    while let Some(u) = stack.pop() {
        for eref in arena.edges(u) {
            let v = eref.target();
            if v == end {
                return true;
            }
            // visit returns true the first time a node is seen
            if discovered.visit(v) {
                stack.push(v);
            }
        }
    }

    false
}
