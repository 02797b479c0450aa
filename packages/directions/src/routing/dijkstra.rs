//! Shortest path search over a RoadGraph. The working state of a search
//! (best known distance, predecessor and the street used to reach each node)
//! lives in vectors addressed by NodeIndex rather than on the nodes
//! themselves, so the graph is never mutated by a search and every run starts
//! from a clean slate.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::routing::graph::RoadGraph;
use crate::routing::structs::PathStep;

/// Distance assigned to nodes which have not been reached yet. This is the
/// circumference of the Earth in metres, no drivable route is longer
pub const UNREACHED: f64 = 40_075_000.0;

/// Entry in the search frontier, ordered so that BinaryHeap pops the
/// smallest distance first
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    distance: f64,
    node: NodeIndex,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a single shortest path search from the start node
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    distance: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    predecessor_street: Vec<Option<String>>,
    source: NodeIndex,
}

impl ShortestPaths {
    /// Best distance found to the node, None if it was never reached
    pub fn distance(&self, node: NodeIndex) -> Option<f64> {
        match self.distance.get(node.index()) {
            Some(dist) if *dist < UNREACHED => Some(*dist),
            _ => None,
        }
    }

    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.predecessor.get(node.index()).copied().flatten()
    }

    pub fn predecessor_street(&self, node: NodeIndex) -> Option<&str> {
        self.predecessor_street
            .get(node.index())
            .and_then(|street| street.as_deref())
    }

    /// Walk the predecessor chain back from `target` to the start node,
    /// returning one step per intersection along the way (the start node has
    /// no inbound edge, so contributes nothing). Steps are ordered from the
    /// start to `target`. None is returned if `target` was never reached
    pub fn path_to(
        &self,
        graph: &RoadGraph,
        target: NodeIndex,
    ) -> Option<Vec<PathStep>> {
        self.distance(target)?;

        let mut steps = Vec::<PathStep>::new();
        let mut node = target;
        while let Some(prev) = self.predecessor(node) {
            let data = &graph.graph()[node];
            let street = self.predecessor_street(node).unwrap_or_default();
            let delta =
                self.distance[node.index()] - self.distance[prev.index()];
            steps.push(PathStep::new(data.lat, data.lon, street, delta));
            node = prev;
        }

        // Should always hold, as the chain can only be built from the source
        debug_assert_eq!(node, self.source);

        steps.reverse();
        Some(steps)
    }
}

/// Run Dijkstra's algorithm from the start node of the provided graph. Stale
/// frontier entries are skipped as they are popped rather than being removed
/// when a shorter distance is found, which is safe as edge lengths are never
/// negative
pub fn dijkstra(graph: &RoadGraph) -> ShortestPaths {
    let source = graph.start();
    let arena = graph.graph();
    let size = arena.node_count();

    let mut distance = vec![UNREACHED; size];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; size];
    let mut predecessor_street: Vec<Option<String>> = vec![None; size];

    let mut frontier = BinaryHeap::<Frontier>::new();
    distance[source.index()] = 0.0;
    frontier.push(Frontier {
        distance: 0.0,
        node: source,
    });

    while let Some(Frontier { distance: dist, node: u }) = frontier.pop() {
        if dist > distance[u.index()] {
            continue;
        }

        for eref in arena.edges(u) {
            let v = eref.target();
            let candidate = dist + eref.weight().length;
            if candidate < distance[v.index()] {
                distance[v.index()] = candidate;
                predecessor[v.index()] = Some(u);
                predecessor_street[v.index()] =
                    Some(eref.weight().street.clone());
                frontier.push(Frontier {
                    distance: candidate,
                    node: v,
                });
            }
        }
    }

    ShortestPaths {
        distance,
        predecessor,
        predecessor_street,
        source,
    }
}

/// Compute the shortest path from the start node to the end node of the
/// graph. None is returned if the end node can't be reached
pub fn shortest_path(graph: &RoadGraph) -> Option<Vec<PathStep>> {
    dijkstra(graph).path_to(graph, graph.end())
}
