//! Builds the road graph for a single request from the rows which have been
//! loaded in from PostgreSQL.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::common::config::RouteRequest;
use crate::common::error::Result;
use crate::common::graph_data::Way;
use crate::loading::postgres::{NodeRow, WayRow};
use crate::routing::graph::RoadGraph;

/// Only intersections which are used by at least one way are worth adding
/// to the graph, everything else would be an isolated node
fn get_used_nodes(ways: &[WayRow]) -> FxHashSet<i64> {
    let mut used_nodes = FxHashSet::<i64>::default();

    for way in ways {
        used_nodes.insert(way.src);
        used_nodes.insert(way.dst);
    }

    used_nodes
}

/// Gather up the candidate ways for each ordered pair of intersections. The
/// order in which pairs are first seen is retained
fn group_candidates(ways: &[WayRow]) -> Vec<((i64, i64), Vec<Way>)> {
    let mut groups = Vec::<((i64, i64), Vec<Way>)>::new();
    let mut group_inx = FxHashMap::<(i64, i64), usize>::default();

    for way in ways {
        let key = (way.src, way.dst);
        let inx = *group_inx.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[inx].1.extend(way.candidates());
    }

    groups
}

/// Based on the node and way data which has been loaded in from PostgreSQL,
/// generate a road graph between the endpoints of the provided request.
/// Every way must join two intersections which are present in `nodes`,
/// anything else is reported as an unknown node
pub fn build_graph(
    request: &RouteRequest,
    nodes: Vec<NodeRow>,
    ways: Vec<WayRow>,
) -> Result<RoadGraph> {
    let mut graph = RoadGraph::new(&request.start, &request.end);

    let used_nodes = get_used_nodes(&ways);
    for node in nodes {
        if used_nodes.contains(&node.id) {
            graph.add_node(node.id, node.lat, node.lon)?;
        }
    }

    for ((src, dst), candidates) in group_candidates(&ways) {
        // Any of the names may be the one the endpoint was geocoded to
        let critical: Vec<&Way> = candidates
            .iter()
            .filter(|way| graph.is_critical(way))
            .collect();
        for way in critical {
            graph.add_critical_edge(src, way)?;
        }

        let shortest = candidates
            .iter()
            .min_by(|a, b| a.length.total_cmp(&b.length));
        if let Some(way) = shortest {
            graph.add_edge(src, dst, way.length, &way.name)?;
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "road graph built"
    );

    Ok(graph)
}
