use rand::Rng;
use tracing::{debug, info};

use crate::narration::narrate;
use crate::narration::segments::segment_route;
use crate::routing::dijkstra::shortest_path;
use crate::routing::graph::RoadGraph;
use crate::routing::reachability::is_reachable;
use crate::routing::structs::Itinerary;

/// Generate turn-by-turn directions between the endpoints of the provided
/// graph. A cheap connectivity check is run first, and the shortest path
/// search is skipped entirely when the endpoints aren't connected
pub fn generate_directions<R: Rng + ?Sized>(
    graph: &RoadGraph,
    start_address: &str,
    end_address: &str,
    rng: &mut R,
) -> Itinerary {
    if !is_reachable(graph) {
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "endpoints are not connected"
        );
        return Itinerary::Disconnected;
    }

    // The connectivity check guarantees a path, but an empty itinerary is
    // still preferable to a panic should the two ever disagree
    let path = shortest_path(graph).unwrap_or_default();
    let segments = segment_route(&path);
    debug!(
        steps = path.len(),
        segments = segments.len(),
        "shortest path found"
    );

    Itinerary::Directions {
        steps: narrate(rng, &segments, start_address, end_address),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::config::Endpoint;
    use crate::common::graph_data::{END_ID, START_ID};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn get_test_graph() -> RoadGraph {
        let start = Endpoint::new(0.0, 0.0, "X", "10 First Avenue");
        let end = Endpoint::new(0.0, 0.01, "Y", "20 Second Avenue");
        RoadGraph::new(&start, &end)
    }

    /// origin -> A -> destination, with a different street on each leg
    #[test]
    fn test_end_to_end() {
        let mut graph = get_test_graph();
        let _ = graph.add_node(1, 0.003, 0.0);
        let _ = graph.add_edge(START_ID, 1, 300.0, "X");
        let _ = graph.add_edge(1, END_ID, 700.0, "Y");
        let mut rng = StdRng::seed_from_u64(0);

        let result = generate_directions(
            &graph,
            "10 First Avenue",
            "20 Second Avenue",
            &mut rng,
        );

        let steps = match result {
            Itinerary::Directions { steps } => steps,
            Itinerary::Disconnected => panic!("Endpoints should be connected"),
        };
        assert_eq!(steps.len(), 2);
        assert!(steps[0].contains("10 First Avenue"));
        assert!(steps[0].contains("along X") || steps[0].contains("on X"));
        assert!(steps[0].contains("300 Metres"));
        assert!(steps[1].contains("20 Second Avenue"));
        assert!(
            steps[1].contains("along Y")
                || steps[1].contains("on Y")
                || steps[1].contains("Follow Y"),
            "{}",
            steps[1]
        );
        assert!(steps[1].contains("700 Metres"));
    }

    #[test]
    fn test_disconnected() {
        let mut graph = get_test_graph();
        let _ = graph.add_node(1, 0.003, 0.0);
        let _ = graph.add_edge(START_ID, 1, 300.0, "X");
        let mut rng = StdRng::seed_from_u64(0);

        let result = generate_directions(
            &graph,
            "10 First Avenue",
            "20 Second Avenue",
            &mut rng,
        );

        assert_eq!(result, Itinerary::Disconnected);
    }

    /// The response body is tagged with the outcome
    #[test]
    fn test_serialize_itinerary() {
        let directions = Itinerary::Directions {
            steps: vec!["Go".to_string()],
        };

        let result = serde_json::to_value(&directions).expect("serializable");
        let disconnected = serde_json::to_value(Itinerary::Disconnected)
            .expect("serializable");

        assert_eq!(
            result,
            serde_json::json!({"status": "directions", "steps": ["Go"]})
        );
        assert_eq!(
            disconnected,
            serde_json::json!({"status": "disconnected"})
        );
    }
}
