/// Id reserved for the synthetic node at the requested start address
pub const START_ID: i64 = -1;

/// Id reserved for the synthetic node at the requested end address
pub const END_ID: i64 = -2;

/// Sets the data which will be stored as node weights in the road graph.
/// Shortest path working state is deliberately not stored here, see
/// `routing::dijkstra::ShortestPaths`
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct NodeData {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

/// Container for edge metadata which will be stored in the road graph
#[derive(Default, Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub length: f64,
    pub street: String,
}

/// A candidate way between two intersections, as offered by the map data.
/// Several of these may exist for the same pair of intersections, only the
/// shortest will make it into the graph
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub length: f64,
    pub name: String,
}

impl Way {
    pub fn new(length: f64, name: impl Into<String>) -> Way {
        Way {
            length,
            name: name.into(),
        }
    }
}

/// Appended to the road class of ways which have no name of their own, e.g.
/// `secondary_link_` or `residential_`
pub const UNNAMED_MARKER: char = '_';

/// Generate a placeholder name for an unnamed way of the provided road class
pub fn unnamed_way(highway: &str) -> String {
    format!("{highway}{UNNAMED_MARKER}")
}

/// Check whether a street name was generated by unnamed_way
pub fn is_unnamed(street: &str) -> bool {
    street.contains(UNNAMED_MARKER)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_unnamed_way() {
        let result = unnamed_way("secondary_link");

        assert_eq!(result, "secondary_link_");
        assert!(is_unnamed(&result));
    }

    #[test]
    fn test_named_way() {
        assert!(!is_unnamed("King Street West"));
    }
}
