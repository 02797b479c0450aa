use serde::Serialize;

/// One step along a shortest path: the intersection which was reached, the
/// street which was used to reach it, and the distance travelled along that
/// street since the previous intersection
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub lat: f64,
    pub lon: f64,
    pub street: String,
    pub distance: f64,
}

impl PathStep {
    pub fn new(
        lat: f64,
        lon: f64,
        street: impl Into<String>,
        distance: f64,
    ) -> PathStep {
        PathStep {
            lat,
            lon,
            street: street.into(),
            distance,
        }
    }
}

/// Outcome of a request for directions. Two endpoints which cannot be joined
/// by the road network are a normal result rather than an error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Itinerary {
    Directions { steps: Vec<String> },
    Disconnected,
}
