//! Great-circle distance helpers, used whenever an edge has to be synthesized
//! between an endpoint and a real intersection

use geo::{Distance, Haversine, Point};

/// Calculate the great-circle distance in metres between two coordinates,
/// each provided as latitude and longitude in degrees
pub fn metres_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    // geo points are (x, y), i.e. (lon, lat)
    let p1: Point = (lon1, lat1).into();
    let p2: Point = (lon2, lat2).into();

    Haversine::distance(p1, p2)
}
