//! Defines a struct to represent a bounding box, which is used to represent
//! a 2d square(ish) on the planet's surface. Only intersections inside the
//! box are read from the map database when building the road graph for a
//! request

use geo::Point;
use geo::{Destination, Haversine};

/// A bounding box for geographical data. Contains the minimum and maximum
/// latitudes & longitudes, defining a 'rectangle' on the surface of the Earth
#[derive(Debug, PartialEq)]
pub struct BBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BBox {
    /// Create a new bounding box based on the north-east and south-west points
    /// of a 'rectangle'
    pub fn from_points(ne: &Point, sw: &Point) -> Self {
        BBox {
            min_lat: sw.y(),
            min_lon: sw.x(),
            max_lat: ne.y(),
            max_lon: ne.x(),
        }
    }

    /// Create the smallest bounding box which contains both of the provided
    /// points, then push each of its edges outwards by `buffer` metres. The
    /// buffer gives the route room to leave the direct line between the two
    /// points, which is almost always required on a real road network
    pub fn around(a: &Point, b: &Point, buffer: f64) -> Self {
        let ne: Point = (a.x().max(b.x()), a.y().max(b.y())).into();
        let sw: Point = (a.x().min(b.x()), a.y().min(b.y())).into();

        let ne = Haversine::destination(ne, 0.0, buffer);
        let ne = Haversine::destination(ne, 90.0, buffer);
        let sw = Haversine::destination(sw, 180.0, buffer);
        let sw = Haversine::destination(sw, 270.0, buffer);

        BBox::from_points(&ne, &sw)
    }
}
