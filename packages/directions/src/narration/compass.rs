//! Compass headings and turns, inferred purely from the coordinates of the
//! intersections along a route.

use std::fmt;

/// Below this latitude/longitude ratio travel is east or west
const LON_DOMINANT: f64 = 0.30;

/// Above this latitude/longitude ratio travel is north or south
const LAT_DOMINANT: f64 = 0.70;

/// Ratio used when there is no change in longitude at all, just past the
/// latitude dominant threshold
const NO_LON_CHANGE: f64 = 0.71;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Combine a north/south and an east/west heading into a single one
    fn combine(lat: Direction, lon: Direction) -> Direction {
        match (lat, lon) {
            (Direction::North, Direction::East) => Direction::NorthEast,
            (Direction::North, Direction::West) => Direction::NorthWest,
            (Direction::South, Direction::East) => Direction::SouthEast,
            (Direction::South, Direction::West) => Direction::SouthWest,
            (lat, _) => lat,
        }
    }

    /// Split a combined heading into its north/south and east/west parts
    fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NorthEast => Some((Direction::North, Direction::East)),
            Direction::NorthWest => Some((Direction::North, Direction::West)),
            Direction::SouthEast => Some((Direction::South, Direction::East)),
            Direction::SouthWest => Some((Direction::South, Direction::West)),
            _ => None,
        }
    }

    pub fn is_combined(self) -> bool {
        self.components().is_some()
    }

    fn is_north_south(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Reduce a combined heading to whichever of its parts contrasts most
    /// with `other`: the east/west part when `other` is north or south, the
    /// north/south part otherwise. Simple headings are returned unchanged
    fn reduce_against(self, other: Direction) -> Direction {
        match self.components() {
            Some((lat, lon)) => {
                if other.is_north_south() {
                    lon
                } else {
                    lat
                }
            }
            None => self,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::NorthEast => "North-East",
            Direction::NorthWest => "North-West",
            Direction::SouthEast => "South-East",
            Direction::SouthWest => "South-West",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Unknown,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Turn::Left => "Left",
            Turn::Right => "Right",
            Turn::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Determine the heading of travel between two coordinates, each provided as
/// (latitude, longitude). Headings are simple when one axis clearly dominates
/// the displacement and combined when it is split fairly evenly
pub fn determine_direction(from: (f64, f64), to: (f64, f64)) -> Direction {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat_dir = if lat1 < lat2 {
        Direction::North
    } else {
        Direction::South
    };
    let lon_dir = if lon1 < lon2 {
        Direction::East
    } else {
        Direction::West
    };

    let lon_delta = (lon1 - lon2).abs();
    let ratio = if lon_delta == 0.0 {
        NO_LON_CHANGE
    } else {
        (lat1 - lat2).abs() / lon_delta
    };

    if (LON_DOMINANT..=LAT_DOMINANT).contains(&ratio) {
        Direction::combine(lat_dir, lon_dir)
    } else if ratio > LAT_DOMINANT {
        lat_dir
    } else {
        lon_dir
    }
}

/// Determine the turn required to go from facing `from` to facing `to`. Only
/// quarter turns between simple headings are recognised; anything else
/// (including carrying straight on) is Unknown
pub fn determine_turn(from: Direction, to: Direction) -> Turn {
    // The second heading is reduced against the already reduced first one
    let from = from.reduce_against(to);
    let to = to.reduce_against(from);

    match (from, to) {
        (Direction::North, Direction::East) => Turn::Right,
        (Direction::North, Direction::West) => Turn::Left,
        (Direction::South, Direction::East) => Turn::Left,
        (Direction::South, Direction::West) => Turn::Right,
        (Direction::East, Direction::North) => Turn::Left,
        (Direction::East, Direction::South) => Turn::Right,
        (Direction::West, Direction::North) => Turn::Right,
        (Direction::West, Direction::South) => Turn::Left,
        _ => Turn::Unknown,
    }
}
