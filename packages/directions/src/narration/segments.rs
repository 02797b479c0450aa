//! Collapses the intersection-by-intersection output of the shortest path
//! search into one segment per street, each carrying the heading of travel
//! and the turn used to join it.

use crate::common::graph_data::is_unnamed;
use crate::narration::compass::{
    Direction, Turn, determine_direction, determine_turn,
};
use crate::routing::structs::PathStep;

const COMPASS_SUFFIXES: [&str; 4] = ["north", "south", "east", "west"];

/// A stretch of the route spent on a single street
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub street: String,
    pub length: f64,
    pub direction: Direction,
    pub turn: Turn,
}

/// The map data is inconsistent about directional suffixes, with one street
/// switching between e.g. "King Street West" and "King Street" from one
/// intersection to the next. Drop any trailing compass direction from
/// names with more than one word so these compare equal
pub fn normalize_street(street: &str) -> String {
    let words: Vec<&str> = street.split_whitespace().collect();

    match words.split_last() {
        Some((last, rest))
            if !rest.is_empty()
                && COMPASS_SUFFIXES.contains(&last.to_lowercase().as_str()) =>
        {
            rest.join(" ")
        }
        _ => street.trim().to_string(),
    }
}

/// Group consecutive path steps on the same street into segments. Unnamed
/// links (slip roads, roundabout slivers) are not worth a sentence of their
/// own, so their length is folded into the segment before them. When the
/// same street is rejoined straight after such a link, the two halves are
/// merged back together
pub fn segment_route(path: &[PathStep]) -> Vec<RouteSegment> {
    let mut segments = Vec::<RouteSegment>::new();
    let mut prev_end: Option<(f64, f64)> = None;
    // Length of unnamed links seen before the first named street
    let mut carried = 0.0;

    let mut inx = 0;
    while inx < path.len() {
        let street = normalize_street(&path[inx].street);
        let run = path[inx..]
            .iter()
            .take_while(|step| normalize_street(&step.street) == street)
            .count();
        let group = &path[inx..inx + run];
        inx += run;

        let first = &group[0];
        let last = &group[run - 1];
        let start = (first.lat, first.lon);
        let end = (last.lat, last.lon);
        let length: f64 = group.iter().map(|step| step.distance).sum();

        // Headings after the first street measure the net displacement from
        // the end of the previous street, across the turn
        let (direction, turn) = match (prev_end, segments.last()) {
            (Some(prev), Some(seg)) => {
                let joined = determine_direction(prev, start);
                (
                    determine_direction(prev, end),
                    determine_turn(seg.direction, joined),
                )
            }
            (Some(prev), None) => {
                (determine_direction(prev, end), Turn::Unknown)
            }
            (None, _) => (determine_direction(start, end), Turn::Unknown),
        };
        prev_end = Some(end);

        match segments.last_mut() {
            Some(seg) if seg.street == street || is_unnamed(&street) => {
                seg.length += length;
            }
            None if is_unnamed(&street) => carried += length,
            _ => {
                segments.push(RouteSegment {
                    street,
                    length: length + carried,
                    direction,
                    turn,
                });
                carried = 0.0;
            }
        }
    }

    segments
}
