//! Sentence templates for narrating a route. Each instruction is assembled
//! from randomly chosen fragments so that a long itinerary doesn't read like
//! a form letter; placeholders in the fragments are then filled in from the
//! segments being described.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::narration::compass::{Direction, Turn};
use crate::narration::segments::RouteSegment;

const STREET: &str = "< street >";
const DISTANCE: &str = "< distance >";
const HEADING: &str = "< heading >";
const NEXT_STREET: &str = "< next_street >";
const NEXT_HEADING: &str = "< next_heading >";
const TURN: &str = "< turn >";

/// Used for the first instruction only, which always follows the start
/// address so is written in lower case
const OPENINGS: [&str; 4] = [
    "drive < heading >",
    "head < heading >",
    "travel < heading >",
    "go < heading >",
];

const CONTINUATIONS: [&str; 9] = [
    "Follow < street >",
    "Travel along < street >",
    "Travel on < street >",
    "Drive along < street >",
    "Drive on < street >",
    "Drive < heading >",
    "Continue < heading >",
    "Head < heading >",
    "Go < heading >",
];

const HEADING_MIDDLES: [&str; 3] = [
    ", heading < heading > for < distance >",
    ", and head < heading > for < distance >",
    " and go < heading > for < distance >",
];

const STREET_MIDDLES: [&str; 2] = [
    " along < street > for < distance >",
    " on < street > for < distance >",
];

const KNOWN_TURN_ENDINGS: [&str; 4] = [
    ". Then turn < turn > onto < next_street >.",
    " before turning < turn > onto < next_street >.",
    " and turn < turn > onto < next_street >.",
    " and then turn < turn > onto < next_street >.",
];

const UNKNOWN_TURN_ENDINGS: [&str; 5] = [
    ". Then head < next_heading > on < next_street >.",
    " before heading < next_heading > on < next_street >.",
    ". Then turn onto < next_street >.",
    " and head < next_heading > on < next_street >.",
    " and turn onto < next_street >.",
];

static PLACEHOLDERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build([STREET, DISTANCE, HEADING, NEXT_STREET, NEXT_HEADING, TURN])
        .expect("Something went wrong while setting up aho-corasick")
});

/// Pick one of the provided fragments at random
fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    options: &[&'static str],
) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Render a distance in metres for display. Anything under 1km is given to
/// the nearest metre, longer distances in km to one decimal place
pub fn format_distance(metres: f64) -> String {
    let metres = metres.round();
    if metres >= 1000.0 {
        let km = format!("{:.1}", metres / 1000.0);
        let km = km.strip_suffix(".0").unwrap_or(&km);
        format!("{km} Kilometres")
    } else {
        format!("{} Metres", metres as i64)
    }
}

/// Render a heading for display. Simple headings read better with a
/// '-bound' suffix, e.g. 'North-bound'
pub fn format_heading(direction: Direction) -> String {
    if direction.is_combined() {
        direction.to_string()
    } else {
        format!("{direction}-bound")
    }
}

/// Build the template for a single instruction, with placeholders still in
/// place. `next` is the segment which follows this one, if any
fn build_template<R: Rng + ?Sized>(
    rng: &mut R,
    first: bool,
    next: Option<&RouteSegment>,
) -> String {
    let mut template = String::new();

    if first {
        template.push_str(pick(rng, &OPENINGS));
        template.push_str(pick(rng, &STREET_MIDDLES));
    } else {
        let start = pick(rng, &CONTINUATIONS);
        template.push_str(start);
        // Mention whichever of street/heading the start of the sentence
        // didn't
        if start.contains(STREET) {
            template.push_str(pick(rng, &HEADING_MIDDLES));
        } else {
            template.push_str(pick(rng, &STREET_MIDDLES));
        }
    }

    if let Some(next) = next {
        match next.turn {
            Turn::Unknown => {
                template.push_str(pick(rng, &UNKNOWN_TURN_ENDINGS))
            }
            _ => template.push_str(pick(rng, &KNOWN_TURN_ENDINGS)),
        }
    }

    template
}

/// Generate a single instruction describing `segment`. The first instruction
/// of a route is phrased differently, and all but the last instruction end by
/// describing how to join the next segment
pub fn build_sentence<R: Rng + ?Sized>(
    rng: &mut R,
    first: bool,
    segment: &RouteSegment,
    next: Option<&RouteSegment>,
) -> String {
    let template = build_template(rng, first, next);

    let (next_street, next_heading, turn) = match next {
        Some(next) => (
            next.street.clone(),
            format_heading(next.direction),
            next.turn.to_string().to_lowercase(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    let replace_with = [
        segment.street.clone(),
        format_distance(segment.length),
        format_heading(segment.direction),
        next_street,
        next_heading,
        turn,
    ];

    PLACEHOLDERS.replace_all(&template, &replace_with)
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn get_test_segment(
        street: &str,
        length: f64,
        turn: Turn,
    ) -> RouteSegment {
        RouteSegment {
            street: street.to_string(),
            length,
            direction: Direction::North,
            turn,
        }
    }

    #[cfg(test)]
    mod test_format_distance {

        use super::*;

        #[test]
        fn test_metres() {
            assert_eq!(format_distance(450.0), "450 Metres");
        }

        #[test]
        fn test_metres_rounded() {
            assert_eq!(format_distance(299.6), "300 Metres");
            assert_eq!(format_distance(12.2), "12 Metres");
        }

        #[test]
        fn test_kilometres() {
            assert_eq!(format_distance(1500.0), "1.5 Kilometres");
            assert_eq!(format_distance(12345.0), "12.3 Kilometres");
        }

        /// Whole kilometres are given without a decimal place
        #[test]
        fn test_whole_kilometres() {
            assert_eq!(format_distance(2000.0), "2 Kilometres");
            assert_eq!(format_distance(10000.0), "10 Kilometres");
        }

        /// Distances which round up to 1km are given in kilometres
        #[test]
        fn test_rounds_up_to_kilometres() {
            assert_eq!(format_distance(999.6), "1 Kilometres");
            assert_eq!(format_distance(999.4), "999 Metres");
        }

        #[test]
        fn test_zero() {
            assert_eq!(format_distance(0.0), "0 Metres");
        }
    }

    #[test]
    fn test_format_heading() {
        assert_eq!(format_heading(Direction::South), "South-bound");
        assert_eq!(format_heading(Direction::SouthWest), "South-West");
    }

    /// All placeholders are filled in, whichever fragments are chosen
    #[test]
    fn test_no_placeholders_left() {
        let mut rng = StdRng::seed_from_u64(0);
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);
        let known = get_test_segment("Queen Street", 700.0, Turn::Left);
        let unknown = get_test_segment("Queen Street", 700.0, Turn::Unknown);

        for _ in 0..200 {
            for first in [true, false] {
                for next in [Some(&known), Some(&unknown), None] {
                    let result =
                        build_sentence(&mut rng, first, &segment, next);
                    assert!(!result.contains('<'), "{result}");
                    assert!(!result.contains('>'), "{result}");
                }
            }
        }
    }

    /// Every sentence mentions the current street and its length
    #[test]
    fn test_mentions_street_and_distance() {
        let mut rng = StdRng::seed_from_u64(1);
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);

        for _ in 0..200 {
            let first = build_sentence(&mut rng, true, &segment, None);
            let later = build_sentence(&mut rng, false, &segment, None);

            for result in [first, later] {
                assert!(result.contains("King Street"), "{result}");
                assert!(result.contains("300 Metres"), "{result}");
            }
        }
    }

    /// Known turns are described, and the next street is always named
    #[test]
    fn test_known_turn_ending() {
        let mut rng = StdRng::seed_from_u64(2);
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);
        let next = get_test_segment("Queen Street", 700.0, Turn::Right);

        for _ in 0..200 {
            let result =
                build_sentence(&mut rng, false, &segment, Some(&next));

            assert!(result.contains("right onto Queen Street"), "{result}");
            assert!(result.ends_with('.'));
        }
    }

    /// Unknown turns never mention left or right
    #[test]
    fn test_unknown_turn_ending() {
        let mut rng = StdRng::seed_from_u64(3);
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);
        let next = get_test_segment("Queen Street", 700.0, Turn::Unknown);

        for _ in 0..200 {
            let result =
                build_sentence(&mut rng, false, &segment, Some(&next));

            assert!(result.contains("Queen Street"), "{result}");
            assert!(!result.contains("left") && !result.contains("right"));
        }
    }

    /// The first sentence always starts with a lower case direction
    #[test]
    fn test_first_sentence_opening() {
        let mut rng = StdRng::seed_from_u64(4);
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);

        for _ in 0..50 {
            let result = build_sentence(&mut rng, true, &segment, None);

            assert!(result.contains("North-bound along King Street")
                || result.contains("North-bound on King Street"));
            assert!(result.starts_with(char::is_lowercase));
        }
    }

    /// The same seed always gives the same wording
    #[test]
    fn test_seeded_output_repeatable() {
        let segment = get_test_segment("King Street", 300.0, Turn::Unknown);
        let next = get_test_segment("Queen Street", 700.0, Turn::Left);

        let mut rng = StdRng::seed_from_u64(9);
        let first = build_sentence(&mut rng, false, &segment, Some(&next));
        let mut rng = StdRng::seed_from_u64(9);
        let second = build_sentence(&mut rng, false, &segment, Some(&next));

        assert_eq!(first, second);
    }
}
