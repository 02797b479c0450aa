//! Turns the output of the shortest path search into a list of human readable
//! instructions: the path is first collapsed into one segment per street,
//! then each segment is described in a randomly worded sentence.

pub mod compass;
pub mod segments;
pub mod sentences;

use rand::Rng;

use crate::narration::segments::RouteSegment;
use crate::narration::sentences::build_sentence;

/// Generate one instruction per segment. The first instruction starts from
/// `start_address`, and the last finishes at `end_address`. Wording is
/// chosen using the provided rng, so a seeded rng gives repeatable output
pub fn narrate<R: Rng + ?Sized>(
    rng: &mut R,
    segments: &[RouteSegment],
    start_address: &str,
    end_address: &str,
) -> Vec<String> {
    // Start and end were joined directly, with nothing to describe
    if segments.is_empty() {
        return vec![format!(
            "Starting at your location {start_address}, you will have \
             arrived at your destination at {end_address}."
        )];
    }

    let last = segments.len() - 1;
    let mut itinerary = Vec::<String>::with_capacity(segments.len());

    for (inx, segment) in segments.iter().enumerate() {
        let next = segments.get(inx + 1);
        let mut sentence = build_sentence(rng, inx == 0, segment, next);

        if inx == 0 {
            sentence = format!(
                "Starting at your location {start_address}, {sentence}"
            );
        }
        if inx == last {
            sentence = format!(
                "{sentence} and you will have arrived at your destination at \
                 {end_address}."
            );
        }

        itinerary.push(sentence);
    }

    itinerary
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::narration::compass::{Direction, Turn};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn get_test_segments() -> Vec<RouteSegment> {
        vec![
            RouteSegment {
                street: "King Street".to_string(),
                length: 300.0,
                direction: Direction::East,
                turn: Turn::Unknown,
            },
            RouteSegment {
                street: "Bay Street".to_string(),
                length: 1500.0,
                direction: Direction::North,
                turn: Turn::Left,
            },
            RouteSegment {
                street: "Queen Street".to_string(),
                length: 2000.0,
                direction: Direction::NorthWest,
                turn: Turn::Unknown,
            },
        ]
    }

    /// One instruction is generated per segment, with the addresses at
    /// either end
    #[test]
    fn test_narrate() {
        let mut rng = StdRng::seed_from_u64(0);
        let segments = get_test_segments();

        let result = narrate(&mut rng, &segments, "1 King St", "2 Queen St");

        assert_eq!(result.len(), 3);
        assert!(
            result[0].starts_with("Starting at your location 1 King St, ")
        );
        assert!(result[0].contains("King Street"));
        assert!(result[0].contains("300 Metres"));
        assert!(result[0].contains("left onto Bay Street"));
        assert!(result[1].contains("1.5 Kilometres"));
        assert!(result[1].contains("Queen Street"));
        assert!(result[2].contains("2 Kilometres"));
        assert!(result[2].ends_with(
            " and you will have arrived at your destination at 2 Queen St."
        ));
    }

    /// A route along a single street gets both the start and the end
    #[test]
    fn test_single_segment() {
        let mut rng = StdRng::seed_from_u64(0);
        let segments = vec![get_test_segments().remove(0)];

        let result = narrate(&mut rng, &segments, "1 King St", "9 King St");

        assert_eq!(result.len(), 1);
        assert!(
            result[0].starts_with("Starting at your location 1 King St, ")
        );
        assert!(result[0].contains("East-bound"));
        assert!(result[0].ends_with("at your destination at 9 King St."));
    }

    /// Narration never fails, even with nothing to narrate
    #[test]
    fn test_no_segments() {
        let mut rng = StdRng::seed_from_u64(0);

        let result = narrate(&mut rng, &[], "1 King St", "3 King St");

        let target = vec![
            "Starting at your location 1 King St, you will have arrived at \
             your destination at 3 King St."
                .to_string(),
        ];
        assert_eq!(result, target);
    }

    /// The same seed gives the same itinerary, word for word
    #[test]
    fn test_seeded_repeatable() {
        let segments = get_test_segments();

        let first =
            narrate(&mut StdRng::seed_from_u64(5), &segments, "A", "B");
        let second =
            narrate(&mut StdRng::seed_from_u64(5), &segments, "A", "B");

        assert_eq!(first, second);
    }
}
