//! Property-based tests for part bounds validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Echoes the part number, for any `PARTS`
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => Echo::<1>::solve_part_checked_range(&mut (), part),
        2 => Echo::<2>::solve_part_checked_range(&mut (), part),
        _ => Echo::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected with the offending number.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In-range parts give the same answer as calling `solve_part` directly.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked_result = Echo::<2>::solve_part_checked_range(&mut (), part).unwrap();
        let direct_result = Echo::<2>::solve_part(&mut (), part).unwrap();
        prop_assert_eq!(checked_result, direct_result);
    }
}

#[test]
fn test_part_zero_rejected() {
    let result = Echo::<2>::solve_part_checked_range(&mut (), 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_exceeds_max_rejected() {
    let result = Echo::<2>::solve_part_checked_range(&mut (), 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
