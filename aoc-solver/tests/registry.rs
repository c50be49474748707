//! Registry behaviour: registration bounds, duplicates, lookup and timing

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegisterableSolver, RegistrationError,
    SolveError, SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Counts lines; part 2 reuses the count cached by part 1.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Lines;

#[derive(Debug)]
struct LineData<'a> {
    lines: Vec<&'a str>,
    count: Option<usize>,
}

impl AocParser for Lines {
    type SharedData<'a> = LineData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        Ok(LineData {
            lines: input.lines().collect(),
            count: None,
        })
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = *shared.count.get_or_insert(shared.lines.len());
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .count
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
        Ok((count * 2).to_string())
    }
}

fn registry_with(year: u16, day: u8) -> aoc_solver::SolverRegistry {
    Lines.register_with(SolverRegistryBuilder::new(), year, day)
        .unwrap()
        .build()
}

#[test]
fn test_create_and_solve_in_order() {
    let registry = registry_with(2023, 1);
    let mut solver = registry.create_solver(2023, 1, "a\nb\nc").unwrap();

    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let first = solver.solve(1).unwrap();
    assert_eq!(first.answer, "3");
    assert!(first.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "6");
}

#[test]
fn test_part_two_without_part_one_fails() {
    let registry = registry_with(2023, 1);
    let mut solver = registry.create_solver(2023, 1, "a").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_out_of_range_part_through_dyn_solver() {
    let registry = registry_with(2023, 1);
    let mut solver = registry.create_solver(2023, 1, "a").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_parse_error_propagates() {
    let registry = registry_with(2023, 1);
    let err = registry.create_solver(2023, 1, "").err().unwrap();
    assert!(matches!(
        err,
        SolverError::ParseError(ParseError::MissingData(_))
    ));
}

#[test]
fn test_lookup_errors() {
    let registry = registry_with(2023, 1);
    assert!(matches!(
        registry.create_solver(2023, 2, "a"),
        Err(SolverError::NotFound(2023, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, "a"),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let builder = Lines.register_with(SolverRegistryBuilder::new(), 2023, 5).unwrap();
    let err = Lines.register_with(builder, 2023, 5).err().unwrap();
    assert_eq!(err, RegistrationError::DuplicateSolver(2023, 5));
}

#[test]
fn test_iter_info_is_sorted() {
    let builder = SolverRegistryBuilder::new();
    let builder = Lines.register_with(builder, 2023, 16).unwrap();
    let builder = Lines.register_with(builder, 2022, 3).unwrap();
    let builder = Lines.register_with(builder, 2023, 2).unwrap();
    let registry = builder.build();

    let keys: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day))
        .collect();
    assert_eq!(keys, vec![(2022, 3), (2023, 2), (2023, 16)]);
    assert_eq!(registry.storage().len(), 3);
    assert_eq!(registry.storage().get_info(2023, 2).unwrap().parts, 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_registration_bounds(year in 2000u16..2050, day in 0u8..=30) {
        let result = Lines.register_with(SolverRegistryBuilder::new(), year, day);
        let valid = (2015..2035).contains(&year) && (1..=25).contains(&day);
        match result {
            Ok(builder) => {
                prop_assert!(valid);
                prop_assert!(builder.build().storage().contains(year, day));
            }
            Err(e) => {
                prop_assert!(!valid);
                prop_assert_eq!(e, RegistrationError::InvalidYearDay(year, day));
            }
        }
    }
}
