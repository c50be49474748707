//! Parsed solver instances and the type-erased interface over them

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part plus when solving started and ended
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A year-day puzzle whose input has already been parsed.
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on
/// the same shared data, so a part may leave results behind for the next.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long parsing took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Solution {}: {} ({:?})", part, result.answer, result.duration());
///     }
///     println!("parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
