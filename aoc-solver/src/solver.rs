//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n4").unwrap(), vec![3, 4]);
/// ```
pub trait AocParser {
    /// The parsed input plus any intermediate results parts want to share.
    ///
    /// Owned types (`Vec<T>`, custom structs) are simplest. Borrowing from the
    /// input with `'a` avoids copying labels and tokens.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// The const generic lets `#[derive(AocSolver)]` dispatch a runtime part
/// number to the matching impl.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut shared = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using (and optionally caching into) the shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year-day puzzle.
///
/// Usually derived with `#[derive(AocSolver)]`, which dispatches each part
/// number to the matching [`PartSolver`] impl. Implementing it by hand works
/// too:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Fuel;
///
/// impl AocParser for Fuel {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Fuel {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().map(|m| m / 3 - 2).sum::<u64>().to_string()),
///             2 => Err(SolveError::PartNotImplemented(2)),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Fuel::parse("12\n14").unwrap();
/// assert_eq!(Fuel::solve_part(&mut shared, 1).unwrap(), "4");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - The input has no answer for this part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS` first.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
