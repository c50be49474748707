//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the puzzle's layout
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle needs is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or exceeds the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input is well-formed but has no answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A solver already occupies this year-day slot
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day for registration: {0}/{1}")]
    InvalidYearDay(u16, u8),
}
