//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code puzzles. Each puzzle is a
//! solver with its own input parsing and one or more parts that share the
//! parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] solves part `N` with mutable access to that data
//! - [`Solver`] ties the parts together (usually via `#[derive(AocSolver)]`)
//! - [`SolverRegistry`] maps year/day to factories, filled from plugins
//!   submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder, register_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u32>().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!                     .sum::<Result<u32, ParseError>>()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(shared.iter().take(3).sum::<u32>().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, Calories, 2022, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n\n4\n\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "4");
//! assert_eq!(solver.solve(2).unwrap().answer, "10");
//! ```
//!
//! # Parts sharing work
//!
//! `SharedData` is passed mutably to every part, in order. A part can cache
//! an intermediate result (for instance in an `Option` field) that the next
//! part picks up instead of recomputing it.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
