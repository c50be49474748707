//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day is a unit `Solver` struct deriving `AocSolver` and
//! `AutoRegisterSolver`, tagged with `"2023"` plus a topic tag. Linking this
//! crate is enough for [`aoc_solver::SolverRegistryBuilder::register_all_plugins`]
//! to find them:
//!
//! ```
//! use advent_2023 as _;
//! use aoc_solver::SolverRegistryBuilder;
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver_plugins(|plugin| plugin.tags.contains(&"2023"))
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 15, "HASH").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "52");
//! ```

pub mod utils;
pub mod year_2023;
