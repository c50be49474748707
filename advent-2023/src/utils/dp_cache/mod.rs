//! Dynamic programming cache with lazy evaluation
//!
//! Memoization for recursive computations whose values depend on other
//! values in a directed acyclic graph.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`Vec2DBackend`]: fixed-size `(row, col)` grid
//!
//! # Example
//!
//! ```rust
//! use advent_2023::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(Vec2DBackend::new(5, 5), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4)
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, Vec2DBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
