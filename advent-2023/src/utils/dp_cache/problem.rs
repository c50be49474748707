//! Trait-based DP problem definition.

/// Dependency structure and computation of a dynamic programming problem.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use advent_2023::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Fibonacci;
///
/// impl DpProblem<usize, u64> for Fibonacci {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
///     }
/// }
///
/// let cache = DpCache::new(VecBackend::new(), Fibonacci);
/// assert_eq!(cache.get(&10), 55);
/// ```
pub trait DpProblem<I, K> {
    /// Indices this index depends on. Base cases return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index`, given the values of `deps(index)` in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
