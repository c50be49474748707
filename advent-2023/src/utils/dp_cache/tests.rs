//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&5), 5);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::new(
        VecBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(cache.get(&3), 10);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_vec_backend_grows_and_overwrites() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(2);
    assert_eq!(backend.get(&5), None);

    backend.insert(5, 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&4), None);

    backend.insert(5, 7);
    assert_eq!(backend.get(&5), Some(&7));
}

#[test]
fn test_vec2d_backend_bounds() {
    let mut backend: Vec2DBackend<u8> = Vec2DBackend::new(2, 3);
    backend.insert((1, 2), 9);
    assert_eq!(backend.get(&(1, 2)), Some(&9));
    assert_eq!(backend.get(&(0, 2)), None);
    assert_eq!(backend.get(&(2, 0)), None);
    assert_eq!(backend.get(&(0, 3)), None);
}

#[test]
#[should_panic(expected = "outside 2x3 backend")]
fn test_vec2d_backend_insert_out_of_bounds_panics() {
    let mut backend: Vec2DBackend<u8> = Vec2DBackend::new(2, 3);
    backend.insert((2, 0), 1);
}

/// Binomial coefficients through Pascal's rule on a 2D backend.
struct Binomial;

impl DpProblem<(usize, usize), u64> for Binomial {
    fn deps(&self, &(n, k): &(usize, usize)) -> Vec<(usize, usize)> {
        if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
    }

    fn compute(&self, _index: &(usize, usize), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps[0] + deps[1] }
    }
}

proptest! {
    #[test]
    fn prop_binomial_matches_closed_form(n in 0usize..30, k in 0usize..30) {
        prop_assume!(k <= n);
        let cache = DpCache::new(Vec2DBackend::new(30, 30), Binomial);

        let expected = (0..k as u64).fold(1u64, |acc, i| acc * (n as u64 - i) / (i + 1));
        prop_assert_eq!(cache.get(&(n, k)), expected);
    }
}
