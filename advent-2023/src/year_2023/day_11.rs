//! Day 11: Cosmic Expansion

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["2023", "grid"])]
pub struct Solver;

/// Galaxy positions plus, per row and column, how many empty rows or
/// columns precede it.
#[derive(Debug, Clone)]
pub struct Image {
    galaxies: Vec<(usize, usize)>,
    empty_cols_before: Vec<usize>,
    empty_rows_before: Vec<usize>,
}

/// Running count of `empty` lines strictly before each index.
fn empty_before(len: usize, occupied: impl Fn(usize) -> bool) -> Vec<usize> {
    (0..len)
        .scan(0, |seen, i| {
            let before = *seen;
            if !occupied(i) {
                *seen += 1;
            }
            Some(before)
        })
        .collect()
}

impl Image {
    /// Sum of Manhattan distances over all galaxy pairs, with each empty row
    /// and column counting `factor` times.
    pub fn total_distance(&self, factor: u64) -> u64 {
        let grow = factor.saturating_sub(1);
        let expanded: Vec<(u64, u64)> = self
            .galaxies
            .iter()
            .map(|&(x, y)| {
                (
                    x as u64 + self.empty_cols_before[x] as u64 * grow,
                    y as u64 + self.empty_rows_before[y] as u64 * grow,
                )
            })
            .collect();
        expanded
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((x, y)) = grid.positions().find(|&(x, y)| {
            !matches!(grid.get(x, y), Some(b'.' | b'#'))
        }) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) unexpected character at column {}",
                y + 1,
                x + 1
            )));
        }

        let galaxies: Vec<_> = grid
            .positions()
            .filter(|&(x, y)| grid.get(x, y) == Some(b'#'))
            .collect();
        let empty_cols_before = empty_before(grid.width(), |x| {
            (0..grid.height()).any(|y| grid.get(x, y) == Some(b'#'))
        });
        let empty_rows_before = empty_before(grid.height(), |y| grid.row(y).contains(&b'#'));

        Ok(Image {
            galaxies,
            empty_cols_before,
            empty_rows_before,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(1_000_000).to_string())
    }
}
