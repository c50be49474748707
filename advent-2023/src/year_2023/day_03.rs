//! Day 3: Gear Ratios

use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A run of digits on one row, spanning columns `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartNumber {
    value: u32,
    y: usize,
    start: usize,
    end: usize,
}

pub struct Schematic {
    grid: Grid,
    numbers: Vec<PartNumber>,
}

impl Schematic {
    /// Cells around a number (the 8-neighbourhood of its span), clipped to the grid.
    fn surroundings(&self, number: &PartNumber) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let xs = number.start.saturating_sub(1)..(number.end + 1).min(self.grid.width());
        let ys = number.y.saturating_sub(1)..(number.y + 2).min(self.grid.height());
        let (y, start, end) = (number.y, number.start, number.end);
        let grid = &self.grid;
        ys.flat_map(move |cy| xs.clone().map(move |cx| (cx, cy)))
            .filter(move |&(cx, cy)| !(cy == y && (start..end).contains(&cx)))
            .filter_map(move |(cx, cy)| grid.get(cx, cy).map(|c| (cx, cy, c)))
    }
}

fn is_symbol(cell: u8) -> bool {
    cell != b'.' && !cell.is_ascii_digit()
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let mut numbers = Vec::new();

        for y in 0..grid.height() {
            let row = grid.row(y);
            let mut x = 0;
            while x < row.len() {
                if !row[x].is_ascii_digit() {
                    x += 1;
                    continue;
                }
                let start = x;
                let mut value = 0u32;
                while x < row.len() && row[x].is_ascii_digit() {
                    value = value * 10 + (row[x] - b'0') as u32;
                    x += 1;
                }
                numbers.push(PartNumber {
                    value,
                    y,
                    start,
                    end: x,
                });
            }
        }

        Ok(Schematic { grid, numbers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .numbers
            .iter()
            .filter(|n| shared.surroundings(n).any(|(_, _, c)| is_symbol(c)))
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<(usize, usize), Vec<u32>> = HashMap::new();
        for number in &shared.numbers {
            for (x, y, _) in shared.surroundings(number).filter(|&(_, _, c)| c == b'*') {
                gears.entry((x, y)).or_default().push(number.value);
            }
        }

        let sum: u64 = gears
            .values()
            .filter(|parts| parts.len() == 2)
            .map(|parts| parts[0] as u64 * parts[1] as u64)
            .sum();
        Ok(sum.to_string())
    }
}
