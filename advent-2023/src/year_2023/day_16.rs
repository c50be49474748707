//! Day 16: The Floor Will Be Lava

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["2023", "grid"])]
pub struct Solver;

/// Headings a beam leaves `tile` with after entering it heading `dir`.
fn deflect(tile: u8, dir: Direction) -> (Direction, Option<Direction>) {
    use Direction::*;
    match (tile, dir) {
        (b'/', North) => (East, None),
        (b'/', East) => (North, None),
        (b'/', South) => (West, None),
        (b'/', West) => (South, None),
        (b'\\', North) => (West, None),
        (b'\\', West) => (North, None),
        (b'\\', South) => (East, None),
        (b'\\', East) => (South, None),
        (b'|', East | West) => (North, Some(South)),
        (b'-', North | South) => (East, Some(West)),
        _ => (dir, None),
    }
}

/// Number of tiles a beam entering at `start` heading `dir` energizes.
///
/// Each tile remembers the headings beams have left it with, so a beam that
/// repeats a state is dropped and loops terminate.
pub fn energized(grid: &Grid, start: (usize, usize), dir: Direction) -> usize {
    let width = grid.width();
    let mut seen = vec![0u8; width * grid.height()];
    let mut beams = vec![(start, dir)];

    while let Some(((x, y), heading)) = beams.pop() {
        let Some(tile) = grid.get(x, y) else {
            continue;
        };
        let (first, second) = deflect(tile, heading);
        for out in std::iter::once(first).chain(second) {
            let state = &mut seen[y * width + x];
            if *state & out.bit() != 0 {
                continue;
            }
            *state |= out.bit();
            if let Some(next) = grid.step(x, y, out) {
                beams.push((next, out));
            }
        }
    }

    seen.iter().filter(|&&s| s != 0).count()
}

/// Every edge tile paired with the heading pointing into the grid.
fn entry_points(grid: &Grid) -> impl Iterator<Item = ((usize, usize), Direction)> + '_ {
    let (w, h) = (grid.width(), grid.height());
    let rows = (0..h).flat_map(move |y| {
        [((0, y), Direction::East), ((w - 1, y), Direction::West)]
    });
    let cols = (0..w).flat_map(move |x| {
        [((x, 0), Direction::South), ((x, h - 1), Direction::North)]
    });
    rows.chain(cols)
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((x, y)) = grid.positions().find(|&(x, y)| {
            !matches!(grid.get(x, y), Some(b'.' | b'/' | b'\\' | b'|' | b'-'))
        }) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) unexpected character at column {}",
                y + 1,
                x + 1
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, (0, 0), Direction::East).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let best = entry_points(grid)
            .map(|(start, dir)| energized(grid, start, dir))
            .max()
            .unwrap_or_default();
        Ok(best.to_string())
    }
}
