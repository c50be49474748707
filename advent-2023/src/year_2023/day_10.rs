//! Day 10: Pipe Maze

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["2023", "grid"])]
pub struct Solver;

/// Directions a pipe tile opens towards.
fn openings(tile: u8) -> &'static [Direction] {
    use Direction::*;
    match tile {
        b'|' => &[North, South],
        b'-' => &[East, West],
        b'L' => &[North, East],
        b'J' => &[North, West],
        b'7' => &[South, West],
        b'F' => &[East, South],
        _ => &[],
    }
}

fn pipe_for(a: Direction, b: Direction) -> Option<u8> {
    [b'|', b'-', b'L', b'J', b'7', b'F']
        .into_iter()
        .find(|&tile| {
            let open = openings(tile);
            open.contains(&a) && open.contains(&b)
        })
}

/// The loop through `S`, found once and reused by both parts.
#[derive(Debug, Clone)]
pub struct MainLoop {
    on_loop: Vec<bool>,
    len: usize,
    /// The pipe hidden under `S`
    start_pipe: u8,
}

#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: (usize, usize),
    main_loop: Option<MainLoop>,
}

impl Maze {
    fn tile(&self, (x, y): (usize, usize)) -> u8 {
        self.grid.get(x, y).unwrap_or(b'.')
    }

    /// The position one step towards `dir`, if that tile opens back towards
    /// `from`. `S` accepts any neighbour so the loop can close on it.
    fn connects(&self, from: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let next = self.grid.step(from.0, from.1, dir)?;
        if next == self.start {
            return Some(next);
        }
        openings(self.tile(next))
            .contains(&dir.opposite())
            .then_some(next)
    }

    fn trace_loop(&self) -> Result<MainLoop, SolveError> {
        let exits: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| self.connects(self.start, d).is_some())
            .collect();
        let [first, second] = exits[..] else {
            return Err(SolveError::SolveFailed(
                format!("S connects to {} pipes, expected 2", exits.len()).into(),
            ));
        };
        let start_pipe = pipe_for(first, second)
            .ok_or_else(|| SolveError::SolveFailed("no pipe fits under S".into()))?;

        let mut on_loop = vec![false; self.grid.width() * self.grid.height()];
        let mut pos = self.start;
        let mut heading = first;
        let mut len = 0;
        loop {
            on_loop[pos.1 * self.grid.width() + pos.0] = true;
            len += 1;
            pos = self.connects(pos, heading).ok_or_else(|| {
                SolveError::SolveFailed(format!("loop breaks at {pos:?}").into())
            })?;
            if pos == self.start {
                break;
            }
            heading = openings(self.tile(pos))
                .iter()
                .copied()
                .find(|&d| d != heading.opposite())
                .ok_or_else(|| SolveError::SolveFailed("dead end in loop".into()))?;
        }

        Ok(MainLoop {
            on_loop,
            len,
            start_pipe,
        })
    }

    fn main_loop(&mut self) -> Result<&MainLoop, SolveError> {
        if self.main_loop.is_none() {
            self.main_loop = Some(self.trace_loop()?);
        }
        self.main_loop
            .as_ref()
            .ok_or_else(|| SolveError::SolveFailed("loop not traced".into()))
    }

    /// Tiles enclosed by the loop. Scanning each row, the inside flips every
    /// time a loop pipe opening north is crossed.
    fn enclosed(&self, main_loop: &MainLoop) -> usize {
        let width = self.grid.width();
        (0..self.grid.height())
            .map(|y| {
                let mut inside = false;
                let mut count = 0;
                for x in 0..width {
                    if main_loop.on_loop[y * width + x] {
                        let tile = if (x, y) == self.start {
                            main_loop.start_pipe
                        } else {
                            self.tile((x, y))
                        };
                        if openings(tile).contains(&Direction::North) {
                            inside = !inside;
                        }
                    } else if inside {
                        count += 1;
                    }
                }
                count
            })
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no start tile S".to_string()))?;
        Ok(Maze {
            grid,
            start,
            main_loop: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.main_loop()?.len / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.main_loop()?;
        let maze = &*shared;
        let main_loop = maze
            .main_loop
            .as_ref()
            .ok_or_else(|| SolveError::SolveFailed("loop not traced".into()))?;
        Ok(maze.enclosed(main_loop).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SQUARE: &str = "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

    const COMPLEX: &str = "\
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

    const ENCLOSED_4: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const ENCLOSED_8: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    const ENCLOSED_10: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_farthest_point() {
        assert_eq!(solve(SQUARE, 1), "4");
        assert_eq!(solve(COMPLEX, 1), "8");
    }

    #[test]
    fn test_enclosed_tiles() {
        assert_eq!(solve(ENCLOSED_4, 2), "4");
        assert_eq!(solve(ENCLOSED_8, 2), "8");
        assert_eq!(solve(ENCLOSED_10, 2), "10");
    }

    #[test]
    fn test_start_pipe_inferred_from_neighbours() {
        let mut shared = Solver::parse(SQUARE).unwrap();
        assert_eq!(shared.main_loop().unwrap().start_pipe, b'F');
        let mut shared = Solver::parse(ENCLOSED_10).unwrap();
        assert_eq!(shared.main_loop().unwrap().start_pipe, b'7');
    }

    #[test]
    fn test_loop_reused_between_parts() {
        let mut shared = Solver::parse(COMPLEX).unwrap();
        Solver::solve_part(&mut shared, 1).unwrap();
        assert!(shared.main_loop.is_some());
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_small_square_closes_on_start() {
        let mut shared = Solver::parse("S-7\n|.|\nL-J\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4");
        assert_eq!(shared.main_loop().unwrap().start_pipe, b'F');
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_padded_square_closes_on_start() {
        let mut shared = Solver::parse(".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_dangling_start() {
        let mut shared = Solver::parse("S-.\n...\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_start() {
        assert!(matches!(Solver::parse("F7\nLJ\n"), Err(ParseError::MissingData(_))));
    }
}
