//! Day 2: Cube Conundrum

use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

static CUBES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+) (red|green|blue)").unwrap());

/// Cube counts as `[red, green, blue]`
type Cubes = [u32; 3];

const BAG: Cubes = [12, 13, 14];

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<Cubes>,
}

impl Game {
    /// Per-colour maximum over all draws: the fewest cubes that make the game possible.
    fn minimum_bag(&self) -> Cubes {
        self.draws.iter().fold([0; 3], |mut max, draw| {
            for (m, d) in max.iter_mut().zip(draw) {
                *m = (*m).max(*d);
            }
            max
        })
    }
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, draws) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after game id"))?;
    let id = head
        .trim()
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>'"))?
        .parse()
        .context("invalid game id")?;

    let draws = draws
        .split(';')
        .map(|draw| -> anyhow::Result<Cubes> {
            let mut cubes = [0; 3];
            for caps in CUBES.captures_iter(draw) {
                let count: u32 = caps[1].parse()?;
                let slot = match &caps[2] {
                    "red" => 0,
                    "green" => 1,
                    _ => 2,
                };
                cubes[slot] += count;
            }
            Ok(cubes)
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_game(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|game| {
                game.draws
                    .iter()
                    .all(|draw| draw.iter().zip(BAG).all(|(&n, limit)| n <= limit))
            })
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .map(|game| game.minimum_bag().iter().product::<u32>())
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_minimum_bag() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared[0].minimum_bag(), [4, 2, 6]);
        assert_eq!(shared[2].minimum_bag(), [20, 13, 6]);
    }

    #[test]
    fn test_bad_header_reports_line() {
        let err = Solver::parse("Game 1: 1 red\nGam 2: 2 red").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
    }
}
