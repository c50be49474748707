//! Day 4: Scratchcards

use std::collections::HashSet;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "dp"])]
pub struct Solver;

/// Number of winning numbers on each card, in card order
pub type Matches = Vec<usize>;

fn parse_numbers(list: &str) -> anyhow::Result<HashSet<u32>> {
    list.split_whitespace()
        .map(|n| n.parse::<u32>().with_context(|| format!("invalid number {n:?}")))
        .collect()
}

fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after card id"))?;
    let (winning, scratched) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' between number lists"))?;
    let winning = parse_numbers(winning)?;
    Ok(parse_numbers(scratched)?.intersection(&winning).count())
}

/// Cards held in the end that trace back to card `i`: the card itself plus
/// everything its copies win.
struct CardsWon<'m> {
    matches: &'m [usize],
}

impl DpProblem<usize, u64> for CardsWon<'_> {
    fn deps(&self, i: &usize) -> Vec<usize> {
        let last = (*i + self.matches[*i]).min(self.matches.len() - 1);
        (*i + 1..=last).collect()
    }

    fn compute(&self, _i: &usize, deps: Vec<u64>) -> u64 {
        1 + deps.iter().sum::<u64>()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Matches;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_card(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u64 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::new(
            VecBackend::with_capacity(shared.len()),
            CardsWon { matches: shared },
        );
        // Walk backwards so each lookup only recurses one level.
        let total: u64 = (0..shared.len()).rev().map(|i| cache.get(&i)).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_matches_per_card() {
        assert_eq!(Solver::parse(EXAMPLE).unwrap(), vec![4, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");
    }

    #[test]
    fn test_wins_past_the_last_card_are_dropped() {
        let mut shared = vec![3, 0];
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn test_missing_separator() {
        let err = Solver::parse("Card 1: 1 2 3 4").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("'|'")));
    }
}
