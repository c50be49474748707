//! Day 9: Mirage Maintenance

use std::sync::LazyLock;

use anyhow::{bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["2023", "math"])]
pub struct Solver;

static VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());

/// Next value of `history`, from its table of finite differences.
///
/// The sequence is reduced until a row of all zeros appears; the next value
/// is then the sum of the last element of every row.
pub fn extrapolate(history: &[i64]) -> i64 {
    let mut row = history.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        next += row[row.len() - 1];
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

/// Value before the first one, i.e. [`extrapolate`] on the reversed sequence.
pub fn extrapolate_back(history: &[i64]) -> i64 {
    let reversed: Vec<i64> = history.iter().rev().copied().collect();
    extrapolate(&reversed)
}

fn parse_history(line: &str) -> anyhow::Result<Vec<i64>> {
    let values = VALUE
        .find_iter(line)
        .map(|m| {
            m.as_str()
                .parse::<i64>()
                .with_context(|| format!("{:?} out of range", m.as_str()))
        })
        .collect::<anyhow::Result<Vec<i64>>>()?;
    if values.is_empty() {
        bail!("no values");
    }
    Ok(values)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_history(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|h| extrapolate_back(h))
            .sum::<i64>()
            .to_string())
    }
}
