//! Day 1: Trebuchet?!

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<_> = input.trim().lines().map(str::trim).collect();
        if lines.iter().all(|l| l.is_empty()) {
            return Err(ParseError::MissingData("no calibration lines".to_string()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .try_fold(0u32, |acc, (idx, line)| -> anyhow::Result<u32> {
            let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, spelled));
            let first = digits
                .next()
                .ok_or_else(|| anyhow!("(line {}) no digit in {:?}", idx + 1, line))?;
            let last = digits.last().unwrap_or(first);
            Ok(acc + first * 10 + last)
        })
        .map(|sum| sum.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

/// The digit starting at byte `i`, if any. Spelled digits may overlap, so
/// `eightwo` yields 8 at index 0 and 2 at index 4.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    if rest[0].is_ascii_digit() {
        return Some((rest[0] - b'0') as u32);
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| rest.starts_with(word.as_bytes()))
        .map(|pos| pos as u32 + 1)
}
