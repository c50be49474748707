//! Day 15: Lens Library

use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["2023", "hashing"])]
pub struct Solver;

static STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=\-]+)(?:(-)|=([1-9]))$").unwrap());

/// The HASH algorithm: for every byte, add it, multiply by 17, keep the
/// remainder modulo 256.
pub fn hash(text: &str) -> u8 {
    text.bytes()
        .fold(0u8, |acc, b| acc.wrapping_add(b).wrapping_mul(17))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Remove,
    Insert(u8),
}

/// A step of the initialization sequence read as a lens operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    label: &'a str,
    op: Operation,
}

fn parse_step(text: &str) -> anyhow::Result<Step<'_>> {
    let caps = STEP
        .captures(text)
        .ok_or_else(|| anyhow!("expected `label-` or `label=N`, found {text:?}"))?;
    let label = caps.get(1).map_or("", |m| m.as_str());
    let op = match caps.get(3) {
        Some(focal) => Operation::Insert(focal.as_str().as_bytes()[0] - b'0'),
        None => Operation::Remove,
    };
    Ok(Step { label, op })
}

/// Total focusing power after running `steps` against the 256 boxes.
fn focusing_power(steps: &[Step<'_>]) -> usize {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
    for step in steps {
        let lenses = &mut boxes[hash(step.label) as usize];
        let slot = lenses.iter().position(|&(label, _)| label == step.label);
        match (step.op, slot) {
            (Operation::Remove, Some(i)) => {
                lenses.remove(i);
            }
            (Operation::Remove, None) => {}
            (Operation::Insert(focal), Some(i)) => lenses[i].1 = focal,
            (Operation::Insert(focal), None) => lenses.push((step.label, focal)),
        }
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
        })
        .sum()
}

impl AocParser for Solver {
    /// The raw comma-separated steps
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::MissingData("empty sequence".to_string()));
        }
        Ok(input.split(',').map(str::trim).collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared.iter().map(|&step| u32::from(hash(step))).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let steps = shared
            .iter()
            .enumerate()
            .map(|(idx, &text)| {
                parse_step(text).map_err(|e| {
                    SolveError::SolveFailed(format!("(step {}) {:#}", idx + 1, e).into())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(focusing_power(&steps).to_string())
    }
}
