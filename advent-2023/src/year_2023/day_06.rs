//! Day 6: Wait For It

use std::sync::LazyLock;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn beaten_by(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Number of whole-millisecond hold times that beat the record.
    ///
    /// Distance `h * (t - h)` is symmetric around `t / 2`, so only the
    /// smallest winning hold is searched for, starting from the float root of
    /// `h^2 - t*h + d = 0`.
    pub fn ways_to_win(&self) -> u64 {
        let half = self.time / 2;
        if !self.beaten_by(half) {
            return 0;
        }
        let disc = (self.time as f64).powi(2) - 4.0 * self.record as f64;
        let root = (self.time as f64 - disc.max(0.0).sqrt()) / 2.0;
        let mut lo = (root.floor().max(0.0) as u64).min(half);
        while !self.beaten_by(lo) {
            lo += 1;
        }
        while lo > 0 && self.beaten_by(lo - 1) {
            lo -= 1;
        }
        self.time - 2 * lo + 1
    }
}

/// The races as listed, plus the single race read with the spaces removed.
#[derive(Debug, Clone)]
pub struct Races {
    races: Vec<Race>,
    joined: Race,
}

fn field<'a>(line: Option<&'a str>, name: &str) -> anyhow::Result<&'a str> {
    line.and_then(|l| l.trim().strip_prefix(name))
        .and_then(|l| l.strip_prefix(':'))
        .ok_or_else(|| anyhow!("expected a `{name}:` line"))
}

fn numbers(values: &str) -> anyhow::Result<Vec<u64>> {
    NUMBER
        .find_iter(values)
        .map(|m| {
            m.as_str()
                .parse::<u64>()
                .with_context(|| format!("{:?} out of range", m.as_str()))
        })
        .collect()
}

fn joined(values: &str) -> anyhow::Result<u64> {
    let digits: String = NUMBER.find_iter(values).map(|m| m.as_str()).collect();
    digits
        .parse()
        .with_context(|| format!("joined value {digits:?} out of range"))
}

fn parse_races(input: &str) -> anyhow::Result<Races> {
    let mut lines = input.trim().lines();
    let times = field(lines.next(), "Time")?;
    let records = field(lines.next(), "Distance")?;

    let (t, d) = (numbers(times)?, numbers(records)?);
    if t.len() != d.len() {
        bail!("{} times but {} distances", t.len(), d.len());
    }
    if t.is_empty() {
        bail!("no races listed");
    }
    let races = t
        .into_iter()
        .zip(d)
        .map(|(time, record)| Race { time, record })
        .collect();

    Ok(Races {
        races,
        joined: Race {
            time: joined(times)?,
            record: joined(records)?,
        },
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Races;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_races(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared.races.iter().map(Race::ways_to_win).product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.joined.ways_to_win().to_string())
    }
}
