//! Day 8: Haunted Wasteland

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["2023", "math"])]
pub struct Solver;

static NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*\((\w+),\s*(\w+)\)$").unwrap());

/// Left/right instructions plus the node graph, with names kept for the
/// `A`/`Z` suffix checks.
#[derive(Debug, Clone)]
pub struct Network<'a> {
    turns: Vec<bool>,
    names: Vec<&'a str>,
    /// `(left, right)` indices into `names`
    links: Vec<(usize, usize)>,
}

impl Network<'_> {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    /// Steps from `start` until a node satisfying `done` is reached.
    ///
    /// Each (node, instruction offset) state can occur once before the walk
    /// repeats itself, which bounds the search.
    fn steps_until(&self, start: usize, done: impl Fn(&str) -> bool) -> anyhow::Result<u64> {
        let limit = self.turns.len() * self.names.len();
        let mut node = start;
        for (step, &right) in self.turns.iter().cycle().enumerate() {
            if done(self.names[node]) {
                return Ok(step as u64);
            }
            if step > limit {
                break;
            }
            let (l, r) = self.links[node];
            node = if right { r } else { l };
        }
        bail!("no target reachable from {}", self.names[start])
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut lines = input.trim().lines().enumerate();
    let (_, first) = lines.next().ok_or_else(|| anyhow!("empty input"))?;
    let turns = first
        .trim()
        .chars()
        .map(|c| match c {
            'L' => Ok(false),
            'R' => Ok(true),
            other => Err(anyhow!("(line 1) unknown instruction {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if turns.is_empty() {
        bail!("(line 1) no instructions");
    }

    let mut entries = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let caps = NODE
            .captures(line)
            .ok_or_else(|| anyhow!("(line {}) expected `AAA = (BBB, CCC)`", idx + 1))?;
        let [name, left, right] = [1, 2, 3].map(|i| caps.get(i).map_or("", |m| m.as_str()));
        entries.push((idx, name, left, right));
    }

    let names: Vec<&str> = entries.iter().map(|&(_, name, _, _)| name).collect();
    let lookup: HashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    if lookup.len() != names.len() {
        bail!("node defined twice");
    }
    let links = entries
        .iter()
        .map(|&(idx, _, left, right)| {
            let find = |n: &str| {
                lookup
                    .get(n)
                    .copied()
                    .ok_or_else(|| anyhow!("(line {}) undefined node {n}", idx + 1))
            };
            Ok((find(left)?, find(right)?))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(Network {
        turns,
        names,
        links,
    })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared
            .index_of("AAA")
            .ok_or_else(|| SolveError::SolveFailed("no node AAA".into()))?;
        shared
            .steps_until(start, |n| n == "ZZZ")
            .map(|steps| steps.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    /// Assumes every ghost loops with a period equal to its first arrival,
    /// which the puzzle inputs guarantee.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let starts: Vec<usize> = (0..shared.names.len())
            .filter(|&i| shared.names[i].ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(SolveError::SolveFailed("no node ends with A".into()));
        }
        starts
            .into_iter()
            .try_fold(1, |acc, start| -> anyhow::Result<u64> {
                let steps = shared.steps_until(start, |n| n.ends_with('Z'))?;
                tracing::trace!(ghost = shared.names[start], steps, "ghost arrives");
                Ok(lcm(acc, steps.max(1)))
            })
            .map(|steps| steps.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE_1: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const EXAMPLE_2: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const EXAMPLE_3: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn test_part_one_examples() {
        let mut shared = Solver::parse(EXAMPLE_1).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        let mut shared = Solver::parse(EXAMPLE_2).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
    }

    #[test]
    fn test_part_two_example() {
        let mut shared = Solver::parse(EXAMPLE_3).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_unreachable_target_fails() {
        let mut shared = Solver::parse("L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_undefined_node() {
        let err = Solver::parse("L\n\nAAA = (BBB, AAA)\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("BBB")));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 7), 7);
        assert_eq!(gcd(0, 5), 5);
    }
}
