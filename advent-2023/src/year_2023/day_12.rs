//! Day 12: Hot Springs

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, Vec2DBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["2023", "dp"])]
pub struct Solver;

/// One row of the condition records: springs as `.`, `#` or `?`, and the
/// sizes of the damaged groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    /// Five copies of the springs joined by `?`, and five copies of the
    /// groups.
    fn unfold(&self) -> Record {
        let mut springs = Vec::with_capacity(self.springs.len() * 5 + 4);
        for copy in 0..5 {
            if copy > 0 {
                springs.push(b'?');
            }
            springs.extend_from_slice(&self.springs);
        }
        Record {
            springs,
            groups: self.groups.repeat(5),
        }
    }

    fn arrangements(&self) -> u64 {
        let cache = DpCache::new(
            Vec2DBackend::new(self.springs.len() + 1, self.groups.len() + 1),
            Arrangements { record: self },
        );
        cache.get(&(0, 0))
    }
}

/// Ways to place `groups[g..]` into `springs[pos..]`, indexed by `(pos, g)`.
struct Arrangements<'r> {
    record: &'r Record,
}

impl Arrangements<'_> {
    /// Whether group `g` can start at `pos`: it fits, covers no working
    /// spring and is not directly followed by a damaged one.
    fn group_fits(&self, pos: usize, g: usize) -> bool {
        let springs = &self.record.springs;
        let Some(&size) = self.record.groups.get(g) else {
            return false;
        };
        let end = pos + size;
        end <= springs.len()
            && !springs[pos..end].contains(&b'.')
            && springs.get(end) != Some(&b'#')
    }
}

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(pos, g): &(usize, usize)) -> Vec<(usize, usize)> {
        let springs = &self.record.springs;
        if pos >= springs.len() {
            return vec![];
        }
        let mut deps = Vec::with_capacity(2);
        if springs[pos] != b'#' {
            deps.push((pos + 1, g));
        }
        if springs[pos] != b'.' && self.group_fits(pos, g) {
            let after = pos + self.record.groups[g] + 1;
            deps.push((after.min(springs.len()), g + 1));
        }
        deps
    }

    fn compute(&self, &(pos, g): &(usize, usize), deps: Vec<u64>) -> u64 {
        if pos >= self.record.springs.len() {
            u64::from(g == self.record.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

fn parse_record(line: &str) -> anyhow::Result<Record> {
    let (springs, groups) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<springs> <groups>`"))?;
    if let Some(c) = springs.chars().find(|c| !matches!(c, '.' | '#' | '?')) {
        bail!("unknown spring condition {c:?}");
    }
    let groups = groups
        .split(',')
        .map(|g| -> anyhow::Result<usize> {
            let size: usize = g.parse().with_context(|| format!("invalid group {g:?}"))?;
            if size == 0 {
                bail!("empty group");
            }
            Ok(size)
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Record {
        springs: springs.as_bytes().to_vec(),
        groups,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_record(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(Record::arrangements)
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let ways = record.unfold().arrangements();
                tracing::trace!(record = idx + 1, ways, "unfolded record");
                ways
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    fn ways(line: &str) -> (u64, u64) {
        let record = parse_record(line).unwrap();
        (record.arrangements(), record.unfold().arrangements())
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "525152");
    }

    #[test]
    fn test_per_record_counts() {
        assert_eq!(ways("???.### 1,1,3"), (1, 1));
        assert_eq!(ways(".??..??...?##. 1,1,3"), (4, 16384));
        assert_eq!(ways("?###???????? 3,2,1"), (10, 506250));
    }

    #[test]
    fn test_unfold() {
        let record = parse_record(".# 1").unwrap().unfold();
        assert_eq!(record.springs, b".#?.#?.#?.#?.#".to_vec());
        assert_eq!(record.groups, vec![1; 5]);
    }

    #[test]
    fn test_impossible_record() {
        assert_eq!(ways("#.# 3").0, 0);
        assert_eq!(ways("... 1").0, 0);
    }

    #[test]
    fn test_invalid_condition() {
        let err = Solver::parse("??x 1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("'x'")));
    }
}
