//! Day 5: If You Give A Seed A Fertilizer

use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

/// `source..source + len` maps onto `dest..dest + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mapping {
    source: u64,
    dest: u64,
    len: u64,
}

impl Mapping {
    fn source_end(&self) -> u64 {
        self.source + self.len
    }

    fn translate(&self, value: u64) -> u64 {
        value - self.source + self.dest
    }
}

/// One `x-to-y map:` block, with mappings sorted by source start.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    mappings: Vec<Mapping>,
}

impl Stage {
    fn apply(&self, value: u64) -> u64 {
        self.mappings
            .iter()
            .find(|m| (m.source..m.source_end()).contains(&value))
            .map_or(value, |m| m.translate(value))
    }

    /// Split `range` along the mapping boundaries and translate each piece.
    /// Pieces no mapping covers pass through unchanged.
    fn apply_range(&self, range: Range<u64>, out: &mut Vec<Range<u64>>) {
        let Range { mut start, end } = range;
        for m in &self.mappings {
            if start >= end || m.source >= end {
                break;
            }
            if m.source_end() <= start {
                continue;
            }
            if m.source > start {
                out.push(start..m.source);
                start = m.source;
            }
            let stop = end.min(m.source_end());
            out.push(m.translate(start)..m.translate(stop - 1) + 1);
            start = stop;
        }
        if start < end {
            out.push(start..end);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Almanac {
    seeds: Vec<u64>,
    stages: Vec<Stage>,
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u64>> {
    text.split_whitespace()
        .map(|n| n.parse::<u64>().with_context(|| format!("invalid number {n:?}")))
        .collect()
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut lines = input.trim().lines().enumerate();
    let (_, first) = lines.next().ok_or_else(|| anyhow!("empty almanac"))?;
    let seeds = first
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("(line 1) expected `seeds:`"))
        .and_then(|rest| parse_numbers(rest).context("(line 1)"))?;

    let mut stages: Vec<Stage> = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.ends_with("map:") {
            stages.push(Stage::default());
            continue;
        }
        let stage = stages
            .last_mut()
            .ok_or_else(|| anyhow!("(line {}) mapping before any map header", idx + 1))?;
        match parse_numbers(line).with_context(|| format!("(line {})", idx + 1))?[..] {
            [dest, source, len] => stage.mappings.push(Mapping { source, dest, len }),
            _ => bail!("(line {}) expected `dest source length`", idx + 1),
        }
    }

    for stage in &mut stages {
        stage.mappings.sort_unstable_by_key(|m| m.source);
    }
    Ok(Almanac { seeds, stages })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let almanac =
            parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if almanac.seeds.is_empty() {
            return Err(ParseError::MissingData("no seeds listed".to_string()));
        }
        Ok(almanac)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lowest = shared
            .seeds
            .iter()
            .map(|&seed| shared.stages.iter().fold(seed, |v, stage| stage.apply(v)))
            .min()
            .ok_or_else(|| SolveError::SolveFailed("no seeds".into()))?;
        Ok(lowest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                "seed ranges need an even number of values".into(),
            ));
        }
        let seed_ranges: Vec<Range<u64>> = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0] + pair[1])
            .filter(|r| !r.is_empty())
            .collect();

        let locations = shared.stages.iter().fold(seed_ranges, |ranges, stage| {
            let mut out = Vec::with_capacity(ranges.len());
            for range in ranges {
                stage.apply_range(range, &mut out);
            }
            out
        });

        let lowest = locations
            .iter()
            .map(|r| r.start)
            .min()
            .ok_or_else(|| SolveError::SolveFailed("all seed ranges are empty".into()))?;
        Ok(lowest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.stages.len(), 7);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn test_apply_range_splits_on_boundaries() {
        let stage = Stage {
            mappings: vec![
                Mapping { source: 10, dest: 100, len: 5 },
                Mapping { source: 20, dest: 0, len: 5 },
            ],
        };
        let mut out = Vec::new();
        stage.apply_range(5..23, &mut out);
        assert_eq!(out, vec![5..10, 100..105, 15..20, 0..3]);
    }

    #[test]
    fn test_range_agrees_with_pointwise_mapping() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        for stage in &almanac.stages {
            let mut out = Vec::new();
            stage.apply_range(0..120, &mut out);
            let mut mapped: Vec<u64> = out.into_iter().flatten().collect();
            let mut expected: Vec<u64> = (0..120).map(|v| stage.apply(v)).collect();
            mapped.sort_unstable();
            expected.sort_unstable();
            assert_eq!(mapped, expected);
        }
    }

    #[test]
    fn test_odd_seed_count_fails_part_two() {
        let mut shared = Solver::parse("seeds: 1 2 3\n\na-to-b map:\n5 1 1\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_mapping_before_header() {
        let err = Solver::parse("seeds: 1\n\n5 1 1\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 3")));
    }
}
