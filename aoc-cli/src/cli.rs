//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run everything in order on one thread
    Sequential,
    /// One task per year; days and parts run in order inside it
    Year,
    /// One task per year/day; parts run in order (default)
    #[default]
    Day,
    /// One task per part; each part parses its own copy of the input
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding inputs as <year>/dayNN.txt
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read the input for the selected day from this file instead
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - print only `Solution N: <answer>` lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_short_flags_and_tags() {
        let args =
            Args::try_parse_from(["aoc", "-y", "2023", "-d", "5", "-p", "2", "-t", "2023,grid", "-q"])
                .unwrap();
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.day, Some(5));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["2023", "grid"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_input_requires_day() {
        assert!(Args::try_parse_from(["aoc", "-i", "input.txt"]).is_err());
        let args = Args::try_parse_from(["aoc", "-d", "3", "-i", "input.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn test_ranges_enforced() {
        assert!(Args::try_parse_from(["aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-p", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--parallelize-by", "week"]).is_err());
    }
}
