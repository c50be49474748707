//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// Every tag must be present on a solver for it to run
    pub tags: Vec<String>,
    pub input_dir: PathBuf,
    /// Replaces the `input_dir` lookup for the selected day
    pub input_override: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "--threads must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => num_cpus(),
        };
        if args.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CliError::Config("empty tag in --tags".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags.into_iter().map(|t| t.trim().to_string()).collect(),
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let argv = std::iter::once("aoc").chain(argv.iter().copied());
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/a/~/b")), PathBuf::from("/a/~/b"));
    }

    #[test]
    fn test_thread_count() {
        assert_eq!(config(&["--threads", "3"]).unwrap().thread_count, 3);
        assert!(config(&[]).unwrap().thread_count >= 1);
        assert!(matches!(config(&["--threads", "0"]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_input_override_expanded() {
        let cfg = config(&["-d", "1", "-i", "~/day01.txt"]).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(cfg.input_override, Some(home.join("day01.txt")));
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert!(matches!(config(&["-t", "2023,"]), Err(CliError::Config(_))));
        assert_eq!(config(&["-t", "2023, grid"]).unwrap().tags, vec!["2023", "grid"]);
    }
}
