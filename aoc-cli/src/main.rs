//! AOC CLI - runs the registered Advent of Code solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;
mod output;

// Links the solver plugins
use advent_2023 as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested part was solved
fn run(args: Args) -> Result<bool, CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        eprintln!("No solvers found matching the specified filters.");
        return Ok(true);
    }
    let expected_keys = ResultKey::expected(&work_items);

    let (tx, rx) = std::sync::mpsc::channel();
    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    let execution = std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(tx));

        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }

        handle.join()
    });

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    execution
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);
    Ok(aggregator.is_complete() && results.iter().all(|r| r.answer.is_ok()))
}

/// Registry holding the plugins that carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new().register_solver_plugins(|plugin| {
        tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;
    Ok(builder.build())
}
