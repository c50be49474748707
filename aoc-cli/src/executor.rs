//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Outcome of one part of one puzzle
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// `None` when parsing never succeeded
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// A registered puzzle and the parts of it to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    shared: ExecutorShared,
    thread_pool: rayon::ThreadPool,
}

/// Everything the worker threads read
struct ExecutorShared {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: ExecutorShared {
                registry,
                inputs: InputStore::new(
                    config.input_dir.clone(),
                    config.input_override.clone(),
                ),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Registered puzzles matching the filters, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .filter_map(|info| {
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts: filter_parts(cfg.part_filter, info.parts)?,
                })
            })
            .collect()
    }

    /// Run every work item, sending one result per part to `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        tracing::debug!(
            items = work_items.len(),
            mode = ?self.shared.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "executing"
        );

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work_item(work, &tx, &self.shared) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_grouped(by_year, &tx)
            }
            // Part differs only inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// One rayon task per group; items inside a group run in order
    fn execute_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map_with(tx.clone(), |tx, items| {
                    items.iter().fold(None, |err, work| {
                        match run_work_item(work, tx, shared) {
                            Ok(()) => err,
                            Err(e) => Some(ArcExecutorError::combine_opt(err, e)),
                        }
                    })
                })
                .reduce(
                    || None,
                    |a, b| match (a, b) {
                        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                        (a, b) => a.or(b),
                    },
                )
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run for a solver with `max_parts` parts, or None if the filter
/// rules them all out
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> Option<RangeInclusive<u8>> {
    match part_filter {
        Some(p) if (1..=max_parts).contains(&p) => Some(p..=p),
        Some(_) => None,
        None if max_parts > 0 => Some(1..=max_parts),
        None => None,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

fn fail_all_parts(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Load the input and solve the requested parts of one puzzle.
///
/// Missing input and parse failures become error results for every part;
/// only a closed channel is returned as an error.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let input = match shared.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            tracing::warn!(year, day, error = %source, "input unavailable");
            let error = ExecutorError::Input { year, day, source }.into();
            return fail_all_parts(work, error, tx);
        }
    };

    if shared.parallelize_by == ParallelizeBy::Part {
        run_parts_parallel(work, &input, tx, shared)
    } else {
        run_parts_sequential(work, &input, tx, shared)
    }
}

fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let mut solver = match shared.registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => return fail_all_parts(work, ExecutorError::from(e).into(), tx),
    };
    for part in work.parts.clone() {
        send(tx, solve_part(&mut *solver, part))?;
    }
    Ok(())
}

/// Every part gets its own parsed instance, since solver instances stay on
/// the thread that parsed them. Results are forwarded in part order.
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match shared.registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(&mut *solver, part),
            Err(e) => SolverResult::failed(year, day, part, ExecutorError::from(e).into()),
        })
        .collect();

    results.into_iter().try_for_each(|result| send(tx, result))
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = Some(solver.parse_duration());

    match solver.solve(part) {
        Ok(result) => {
            tracing::debug!(year, day, part, elapsed = ?result.duration(), "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: result.duration(),
                answer: Ok(result.answer),
                parse_duration,
            }
        }
        Err(e) => {
            tracing::debug!(year, day, part, error = %e, "solve failed");
            SolverResult {
                year,
                day,
                part,
                answer: Err(ExecutorError::from(aoc_solver::SolverError::from(e)).into()),
                parse_duration,
                solve_duration: TimeDelta::zero(),
            }
        }
    }
}
