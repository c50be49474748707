//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Reading a puzzle input from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while running solvers. Per-part failures travel inside results;
/// the executor itself only fails on infrastructure problems.
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("no input for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    #[error("result channel closed")]
    ChannelSend,

    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("{} errors occurred", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side that
    /// already is one.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        fn flatten(err: ArcExecutorError, into: &mut Vec<ArcExecutorError>) {
            match err.inner() {
                ExecutorError::Multiple(errors) => into.extend(errors.iter().cloned()),
                _ => into.push(err),
            }
        }

        let mut errors = Vec::new();
        flatten(first, &mut errors);
        flatten(second, &mut errors);
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
