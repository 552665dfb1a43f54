//! Error types for benchmark runs

use std::io;

use plannerbench_config::ConfigError;
use plannerbench_core::PlannerError;
use thiserror::Error;

/// Main error type for benchmark operations
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// No space information was attached to the benchmark.
    #[error("No space information defined")]
    SpaceInformationMissing,

    /// The shared problem has no goal.
    #[error("No goal defined")]
    GoalUndefined,

    /// The per-trial time budget cannot be expressed as a duration.
    #[error("Invalid time limit: {0} seconds")]
    InvalidTimeLimit(f64),

    /// A planner's solve step failed; the whole run is abandoned.
    #[error("Planner '{planner}' failed: {source}")]
    Planner {
        planner: String,
        source: PlannerError,
    },

    /// The benchmark configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchmarkError>;
