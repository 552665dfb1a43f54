//! PlannerBench - benchmark interchangeable planners in Rust
//!
//! Register planners, point them at one shared problem, and get a
//! per-planner report of solve rate, time and memory.
//!
//! # Example
//!
//! ```rust
//! use plannerbench::prelude::*;
//! use plannerbench_test::{GoalProblem, Outcome, PoolSpace, ScriptedPlanner};
//!
//! let mut benchmark = Benchmark::new(shared_problem(GoalProblem::new()))
//!     .with_space_information(shared_space(PoolSpace::new()))
//!     .with_planner(ScriptedPlanner::new("RRT").with_script(vec![Outcome::solved(0.0, 1.0)]));
//!
//! benchmark.run(1.0, 512.0, 5).unwrap();
//!
//! let mut report = Vec::new();
//! benchmark.save_results_to_stream(&mut report).unwrap();
//! assert!(String::from_utf8(report).unwrap().contains("solved = 1\n"));
//! ```

// Collaborator traits
pub use plannerbench_core::{
    shared_problem, shared_space, Clock, MemoryProbe, MonotonicClock, Planner, PlannerData,
    PlannerError, ProblemDefinition, ProcessMemory, SharedProblem, SharedSpace, SolutionPath,
    SpaceInformation, StateAllocator,
};

// Configuration
pub use plannerbench_config::{BenchmarkConfig, ConfigError};

// Orchestration and reporting
pub use plannerbench_benchmark::{
    metrics, Benchmark, BenchmarkError, Experiment, ExperimentSet, PropertyExtractor,
    ResultsReport, RunExecutor, RunMetrics, AVERAGED_METRICS,
};

/// Colorful console logging for benchmark progress.
#[cfg(feature = "console")]
pub use plannerbench_console::init as init_console;

pub mod prelude {
    pub use super::{shared_problem, shared_space, Planner, PlannerData, PlannerError};
    pub use super::{ProblemDefinition, SolutionPath, SpaceInformation, StateAllocator};
    pub use super::{Benchmark, BenchmarkConfig, ExperimentSet, ResultsReport, RunMetrics};
}
