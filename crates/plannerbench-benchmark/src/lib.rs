//! Benchmarking framework for PlannerBench.
//!
//! Runs a set of interchangeable planners against one shared problem,
//! measures each trial, averages a fixed set of metrics per planner and
//! writes a line-oriented report.
//!
//! # Overview
//!
//! - [`RunExecutor`] drives a single trial: reset shared state, measure
//!   memory and time around `solve`, extract metrics into a [`RunMetrics`]
//! - [`Benchmark`] owns the planners, runs every trial of every planner in
//!   order and keeps the resulting [`ExperimentSet`]
//! - [`ResultsReport`] serializes an [`ExperimentSet`]
//!
//! Execution is strictly sequential. Time and memory readings would be
//! meaningless if trials overlapped.
//!
//! # Example
//!
//! ```
//! use plannerbench_benchmark::{Benchmark, ResultsReport};
//! use plannerbench_core::{shared_problem, shared_space};
//! use plannerbench_test::{GoalProblem, Outcome, PoolSpace, ScriptedPlanner};
//!
//! let mut benchmark = Benchmark::new(shared_problem(GoalProblem::new()))
//!     .with_space_information(shared_space(PoolSpace::new()))
//!     .with_planner(ScriptedPlanner::new("RRT").with_script(vec![Outcome::solved(0.0, 2.0)]));
//!
//! let experiments = benchmark.run(1.0, 256.0, 3).unwrap();
//! assert_eq!(experiments[0].runs().len(), 3);
//! assert_eq!(experiments[0].average("solved"), Some(1.0));
//!
//! let report = ResultsReport::to_string(benchmark.experiments());
//! assert!(report.starts_with("1 planners\nRRT\n"));
//! ```

mod error;
mod executor;
pub mod metrics;
mod report;
mod result;
mod runner;

pub use error::{BenchmarkError, Result};
pub use executor::{PropertyExtractor, RunExecutor};
pub use metrics::{RunMetrics, AVERAGED_METRICS};
pub use report::ResultsReport;
pub use result::{Experiment, ExperimentSet};
pub use runner::Benchmark;
