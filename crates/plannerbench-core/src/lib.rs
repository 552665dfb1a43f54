//! PlannerBench Core - collaborator traits for planner benchmarking
//!
//! This crate defines the seams the benchmark orchestrator talks through:
//! - [`Planner`] for the algorithm under test
//! - [`ProblemDefinition`] and [`SolutionPath`] for the shared goal
//! - [`SpaceInformation`] and [`StateAllocator`] for shared state storage
//! - [`MemoryProbe`] and [`Clock`] for measurement around each solve

pub mod error;
pub mod planner;
pub mod probe;
pub mod problem;
pub mod space;

pub use error::PlannerError;
pub use planner::{Planner, PlannerData};
pub use probe::{Clock, MemoryProbe, MonotonicClock, ProcessMemory};
pub use problem::{shared_problem, ProblemDefinition, SharedProblem, SolutionPath};
pub use space::{shared_space, SharedSpace, SpaceInformation, StateAllocator};
