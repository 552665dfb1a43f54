//! Shared test fixtures for PlannerBench crates.
//!
//! - [`planner`] - scripted planner with per-trial outcomes
//! - [`problem`] - goal fixture and polyline solution paths
//! - [`space`] - counting state pool
//! - [`probe`] - deterministic memory and clock probes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! plannerbench-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use plannerbench_test::{GoalProblem, Outcome, PoolSpace, ScriptedPlanner};
//! ```

pub mod planner;
pub mod probe;
pub mod problem;
pub mod space;

pub use planner::{Outcome, PlannerCounters, ScriptedPlanner};
pub use probe::{SteppingClock, SteppingMemory};
pub use problem::{GoalProblem, PolylinePath};
pub use space::{PoolAllocator, PoolSpace};
