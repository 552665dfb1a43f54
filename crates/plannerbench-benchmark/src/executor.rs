//! Single-trial execution and measurement.

use std::fmt;
use std::time::Duration;

use plannerbench_core::{Clock, MemoryProbe, Planner, SharedProblem, SharedSpace};
use tracing::debug;

use crate::error::{BenchmarkError, Result};
use crate::metrics::{
    RunMetrics, APPROXIMATE_SOLUTION, GRAPH_MOTIONS, GRAPH_STATES, MEMORY, PREALLOCATED_STATES,
    SOLUTION_DIFFERENCE, SOLUTION_LENGTH, SOLVED, TIME,
};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Hook that adds planner-specific metrics after the fixed ones.
pub type PropertyExtractor = Box<dyn Fn(&dyn Planner, &mut RunMetrics)>;

/// Drives one planner through one trial.
///
/// Holds the measurement probes; planner, problem and space are passed in
/// per call because they are shared across every trial of every planner.
pub struct RunExecutor<'a> {
    memory: &'a dyn MemoryProbe,
    clock: &'a dyn Clock,
    extractors: &'a [PropertyExtractor],
}

impl<'a> RunExecutor<'a> {
    pub fn new(memory: &'a dyn MemoryProbe, clock: &'a dyn Clock) -> Self {
        Self {
            memory,
            clock,
            extractors: &[],
        }
    }

    /// Runs `extractors` at the end of every trial, in order.
    pub fn with_extractors(mut self, extractors: &'a [PropertyExtractor]) -> Self {
        self.extractors = extractors;
        self
    }

    /// Returns shared state to a clean slate before a trial.
    ///
    /// Releases pre-allocated states, drops the planner's data structures
    /// and forgets the previous solution.
    pub fn reset(&self, planner: &mut dyn Planner, problem: &SharedProblem, space: &SharedSpace) {
        space.borrow_mut().state_allocator_mut().clear();
        planner.clear();
        problem.borrow_mut().clear_solution_path();
    }

    /// Resets shared state, solves once, and records the trial's metrics.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Planner`] if the planner's solve step fails.
    pub fn execute_trial(
        &self,
        planner: &mut dyn Planner,
        problem: &SharedProblem,
        space: &SharedSpace,
        max_time: Duration,
    ) -> Result<RunMetrics> {
        self.reset(planner, problem, space);

        // Nothing may run between the snapshots and solve.
        let memory_start = self.memory.usage_bytes();
        let time_start = self.clock.now();

        // TODO: stop planners that exceed the memory budget; today it is only reported.
        let solved = planner
            .solve(max_time)
            .map_err(|source| BenchmarkError::Planner {
                planner: planner.name().to_string(),
                source,
            })?;

        let time_used = self.clock.seconds_between(time_start, self.clock.now());
        let memory_used = self.memory.usage_bytes() as f64 - memory_start as f64;

        let mut run = RunMetrics::new();
        run.insert(SOLVED, u8::from(solved));
        run.insert(TIME, time_used);
        run.insert(MEMORY, memory_used / BYTES_PER_MEGABYTE);
        run.insert(
            PREALLOCATED_STATES,
            space.borrow().state_allocator().size(),
        );

        if solved {
            let problem = problem.borrow();
            run.insert(
                APPROXIMATE_SOLUTION,
                u8::from(problem.is_approximate_solution()),
            );
            run.insert(SOLUTION_DIFFERENCE, problem.solution_difference());
            run.insert(
                SOLUTION_LENGTH,
                problem.solution_path().map_or(0.0, |path| path.length()),
            );
        }

        let data = planner.planner_data();
        run.insert(GRAPH_STATES, data.state_count());
        run.insert(GRAPH_MOTIONS, data.edge_count());

        for extract in self.extractors {
            extract(&*planner, &mut run);
        }

        debug!(
            event = "trial_end",
            planner = planner.name(),
            solved,
            time_seconds = time_used,
            memory_bytes = memory_used,
        );

        Ok(run)
    }
}

impl fmt::Debug for RunExecutor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunExecutor")
            .field("extractors", &self.extractors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
