//! Benchmark runner.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use plannerbench_config::BenchmarkConfig;
use plannerbench_core::{
    Clock, MemoryProbe, MonotonicClock, Planner, ProcessMemory, SharedProblem, SharedSpace,
};
use tracing::{error, info};

use crate::error::{BenchmarkError, Result};
use crate::executor::{PropertyExtractor, RunExecutor};
use crate::metrics::RunMetrics;
use crate::report::ResultsReport;
use crate::result::{Experiment, ExperimentSet};

/// Runs every registered planner against one shared problem.
///
/// Planners run one after another, each for the requested number of trials.
/// The results of the most recent [`run`](Benchmark::run) are kept until the
/// next one replaces them.
///
/// # Example
///
/// ```
/// use plannerbench_benchmark::Benchmark;
/// use plannerbench_core::{shared_problem, shared_space};
/// use plannerbench_test::{GoalProblem, PoolSpace, ScriptedPlanner};
///
/// let mut benchmark = Benchmark::new(shared_problem(GoalProblem::new()))
///     .with_space_information(shared_space(PoolSpace::new()))
///     .with_planner(ScriptedPlanner::new("RRT"))
///     .with_planner(ScriptedPlanner::new("PRM"));
///
/// let experiments = benchmark.run(0.5, 128.0, 2).unwrap();
/// assert_eq!(experiments.len(), 2);
/// assert_eq!(experiments[1].name(), "PRM");
/// ```
pub struct Benchmark {
    problem: SharedProblem,
    space: Option<SharedSpace>,
    planners: Vec<Box<dyn Planner>>,
    memory: Box<dyn MemoryProbe>,
    clock: Box<dyn Clock>,
    extractors: Vec<PropertyExtractor>,
    experiments: ExperimentSet,
}

impl Benchmark {
    /// Creates a benchmark for `problem` measuring with the process RSS and
    /// the monotonic clock.
    pub fn new(problem: SharedProblem) -> Self {
        Self {
            problem,
            space: None,
            planners: Vec::new(),
            memory: Box::new(ProcessMemory),
            clock: Box::new(MonotonicClock),
            extractors: Vec::new(),
            experiments: ExperimentSet::new(),
        }
    }

    /// Sets the space information whose allocator is reset between trials.
    pub fn with_space_information(mut self, space: SharedSpace) -> Self {
        self.space = Some(space);
        self
    }

    /// Adds a planner to the end of the run order.
    pub fn with_planner(mut self, planner: impl Planner + 'static) -> Self {
        self.add_planner(Box::new(planner));
        self
    }

    /// Replaces the memory probe.
    pub fn with_memory_probe(mut self, memory: impl MemoryProbe + 'static) -> Self {
        self.memory = Box::new(memory);
        self
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Registers a hook that adds planner-specific metrics to every trial.
    pub fn with_property_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&dyn Planner, &mut RunMetrics) + 'static,
    {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Adds a planner to the end of the run order.
    pub fn add_planner(&mut self, planner: Box<dyn Planner>) {
        self.planners.push(planner);
    }

    pub fn planners(&self) -> &[Box<dyn Planner>] {
        &self.planners
    }

    /// Results of the last completed run.
    pub fn experiments(&self) -> &ExperimentSet {
        &self.experiments
    }

    /// Runs `run_count` trials of every planner.
    ///
    /// `max_time` is the per-trial budget in seconds. `max_memory_mb` is
    /// advisory and only logged. Previous results are discarded first.
    ///
    /// # Errors
    ///
    /// Fails before any trial runs if there is no space information, the
    /// problem has no goal, or `max_time` is not a valid duration. Fails
    /// mid-run if a planner's solve step errors. On error the experiment
    /// set is left empty.
    pub fn run(
        &mut self,
        max_time: f64,
        max_memory_mb: f64,
        run_count: usize,
    ) -> Result<&ExperimentSet> {
        self.experiments.clear();

        let space = self.check_preconditions()?;
        let time_limit = Duration::try_from_secs_f64(max_time).map_err(|_| {
            error!(event = "benchmark_aborted", max_time, "Invalid time limit");
            BenchmarkError::InvalidTimeLimit(max_time)
        })?;

        info!(
            event = "benchmark_start",
            planner_count = self.planners.len(),
            run_count,
            max_time_seconds = max_time,
            max_memory_mb,
        );

        let executor =
            RunExecutor::new(self.memory.as_ref(), self.clock.as_ref()).with_extractors(&self.extractors);
        let mut experiments = ExperimentSet::with_capacity(self.planners.len());

        for (planner_index, planner) in self.planners.iter_mut().enumerate() {
            planner.set_problem(Rc::clone(&self.problem));
            if !planner.is_configured() {
                planner.configure();
            }
            let mut experiment = Experiment::new(planner.name());

            info!(
                event = "planner_start",
                planner = experiment.name(),
                planner_index,
            );

            for _ in 0..run_count {
                let run = executor
                    .execute_trial(planner.as_mut(), &self.problem, &space, time_limit)
                    .inspect_err(|e| error!(event = "benchmark_aborted", error = %e))?;
                experiment.add_run(run);
            }
            experiment.compute_averages();

            info!(
                event = "planner_end",
                planner = experiment.name(),
                planner_index,
                runs = experiment.run_count(),
                solved_ratio = experiment.solved_ratio(),
            );
            experiments.push(experiment);
        }

        info!(event = "benchmark_end", planner_count = experiments.len());
        self.experiments = experiments;
        Ok(&self.experiments)
    }

    /// Runs with the parameters in `config`, then writes the report if an
    /// output path is configured.
    pub fn run_with_config(&mut self, config: &BenchmarkConfig) -> Result<&ExperimentSet> {
        config.validate()?;
        self.run(config.max_time_seconds, config.max_memory_mb, config.run_count)?;
        if let Some(path) = &config.output_path {
            self.save_results_to_file(path)?;
        }
        Ok(&self.experiments)
    }

    /// Writes the report to `path`, truncating any existing file.
    pub fn save_results_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        ResultsReport::to_file(&self.experiments, path)?;
        info!(event = "results_saved", path = %path.display());
        Ok(())
    }

    /// Writes the report to any writer.
    pub fn save_results_to_stream<W: Write>(&self, writer: W) -> Result<()> {
        Ok(ResultsReport::write(&self.experiments, writer)?)
    }

    fn check_preconditions(&self) -> Result<SharedSpace> {
        let Some(space) = &self.space else {
            error!(event = "benchmark_aborted", "No space information defined");
            return Err(BenchmarkError::SpaceInformationMissing);
        };

        if !self.problem.borrow().is_defined() {
            error!(event = "benchmark_aborted", "No goal defined");
            return Err(BenchmarkError::GoalUndefined);
        }

        let mut info = space.borrow_mut();
        if !info.is_configured() {
            info.configure();
        }
        drop(info);

        Ok(Rc::clone(space))
    }
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.planners.iter().map(|p| p.name()).collect();
        f.debug_struct("Benchmark")
            .field("planners", &names)
            .field("has_space_information", &self.space.is_some())
            .field("experiments", &self.experiments.len())
            .finish_non_exhaustive()
    }
}
