//! The planner capability set.

use std::time::Duration;

use crate::error::PlannerError;
use crate::problem::SharedProblem;

/// An algorithm that attempts to produce a solution path within a time budget.
///
/// Planners are stateful and side-effecting: `solve` records its solution on
/// the bound problem definition and may populate the shared state allocator.
/// The benchmark only ever talks to planners through this trait.
pub trait Planner {
    /// Binds the shared problem definition.
    fn set_problem(&mut self, problem: SharedProblem);

    /// Returns true once [`configure`](Planner::configure) has run.
    fn is_configured(&self) -> bool;

    /// One-time setup, run lazily before the first trial.
    fn configure(&mut self);

    /// Drops all internal data structures so the next solve starts cold.
    fn clear(&mut self);

    /// Human-readable planner name used in reports.
    fn name(&self) -> &str;

    /// Attempts to solve the bound problem within `max_time`.
    ///
    /// `Ok(false)` means no solution was found in time. `Err` means the
    /// planner could not run at all and is fatal to the benchmark.
    fn solve(&mut self, max_time: Duration) -> Result<bool, PlannerError>;

    /// Snapshot of the planner's search graph.
    fn planner_data(&self) -> PlannerData;
}

/// Search-graph snapshot exposed by a planner.
///
/// `edges[i]` lists the indices of states reachable from `states[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerData {
    pub states: Vec<Vec<f64>>,
    pub edges: Vec<Vec<usize>>,
}

impl PlannerData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state and returns its index.
    pub fn add_state(&mut self, state: Vec<f64>) -> usize {
        self.states.push(state);
        self.edges.push(Vec::new());
        self.states.len() - 1
    }

    /// Adds a directed edge between two state indices.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if from >= self.edges.len() {
            self.edges.resize_with(from + 1, Vec::new);
        }
        self.edges[from].push(to);
    }

    /// Number of states discovered.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of edges across all states.
    ///
    /// # Example
    ///
    /// ```
    /// use plannerbench_core::PlannerData;
    ///
    /// let mut data = PlannerData::new();
    /// let a = data.add_state(vec![0.0, 0.0]);
    /// let b = data.add_state(vec![1.0, 0.0]);
    /// data.add_edge(a, b);
    /// data.add_edge(b, a);
    /// assert_eq!(data.state_count(), 2);
    /// assert_eq!(data.edge_count(), 2);
    /// ```
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}
