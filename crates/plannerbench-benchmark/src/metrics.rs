//! Per-trial metrics.
//!
//! Values are kept as text so numbers and booleans are written back out
//! exactly as they were recorded.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Whether the planner reported a solution (`1` or `0`).
pub const SOLVED: &str = "solved";
/// Wall-clock seconds spent in solve.
pub const TIME: &str = "time";
/// Process memory delta across solve, in megabytes.
pub const MEMORY: &str = "memory";
/// States held by the shared allocator after the trial.
pub const PREALLOCATED_STATES: &str = "preallocated states";
/// Whether the solution only approximately reaches the goal (`1` or `0`).
pub const APPROXIMATE_SOLUTION: &str = "approximate solution";
/// Residual distance to the goal.
pub const SOLUTION_DIFFERENCE: &str = "solution difference";
/// Length of the solution path.
pub const SOLUTION_LENGTH: &str = "solution length";
/// States in the planner's search graph.
pub const GRAPH_STATES: &str = "graph states";
/// Edges in the planner's search graph.
pub const GRAPH_MOTIONS: &str = "graph motions";

/// Metrics reduced to their mean for every planner.
pub const AVERAGED_METRICS: [&str; 3] = [SOLVED, TIME, MEMORY];

/// Named metrics recorded for one trial, ordered by name.
///
/// Which names are present depends on the trial: solution metrics only
/// appear when the planner solved the problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetrics {
    properties: BTreeMap<String, String>,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.properties.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Reads a metric as a number.
    ///
    /// Flags are recorded as `1`/`0`, so they read back as numbers too.
    /// Missing or non-numeric values give `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use plannerbench_benchmark::RunMetrics;
    ///
    /// let mut run = RunMetrics::new();
    /// run.insert("solved", u8::from(true));
    /// run.insert("approximate solution", "true");
    /// run.insert("time", 0.25);
    /// run.insert("note", "fast");
    ///
    /// assert_eq!(run.numeric("solved"), Some(1.0));
    /// assert_eq!(run.numeric("time"), Some(0.25));
    /// assert_eq!(run.numeric("approximate solution"), None);
    /// assert_eq!(run.numeric("note"), None);
    /// assert_eq!(run.numeric("memory"), None);
    /// ```
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.get(name)?.trim().parse().ok()
    }

    /// Metric names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RunMetrics {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut run = Self::new();
        for (name, value) in iter {
            run.insert(name, value);
        }
        run
    }
}

impl<'a> IntoIterator for &'a RunMetrics {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
