//! Experiment result types.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Deref;

use crate::metrics::{RunMetrics, AVERAGED_METRICS, SOLVED};

/// All trials of one planner plus their averages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Experiment {
    name: String,
    runs: Vec<RunMetrics>,
    averages: BTreeMap<String, String>,
}

impl Experiment {
    /// Creates an experiment with no runs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Vec::new(),
            averages: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trials in the order they ran.
    pub fn runs(&self) -> &[RunMetrics] {
        &self.runs
    }

    /// Averaged metrics keyed by name.
    pub fn averages(&self) -> &BTreeMap<String, String> {
        &self.averages
    }

    /// Appends a trial.
    pub fn add_run(&mut self, run: RunMetrics) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Averages each of [`AVERAGED_METRICS`] across all runs.
    ///
    /// Every run contributes to the denominator. A run missing the metric,
    /// or holding text that does not parse as a number, contributes zero to
    /// the sum. With no runs there is nothing to average and the map stays
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use plannerbench_benchmark::{Experiment, RunMetrics};
    ///
    /// let mut experiment = Experiment::new("PRM");
    /// experiment.add_run([("solved", "1"), ("time", "0.5")].into_iter().collect());
    /// experiment.add_run([("solved", "0"), ("time", "oops")].into_iter().collect());
    /// experiment.compute_averages();
    ///
    /// assert_eq!(experiment.average("solved"), Some(0.5));
    /// assert_eq!(experiment.average("time"), Some(0.25));
    /// assert_eq!(experiment.average("memory"), Some(0.0));
    /// ```
    pub fn compute_averages(&mut self) {
        self.averages.clear();
        if self.runs.is_empty() {
            return;
        }

        let count = self.runs.len() as f64;
        for name in AVERAGED_METRICS {
            let sum: f64 = self
                .runs
                .iter()
                .map(|run| run.numeric(name).unwrap_or(0.0))
                .sum();
            self.averages
                .insert(name.to_string(), (sum / count).to_string());
        }
    }

    /// Averaged value of `name` as a number.
    pub fn average(&self, name: &str) -> Option<f64> {
        self.averages.get(name)?.parse().ok()
    }

    /// Fraction of trials that solved the problem.
    pub fn solved_ratio(&self) -> f64 {
        self.average(SOLVED).unwrap_or(0.0)
    }

    /// Sorted union of metric names seen in any run.
    pub fn property_names(&self) -> Vec<&str> {
        self.runs
            .iter()
            .flat_map(|run| run.names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// One [`Experiment`] per planner, in planner order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentSet {
    experiments: Vec<Experiment>,
}

impl ExperimentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            experiments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, experiment: Experiment) {
        self.experiments.push(experiment);
    }

    /// Drops every experiment.
    pub fn clear(&mut self) {
        self.experiments.clear();
    }

    /// Looks up an experiment by planner name.
    pub fn find(&self, name: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.name == name)
    }
}

impl Deref for ExperimentSet {
    type Target = [Experiment];

    fn deref(&self) -> &Self::Target {
        &self.experiments
    }
}

impl FromIterator<Experiment> for ExperimentSet {
    fn from_iter<I: IntoIterator<Item = Experiment>>(iter: I) -> Self {
        Self {
            experiments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExperimentSet {
    type Item = &'a Experiment;
    type IntoIter = std::slice::Iter<'a, Experiment>;

    fn into_iter(self) -> Self::IntoIter {
        self.experiments.iter()
    }
}

#[cfg(test)]
mod tests;
