//! Report generation for benchmark results.
//!
//! The format is line-oriented so other tools can parse it back:
//!
//! ```text
//! <planner count> planners
//! <planner name>
//! <property count> properties for each run
//! <property name>            (one per line, sorted)
//! <run count> runs
//! <value>; <value>; ...      (one line per run, one field per property)
//! <average count> averaged properties
//! <name> = <value>           (one per line, sorted)
//! .
//! ```
//!
//! Columns are the sorted union of property names across a planner's runs;
//! a run without a property leaves that field empty.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::result::{Experiment, ExperimentSet};

/// Serializer for [`ExperimentSet`] reports.
///
/// # Example
///
/// ```
/// use plannerbench_benchmark::{ExperimentSet, ResultsReport};
///
/// let report = ResultsReport::to_string(&ExperimentSet::new());
/// assert_eq!(report, "0 planners\n");
/// ```
pub struct ResultsReport;

impl ResultsReport {
    /// Renders the report as a string.
    pub fn to_string(experiments: &ExperimentSet) -> String {
        experiments.to_string()
    }

    /// Writes the report to a file, replacing any existing content.
    pub fn to_file(experiments: &ExperimentSet, path: impl AsRef<Path>) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write(experiments, &mut writer)?;
        writer.flush()
    }

    /// Writes the report to a writer.
    pub fn write<W: Write>(experiments: &ExperimentSet, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", experiments)
    }
}

impl fmt::Display for ExperimentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} planners", self.len())?;
        for experiment in self {
            write_experiment(f, experiment)?;
        }
        Ok(())
    }
}

fn write_experiment(f: &mut fmt::Formatter<'_>, experiment: &Experiment) -> fmt::Result {
    writeln!(f, "{}", experiment.name())?;

    let properties = experiment.property_names();
    writeln!(f, "{} properties for each run", properties.len())?;
    for property in &properties {
        writeln!(f, "{}", property)?;
    }

    writeln!(f, "{} runs", experiment.runs().len())?;
    for run in experiment.runs() {
        for property in &properties {
            write!(f, "{}; ", run.get(property).unwrap_or_default())?;
        }
        writeln!(f)?;
    }

    writeln!(f, "{} averaged properties", experiment.averages().len())?;
    for (name, value) in experiment.averages() {
        writeln!(f, "{} = {}", name, value)?;
    }

    writeln!(f, ".")
}

#[cfg(test)]
mod tests;
