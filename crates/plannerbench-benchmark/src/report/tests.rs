use std::fs;

use super::*;
use crate::metrics::RunMetrics;

fn run(pairs: &[(&str, &str)]) -> RunMetrics {
    pairs.iter().copied().collect()
}

fn sample() -> ExperimentSet {
    let mut rrt = Experiment::new("RRT");
    rrt.add_run(run(&[
        ("solved", "1"),
        ("time", "0.5"),
        ("memory", "1"),
        ("solution length", "4.5"),
    ]));
    rrt.add_run(run(&[("solved", "0"), ("time", "1.5"), ("memory", "3")]));
    rrt.compute_averages();

    let mut prm = Experiment::new("PRM");
    prm.add_run(run(&[("solved", "0"), ("time", "2"), ("memory", "0")]));
    prm.compute_averages();

    [rrt, prm].into_iter().collect()
}

const SAMPLE_REPORT: &str = "\
2 planners
RRT
4 properties for each run
memory
solution length
solved
time
2 runs
1; 4.5; 1; 0.5; 
3; ; 0; 1.5; 
3 averaged properties
memory = 2
solved = 0.5
time = 1
.
PRM
3 properties for each run
memory
solved
time
1 runs
0; 0; 2; 
3 averaged properties
memory = 0
solved = 0
time = 2
.
";

#[test]
fn test_report_layout() {
    assert_eq!(ResultsReport::to_string(&sample()), SAMPLE_REPORT);
}

#[test]
fn test_empty_set() {
    assert_eq!(ResultsReport::to_string(&ExperimentSet::new()), "0 planners\n");
}

#[test]
fn test_experiment_without_runs() {
    let set: ExperimentSet = [Experiment::new("Idle")].into_iter().collect();
    assert_eq!(
        ResultsReport::to_string(&set),
        "1 planners\nIdle\n0 properties for each run\n0 runs\n0 averaged properties\n.\n"
    );
}

#[test]
fn test_serialization_is_idempotent() {
    let set = sample();
    assert_eq!(ResultsReport::to_string(&set), ResultsReport::to_string(&set));
}

#[test]
fn test_write_matches_to_string() {
    let set = sample();
    let mut buffer = Vec::new();
    ResultsReport::write(&set, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), SAMPLE_REPORT);
}

#[test]
fn test_to_file_truncates() {
    let path = std::env::temp_dir().join(format!(
        "plannerbench-report-{}.log",
        std::process::id()
    ));
    fs::write(&path, "stale content that is much longer than the report\n".repeat(50)).unwrap();

    let set = ExperimentSet::new();
    ResultsReport::to_file(&set, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0 planners\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_to_file_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("plannerbench-no-such-dir")
        .join("nested")
        .join("report.log");
    assert!(ResultsReport::to_file(&ExperimentSet::new(), path).is_err());
}
