use super::*;
use crate::metrics::{GRAPH_STATES, MEMORY, SOLUTION_LENGTH, TIME};

fn run(pairs: &[(&str, &str)]) -> RunMetrics {
    pairs.iter().copied().collect()
}

#[test]
fn test_averages_cover_whitelist_only() {
    let mut experiment = Experiment::new("RRT");
    experiment.add_run(run(&[
        (SOLVED, "1"),
        (TIME, "1"),
        (MEMORY, "2"),
        (GRAPH_STATES, "40"),
    ]));
    experiment.add_run(run(&[
        (SOLVED, "1"),
        (TIME, "3"),
        (MEMORY, "4"),
        (GRAPH_STATES, "60"),
    ]));
    experiment.compute_averages();

    let names: Vec<&str> = experiment.averages().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["memory", "solved", "time"]);
    assert_eq!(experiment.average(SOLVED), Some(1.0));
    assert_eq!(experiment.average(TIME), Some(2.0));
    assert_eq!(experiment.average(MEMORY), Some(3.0));
    assert_eq!(experiment.average(GRAPH_STATES), None);
}

#[test]
fn test_each_run_counted_once() {
    let mut experiment = Experiment::new("EST");
    for time in ["0.5", "1.5", "2.5", "3.5"] {
        experiment.add_run(run(&[(SOLVED, "0"), (TIME, time), (MEMORY, "0")]));
    }
    experiment.compute_averages();

    assert_eq!(experiment.average(TIME), Some(2.0));
    assert_eq!(experiment.averages()[TIME], "2");
    assert_eq!(experiment.solved_ratio(), 0.0);
}

#[test]
fn test_unparseable_and_missing_count_as_zero() {
    let mut experiment = Experiment::new("KPIECE");
    experiment.add_run(run(&[(SOLVED, "1"), (TIME, "4")]));
    experiment.add_run(run(&[(SOLVED, "maybe"), (TIME, "n/a"), (MEMORY, "8")]));
    experiment.compute_averages();

    assert_eq!(experiment.average(SOLVED), Some(0.5));
    assert_eq!(experiment.average(TIME), Some(2.0));
    assert_eq!(experiment.average(MEMORY), Some(4.0));
}

#[test]
fn test_no_runs_no_averages() {
    let mut experiment = Experiment::new("SBL");
    experiment.compute_averages();
    assert!(experiment.averages().is_empty());
    assert_eq!(experiment.solved_ratio(), 0.0);
}

#[test]
fn test_recompute_replaces_previous_averages() {
    let mut experiment = Experiment::new("RRT");
    experiment.add_run(run(&[(SOLVED, "0")]));
    experiment.compute_averages();
    experiment.add_run(run(&[(SOLVED, "1")]));
    experiment.compute_averages();
    assert_eq!(experiment.average(SOLVED), Some(0.5));
}

#[test]
fn test_property_names_are_sorted_union() {
    let mut experiment = Experiment::new("RRT");
    experiment.add_run(run(&[(TIME, "1"), (SOLVED, "1"), (SOLUTION_LENGTH, "3")]));
    experiment.add_run(run(&[(SOLVED, "0"), (MEMORY, "0"), (TIME, "2")]));

    let names = experiment.property_names();
    assert_eq!(names, vec!["memory", "solution length", "solved", "time"]);
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_experiment_set_lookup() {
    let set: ExperimentSet = [Experiment::new("A"), Experiment::new("B")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert_eq!(set[1].name(), "B");
    assert!(set.find("A").is_some());
    assert!(set.find("C").is_none());
}
