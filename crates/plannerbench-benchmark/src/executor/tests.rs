use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use plannerbench_core::{MemoryProbe, SharedProblem, SharedSpace, StateAllocator};
use plannerbench_test::{
    GoalProblem, Outcome, PoolSpace, ScriptedPlanner, SteppingClock, SteppingMemory,
};

use super::*;

struct Fixture {
    problem: Rc<RefCell<GoalProblem>>,
    space: Rc<RefCell<PoolSpace>>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            problem: Rc::new(RefCell::new(GoalProblem::new())),
            space: Rc::new(RefCell::new(PoolSpace::new())),
        }
    }

    fn shared_problem(&self) -> SharedProblem {
        self.problem.clone()
    }

    fn shared_space(&self) -> SharedSpace {
        self.space.clone()
    }
}

fn clock() -> SteppingClock {
    SteppingClock::new(Duration::from_millis(250))
}

#[test]
fn test_failed_trial_has_six_properties() {
    let fixture = Fixture::new();
    let memory = SteppingMemory::one_mib_per_trial();
    let clock = clock();
    let executor = RunExecutor::new(&memory, &clock);

    let mut planner = ScriptedPlanner::new("RRT").with_graph(5, 2);
    planner.set_problem(fixture.shared_problem());

    let run = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap();

    let names: Vec<&str> = run.names().collect();
    assert_eq!(
        names,
        vec![
            "graph motions",
            "graph states",
            "memory",
            "preallocated states",
            "solved",
            "time"
        ]
    );
    assert_eq!(run.get(SOLVED), Some("0"));
    assert_eq!(run.get(TIME), Some("0.25"));
    assert_eq!(run.get(MEMORY), Some("1"));
    assert_eq!(run.get(PREALLOCATED_STATES), Some("0"));
    assert_eq!(run.get(GRAPH_STATES), Some("5"));
    assert_eq!(run.get(GRAPH_MOTIONS), Some("10"));
}

#[test]
fn test_solved_trial_adds_solution_metrics() {
    let fixture = Fixture::new();
    let memory = SteppingMemory::new(0, 0);
    let clock = clock();
    let executor = RunExecutor::new(&memory, &clock);

    let mut planner = ScriptedPlanner::new("PRM")
        .with_script(vec![Outcome::solved(0.0, 4.5)])
        .with_allocations(fixture.shared_space(), 7);
    planner.set_problem(fixture.shared_problem());

    let run = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap();

    assert_eq!(run.len(), 9);
    assert_eq!(run.get(SOLVED), Some("1"));
    assert_eq!(run.get(APPROXIMATE_SOLUTION), Some("0"));
    assert_eq!(run.get(SOLUTION_DIFFERENCE), Some("0"));
    assert_eq!(run.get(SOLUTION_LENGTH), Some("4.5"));
    assert_eq!(run.get(PREALLOCATED_STATES), Some("7"));
    assert_eq!(run.get(MEMORY), Some("0"));
}

#[test]
fn test_approximate_solution_reports_difference() {
    let fixture = Fixture::new();
    let memory = SteppingMemory::new(0, 0);
    let clock = clock();
    let executor = RunExecutor::new(&memory, &clock);

    let mut planner = ScriptedPlanner::new("EST").with_script(vec![Outcome::solved(0.75, 3.0)]);
    planner.set_problem(fixture.shared_problem());

    let run = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap();

    assert_eq!(run.get(APPROXIMATE_SOLUTION), Some("1"));
    assert_eq!(run.get(SOLUTION_DIFFERENCE), Some("0.75"));
}

#[test]
fn test_memory_delta_may_be_negative() {
    struct Shrinking(std::cell::Cell<u64>);
    impl MemoryProbe for Shrinking {
        fn usage_bytes(&self) -> u64 {
            let value = self.0.get();
            self.0.set(value - 2 * 1024 * 1024);
            value
        }
    }

    let fixture = Fixture::new();
    let memory = Shrinking(std::cell::Cell::new(64 * 1024 * 1024));
    let clock = clock();
    let executor = RunExecutor::new(&memory, &clock);

    let mut planner = ScriptedPlanner::new("RRT");
    planner.set_problem(fixture.shared_problem());

    let run = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap();
    assert_eq!(run.get(MEMORY), Some("-2"));
}

#[test]
fn test_reset_happens_before_measurement() {
    // Records allocator size and solution presence each time memory is read.
    struct Observer {
        problem: Rc<RefCell<GoalProblem>>,
        space: Rc<RefCell<PoolSpace>>,
        seen: RefCell<Vec<(usize, bool)>>,
    }
    impl MemoryProbe for Observer {
        fn usage_bytes(&self) -> u64 {
            let held = self.space.borrow().allocator().size();
            let solution = self.problem.borrow().has_solution();
            self.seen.borrow_mut().push((held, solution));
            0
        }
    }

    let fixture = Fixture::new();
    let observer = Observer {
        problem: fixture.problem.clone(),
        space: fixture.space.clone(),
        seen: RefCell::new(Vec::new()),
    };
    let clock = clock();
    let executor = RunExecutor::new(&observer, &clock);

    let mut planner = ScriptedPlanner::new("RRT")
        .with_script(vec![Outcome::solved(0.0, 1.0)])
        .with_allocations(fixture.shared_space(), 3);
    planner.set_problem(fixture.shared_problem());

    for _ in 0..2 {
        executor
            .execute_trial(
                &mut planner,
                &fixture.shared_problem(),
                &fixture.shared_space(),
                Duration::from_secs(1),
            )
            .unwrap();
    }

    // start snapshot clean, end snapshot dirty, for both trials
    assert_eq!(
        *observer.seen.borrow(),
        vec![(0, false), (3, true), (0, false), (3, true)]
    );
    assert_eq!(fixture.space.borrow().allocator().clears(), 2);
    assert_eq!(fixture.problem.borrow().clears(), 2);
    assert_eq!(planner.counters().clears(), 2);
}

#[test]
fn test_planner_error_is_reported() {
    let fixture = Fixture::new();
    let memory = SteppingMemory::new(0, 0);
    let clock = clock();
    let executor = RunExecutor::new(&memory, &clock);

    let mut planner =
        ScriptedPlanner::new("Broken").with_script(vec![Outcome::Error("segfault".to_string())]);
    planner.set_problem(fixture.shared_problem());

    let err = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap_err();

    match err {
        BenchmarkError::Planner { planner, .. } => assert_eq!(planner, "Broken"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_extractors_run_after_fixed_metrics() {
    let fixture = Fixture::new();
    let memory = SteppingMemory::new(0, 0);
    let clock = clock();
    let extractors: Vec<PropertyExtractor> = vec![Box::new(|planner: &dyn Planner, run: &mut RunMetrics| {
        run.insert("planner name", planner.name());
        let states = run.numeric(GRAPH_STATES).unwrap_or(0.0);
        run.insert("states per motion", states / 2.0);
    })];
    let executor = RunExecutor::new(&memory, &clock).with_extractors(&extractors);

    let mut planner = ScriptedPlanner::new("KPIECE").with_graph(4, 1);
    planner.set_problem(fixture.shared_problem());

    let run = executor
        .execute_trial(
            &mut planner,
            &fixture.shared_problem(),
            &fixture.shared_space(),
            Duration::from_secs(1),
        )
        .unwrap();

    assert_eq!(run.get("planner name"), Some("KPIECE"));
    assert_eq!(run.get("states per motion"), Some("2"));
}
