//! Scripted planner fixture.
//!
//! Plays back a fixed list of outcomes, one per solve call, cycling when the
//! script is shorter than the number of trials.
//!
//! # Example
//!
//! ```
//! use plannerbench_test::{Outcome, ScriptedPlanner};
//!
//! let planner = ScriptedPlanner::new("RRT")
//!     .with_script(vec![Outcome::solved(0.0, 4.5), Outcome::Failed])
//!     .with_graph(10, 2);
//! let counters = planner.counters();
//! assert_eq!(counters.solves(), 0);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use plannerbench_core::{Planner, PlannerData, PlannerError, SharedProblem, SharedSpace};

use crate::problem::PolylinePath;

/// What a scripted planner does on one solve call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Records a straight path of `length` on the problem and returns true.
    Solved {
        approximate: bool,
        difference: f64,
        length: f64,
    },
    /// Returns false without recording anything.
    Failed,
    /// Returns an error from solve.
    Error(String),
}

impl Outcome {
    /// An exact or approximate solution depending on `difference`.
    pub fn solved(difference: f64, length: f64) -> Self {
        Outcome::Solved {
            approximate: difference > 0.0,
            difference,
            length,
        }
    }
}

/// Call counters shared between a planner and the test that owns it.
#[derive(Debug, Default)]
pub struct PlannerCounters {
    problems_bound: Cell<usize>,
    configures: Cell<usize>,
    clears: Cell<usize>,
    solves: Cell<usize>,
}

impl PlannerCounters {
    pub fn problems_bound(&self) -> usize {
        self.problems_bound.get()
    }

    pub fn configures(&self) -> usize {
        self.configures.get()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn solves(&self) -> usize {
        self.solves.get()
    }

    fn bump(cell: &Cell<usize>) -> usize {
        let value = cell.get();
        cell.set(value + 1);
        value
    }
}

/// A planner whose behavior is fixed up front.
pub struct ScriptedPlanner {
    name: String,
    script: Vec<Outcome>,
    graph_states: usize,
    edges_per_state: usize,
    allocations: usize,
    space: Option<SharedSpace>,
    problem: Option<SharedProblem>,
    configured: bool,
    graph: PlannerData,
    counters: Rc<PlannerCounters>,
}

impl ScriptedPlanner {
    /// Creates a planner that fails every trial and reports an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: vec![Outcome::Failed],
            graph_states: 0,
            edges_per_state: 0,
            allocations: 0,
            space: None,
            problem: None,
            configured: false,
            graph: PlannerData::new(),
            counters: Rc::new(PlannerCounters::default()),
        }
    }

    /// Sets the outcomes to play back.
    pub fn with_script(mut self, script: Vec<Outcome>) -> Self {
        self.script = script;
        self
    }

    /// Every solve builds a graph of `states` states with `edges_per_state`
    /// outgoing edges each.
    pub fn with_graph(mut self, states: usize, edges_per_state: usize) -> Self {
        self.graph_states = states;
        self.edges_per_state = edges_per_state;
        self
    }

    /// Every solve reserves `count` states from the shared allocator.
    pub fn with_allocations(mut self, space: SharedSpace, count: usize) -> Self {
        self.space = Some(space);
        self.allocations = count;
        self
    }

    /// Marks the planner as already configured.
    pub fn preconfigured(mut self) -> Self {
        self.configured = true;
        self
    }

    /// Handle to the call counters; stays valid after the planner is boxed.
    pub fn counters(&self) -> Rc<PlannerCounters> {
        Rc::clone(&self.counters)
    }

    fn build_graph(&self) -> PlannerData {
        let mut data = PlannerData::new();
        for i in 0..self.graph_states {
            data.add_state(vec![i as f64]);
        }
        for from in 0..self.graph_states {
            for k in 1..=self.edges_per_state {
                data.add_edge(from, (from + k) % self.graph_states);
            }
        }
        data
    }
}

impl Planner for ScriptedPlanner {
    fn set_problem(&mut self, problem: SharedProblem) {
        PlannerCounters::bump(&self.counters.problems_bound);
        self.problem = Some(problem);
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn configure(&mut self) {
        PlannerCounters::bump(&self.counters.configures);
        self.configured = true;
    }

    fn clear(&mut self) {
        PlannerCounters::bump(&self.counters.clears);
        self.graph = PlannerData::new();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&mut self, _max_time: Duration) -> Result<bool, PlannerError> {
        let problem = self.problem.clone().ok_or(PlannerError::NoProblem)?;
        let trial = PlannerCounters::bump(&self.counters.solves);

        if let Some(space) = &self.space {
            let mut space = space.borrow_mut();
            for _ in 0..self.allocations {
                space.state_allocator_mut().allocate();
            }
        }
        self.graph = self.build_graph();

        let outcome = if self.script.is_empty() {
            Outcome::Failed
        } else {
            self.script[trial % self.script.len()].clone()
        };

        match outcome {
            Outcome::Solved {
                approximate,
                difference,
                length,
            } => {
                problem.borrow_mut().add_solution_path(
                    Box::new(PolylinePath::straight(length)),
                    approximate,
                    difference,
                );
                Ok(true)
            }
            Outcome::Failed => Ok(false),
            Outcome::Error(message) => Err(PlannerError::Failed(message)),
        }
    }

    fn planner_data(&self) -> PlannerData {
        self.graph.clone()
    }
}
