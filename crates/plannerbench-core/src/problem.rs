//! Problem definition and goal bookkeeping.

use std::cell::RefCell;
use std::rc::Rc;

/// A path returned by a planner.
pub trait SolutionPath {
    /// Geometric length of the path.
    fn length(&self) -> f64;
}

/// The problem shared between the benchmark and every planner.
///
/// Holds the goal and the most recently recorded solution.
pub trait ProblemDefinition {
    /// Returns true when start and goal are both specified.
    fn is_defined(&self) -> bool;

    /// Records a solution found by a planner.
    fn add_solution_path(&mut self, path: Box<dyn SolutionPath>, approximate: bool, difference: f64);

    /// Forgets any previously recorded solution.
    fn clear_solution_path(&mut self);

    /// True if the recorded solution only approximately reaches the goal.
    fn is_approximate_solution(&self) -> bool;

    /// Residual distance between the solution's end and the goal.
    fn solution_difference(&self) -> f64;

    /// The recorded solution, if any.
    fn solution_path(&self) -> Option<&dyn SolutionPath>;
}

/// Shared handle to the problem definition.
///
/// Benchmarks run strictly sequentially, so sharing is single-threaded.
pub type SharedProblem = Rc<RefCell<dyn ProblemDefinition>>;

/// Wraps a problem definition in a [`SharedProblem`] handle.
pub fn shared_problem<P: ProblemDefinition + 'static>(problem: P) -> SharedProblem {
    Rc::new(RefCell::new(problem))
}
