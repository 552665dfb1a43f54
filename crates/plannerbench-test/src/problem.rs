//! Goal and solution path fixtures.

use plannerbench_core::{ProblemDefinition, SolutionPath};

/// Piecewise-linear path through a list of waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePath {
    waypoints: Vec<Vec<f64>>,
}

impl PolylinePath {
    pub fn new(waypoints: Vec<Vec<f64>>) -> Self {
        Self { waypoints }
    }

    /// One-dimensional segment from the origin, `length` long.
    pub fn straight(length: f64) -> Self {
        Self::new(vec![vec![0.0], vec![length]])
    }
}

impl SolutionPath for PolylinePath {
    /// Sum of Euclidean segment lengths.
    ///
    /// ```
    /// use plannerbench_core::SolutionPath;
    /// use plannerbench_test::PolylinePath;
    ///
    /// let path = PolylinePath::new(vec![vec![0.0, 0.0], vec![3.0, 0.0], vec![3.0, 1.5]]);
    /// assert_eq!(path.length(), 4.5);
    /// ```
    fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| {
                pair[0]
                    .iter()
                    .zip(&pair[1])
                    .map(|(a, b)| (b - a) * (b - a))
                    .sum::<f64>()
                    .sqrt()
            })
            .sum()
    }
}

struct RecordedSolution {
    path: Box<dyn SolutionPath>,
    approximate: bool,
    difference: f64,
}

/// Problem definition that just stores whatever planners record.
pub struct GoalProblem {
    defined: bool,
    solution: Option<RecordedSolution>,
    clears: usize,
}

impl GoalProblem {
    /// A fully specified problem.
    pub fn new() -> Self {
        Self {
            defined: true,
            solution: None,
            clears: 0,
        }
    }

    /// A problem missing its goal.
    pub fn undefined() -> Self {
        Self {
            defined: false,
            ..Self::new()
        }
    }

    pub fn has_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Number of times the recorded solution was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Default for GoalProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemDefinition for GoalProblem {
    fn is_defined(&self) -> bool {
        self.defined
    }

    fn add_solution_path(&mut self, path: Box<dyn SolutionPath>, approximate: bool, difference: f64) {
        self.solution = Some(RecordedSolution {
            path,
            approximate,
            difference,
        });
    }

    fn clear_solution_path(&mut self) {
        self.clears += 1;
        self.solution = None;
    }

    fn is_approximate_solution(&self) -> bool {
        self.solution.as_ref().is_some_and(|s| s.approximate)
    }

    fn solution_difference(&self) -> f64 {
        self.solution.as_ref().map_or(0.0, |s| s.difference)
    }

    fn solution_path(&self) -> Option<&dyn SolutionPath> {
        self.solution.as_ref().map(|s| s.path.as_ref())
    }
}
