//! Error types for planner collaborators

use thiserror::Error;

/// Failure reported by a planner's solve step.
///
/// A planner that cannot even attempt a solve (as opposed to one that
/// simply fails to find a solution) returns this.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The planner was asked to solve before it had a problem bound.
    #[error("no problem definition bound to planner")]
    NoProblem,

    /// The planner's setup left it unable to run.
    #[error("planner is not configured: {0}")]
    NotConfigured(String),

    /// Any other failure raised from inside the algorithm.
    #[error("planner failed: {0}")]
    Failed(String),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
