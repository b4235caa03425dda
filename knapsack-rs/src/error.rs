use thiserror::Error;

/// Errors raised by the [`Container`](crate::entities::Container) and the solvers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KSError {
    /// Committing the item(s) would push the container over its capacity.
    /// Escaping a solver, this signals a bug in that solver.
    #[error("capacity exceeded: {required} required, {available} available")]
    CapacityExceeded { required: usize, available: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
