//! Solvers for the 0/1 knapsack problem: a greedy value-density heuristic,
//! an exhaustive recursive search and an exact dynamic programming solver.

/// Entities to model the 0/1 knapsack problem
pub mod entities;

/// The solving strategies, all sharing the [`Solver`](solvers::Solver) interface
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::KSError;
