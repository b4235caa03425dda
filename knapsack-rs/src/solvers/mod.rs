mod dp;
mod exhaustive;
mod greedy;

#[doc(inline)]
pub use dp::DPSolver;
#[doc(inline)]
pub use exhaustive::ExhaustiveSolver;
#[doc(inline)]
pub use greedy::GreedySolver;

use crate::KSError;
use crate::entities::{Container, Item};

/// Strategy to fill a [`Container`] with a subset of the available items.
///
/// On success the container holds a subset of `items` which respects its capacity.
/// Implementations never mutate `items` and validate them before computing anything.
/// Only the capacity still remaining in the container is considered,
/// for a fresh container this is its full capacity.
pub trait Solver {
    /// Short identifier, used for reporting
    fn name(&self) -> &'static str;

    fn solve(&self, items: &[Item], container: &mut Container) -> Result<(), KSError>;
}
