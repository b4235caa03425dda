use clap::ValueEnum;
use knapsack_rs::entities::Item;
use knapsack_rs::solvers::{DPSolver, ExhaustiveSolver, GreedySolver, Solver};
use serde::{Deserialize, Serialize};

use crate::generator;

/// Configuration of a benchmark run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KBConfig {
    /// Seed for the PRNG. If undefined, the items are generated in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of items to generate
    pub n_items: usize,
    /// Capacity of the container every solver fills
    pub capacity: usize,
    /// Catalog of item types the generated items are drawn from
    #[serde(default = "generator::default_archetypes")]
    pub archetypes: Vec<Item>,
    /// Solvers to run, in this order
    pub solvers: Vec<SolverKind>,
    /// Above this number of items the exhaustive solver is skipped
    pub exhaustive_item_limit: usize,
}

impl Default for KBConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(133337),
            n_items: 100,
            capacity: 100,
            archetypes: generator::default_archetypes(),
            solvers: vec![SolverKind::Greedy, SolverKind::DP, SolverKind::Exhaustive],
            exhaustive_item_limit: 25,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    Greedy,
    Exhaustive,
    #[value(name = "dp")]
    DP,
}

impl SolverKind {
    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            SolverKind::Greedy => &GreedySolver,
            SolverKind::Exhaustive => &ExhaustiveSolver,
            SolverKind::DP => &DPSolver,
        }
    }

    /// Whether the solver is guaranteed to find an optimal subset
    pub fn is_exact(&self) -> bool {
        !matches!(self, SolverKind::Greedy)
    }
}
