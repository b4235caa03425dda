use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::{KBConfig, SolverKind};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the number of generated items
    #[arg(short, long)]
    pub n_items: Option<usize>,
    /// Overrides the capacity of the container
    #[arg(long)]
    pub capacity: Option<usize>,
    /// Overrides the PRNG seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Overrides the solvers to run, can be repeated
    #[arg(long = "solver", value_enum)]
    pub solvers: Vec<SolverKind>,
}

impl Cli {
    /// Applies the overrides given on the command line to `config`
    pub fn apply_overrides(&self, config: &mut KBConfig) {
        if let Some(n_items) = self.n_items {
            config.n_items = n_items;
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(seed) = self.seed {
            config.prng_seed = Some(seed);
        }
        if !self.solvers.is_empty() {
            config.solvers.clone_from(&self.solvers);
        }
    }
}
