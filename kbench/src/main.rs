use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kbench::config::KBConfig;
use kbench::io::cli::Cli;
use kbench::{generator, harness, io};
use knapsack_rs::entities::KPInstance;
use log::{info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file.as_ref() {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            KBConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    args.apply_overrides(&mut config);

    info!("[MAIN] Successfully parsed KBConfig: {config:?}");

    let mut rng = generator::create_rng(config.prng_seed);
    let items = generator::generate_items(config.n_items, &config.archetypes, &mut rng)?;
    let instance =
        KPInstance::new(items, config.capacity).context("generated an invalid instance")?;

    info!(
        "[MAIN] generated {} items with a combined value of {:.2}, capacity {}",
        instance.items().len().separate_with_commas(),
        instance.total_value(),
        instance.capacity().separate_with_commas()
    );

    let reports = harness::run(&instance, &config.solvers, config.exhaustive_item_limit)?;
    harness::check_consistency(&reports)
}
