use anyhow::{Result, ensure};
use knapsack_rs::entities::Item;
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::SmallRng;

/// The catalog of item types used when the config does not define one
pub fn default_archetypes() -> Vec<Item> {
    [
        (1, 10.0),
        (2, 15.0),
        (3, 99.0),
        (15, 20.0),
        (36, 100.0),
        (40, 15.0),
    ]
    .into_iter()
    .map(Item::from)
    .collect()
}

/// Creates the PRNG for a run, seeded if `seed` is defined, from entropy otherwise
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Draws `n_items` uniformly, with replacement, from the `archetypes`.
pub fn generate_items(
    n_items: usize,
    archetypes: &[Item],
    rng: &mut impl Rng,
) -> Result<Vec<Item>> {
    ensure!(
        n_items == 0 || !archetypes.is_empty(),
        "cannot generate {n_items} items from an empty archetype catalog"
    );

    let items = (0..n_items)
        .map(|_| archetypes[rng.random_range(0..archetypes.len())])
        .collect();

    Ok(items)
}
