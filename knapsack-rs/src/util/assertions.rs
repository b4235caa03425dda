use itertools::Itertools;
use log::error;

use crate::entities::{Container, Item};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn container_usage_correct(container: &Container) -> bool {
    let summed = container.items().iter().map(|i| i.size).sum::<usize>();
    if summed != container.used_capacity() {
        error!(
            "used capacity {} does not match the items held ({summed})",
            container.used_capacity()
        );
        return false;
    }
    container.used_capacity() <= container.capacity()
}

pub fn subset_fits(subset: &[Item], capacity: usize) -> bool {
    subset.iter().map(|i| i.size).sum::<usize>() <= capacity
}

/// Checks whether `subset` can be obtained by removing items from `items`, with multiplicities.
pub fn subset_drawn_from(subset: &[Item], items: &[Item]) -> bool {
    let available = items.iter().map(item_key).counts();
    let selected = subset.iter().map(item_key).counts();

    selected
        .iter()
        .all(|(key, n)| available.get(key).is_some_and(|m| n <= m))
}

/// Checks whether the value of `subset`, summed in order, is bit-for-bit `expected`.
pub fn subset_value_matches(subset: &[Item], expected: f64) -> bool {
    let value = subset.iter().fold(0.0, |acc, i| acc + i.value);
    if value.to_bits() != expected.to_bits() {
        error!("subset value {value} does not match {expected}");
        return false;
    }
    true
}

fn item_key(item: &Item) -> (usize, u64) {
    (item.size, item.value.to_bits())
}
