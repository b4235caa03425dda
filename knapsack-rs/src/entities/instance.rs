use crate::KSError;
use crate::entities::{Container, Item};
use crate::util;

/// Instance of the 0/1 knapsack problem: the available items and the target capacity.
/// Validated on construction, immutable afterwards.
#[derive(Clone, Debug)]
pub struct KPInstance {
    items: Vec<Item>,
    capacity: usize,
}

impl KPInstance {
    pub fn new(items: Vec<Item>, capacity: usize) -> Result<Self, KSError> {
        util::validate_items(&items)?;
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A fresh, empty container with the capacity of this instance
    pub fn container(&self) -> Container {
        Container::new(self.capacity)
    }

    /// Sum of the values of all items, an upper bound on the value of any solution
    pub fn total_value(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, i| acc + i.value)
    }
}
