use serde::{Deserialize, Serialize};

/// Item which can be put in a [`Container`](crate::entities::Container).
/// Has no identity beyond its fields, multiple items may share the same size and value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Capacity the item occupies in a container
    pub size: usize,
    /// Value gained by putting the item in a container
    pub value: f64,
}

impl Item {
    pub fn new(size: usize, value: f64) -> Self {
        Self { size, value }
    }

    /// Value per unit of size, the ranking criterion of the greedy heuristic.
    /// Infinite for zero-sized items, which are rejected by input validation anyway.
    pub fn density(&self) -> f64 {
        match self.size {
            0 => f64::INFINITY,
            size => self.value / size as f64,
        }
    }
}

impl From<(usize, f64)> for Item {
    fn from((size, value): (usize, f64)) -> Self {
        Item { size, value }
    }
}
