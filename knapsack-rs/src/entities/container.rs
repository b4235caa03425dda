use std::fmt::{Display, Formatter};

use log::trace;

use crate::KSError;
use crate::entities::Item;
use crate::util::assertions;

/// A knapsack with a fixed capacity, accumulating [`Item`]s.
/// The sum of the sizes of the held items never exceeds the capacity:
/// every mutation verifies this before committing.
#[derive(Clone, Debug)]
pub struct Container {
    capacity: usize,
    items: Vec<Item>,
    used_capacity: usize,
}

impl Container {
    /// Creates an empty container
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: vec![],
            used_capacity: 0,
        }
    }

    /// Whether `item` can be added without exceeding the capacity
    pub fn fits(&self, item: &Item) -> bool {
        item.size <= self.remaining_capacity()
    }

    /// Adds a single item, fails with [`KSError::CapacityExceeded`] if it does not fit.
    pub fn add(&mut self, item: Item) -> Result<(), KSError> {
        if !self.fits(&item) {
            return Err(KSError::CapacityExceeded {
                required: item.size,
                available: self.remaining_capacity(),
            });
        }
        self.items.push(item);
        self.used_capacity += item.size;
        trace!("[CONT] added {item:?}, {}/{} used", self.used_capacity, self.capacity);

        debug_assert!(assertions::container_usage_correct(self));
        Ok(())
    }

    /// Adds all `items` at once, or none of them.
    /// Fails with [`KSError::CapacityExceeded`] if their combined size exceeds the remaining capacity,
    /// in which case the container is left untouched.
    pub fn add_all(&mut self, items: &[Item]) -> Result<(), KSError> {
        let batch_size = items
            .iter()
            .try_fold(0usize, |acc, item| acc.checked_add(item.size));

        match batch_size {
            Some(batch_size) if batch_size <= self.remaining_capacity() => {
                self.items.extend_from_slice(items);
                self.used_capacity += batch_size;
                trace!(
                    "[CONT] added batch of {} items, {}/{} used",
                    items.len(),
                    self.used_capacity,
                    self.capacity
                );
                debug_assert!(assertions::container_usage_correct(self));
                Ok(())
            }
            _ => Err(KSError::CapacityExceeded {
                required: batch_size.unwrap_or(usize::MAX),
                available: self.remaining_capacity(),
            }),
        }
    }

    /// Read-only snapshot of the state of the container
    pub fn summary(&self) -> Summary {
        Summary {
            total_value: self.total_value(),
            used_capacity: self.used_capacity,
            capacity: self.capacity,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn used_capacity(&self) -> usize {
        self.used_capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.used_capacity
    }

    /// Sum of the values of the held items, in the order they were added
    pub fn total_value(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, i| acc + i.value)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Summary of a [`Container`], used for reporting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub total_value: f64,
    pub used_capacity: usize,
    pub capacity: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Container with volume {}/{} contains ({:.2})",
            self.used_capacity, self.capacity, self.total_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_respects_capacity() {
        let mut container = Container::new(5);
        assert!(container.add(Item::new(3, 60.0)).is_ok());
        assert!(container.fits(&Item::new(2, 120.0)));
        assert!(!container.fits(&Item::new(3, 1.0)));

        let err = container.add(Item::new(4, 100.0)).unwrap_err();
        assert_eq!(
            err,
            KSError::CapacityExceeded {
                required: 4,
                available: 2
            }
        );
        assert_eq!(container.items(), &[Item::new(3, 60.0)]);
        assert_eq!(container.used_capacity(), 3);
    }

    #[test]
    fn add_all_is_atomic() {
        let mut container = Container::new(10);
        container.add(Item::new(4, 1.0)).unwrap();

        let batch = [Item::new(3, 2.0), Item::new(2, 3.0), Item::new(2, 4.0)];
        assert!(container.add_all(&batch).is_err());
        assert_eq!(container.items(), &[Item::new(4, 1.0)]);
        assert_eq!(container.used_capacity(), 4);

        container.add_all(&batch[..2]).unwrap();
        assert_eq!(container.used_capacity(), 9);
        assert_eq!(container.items().len(), 3);
    }

    #[test]
    fn add_all_overflowing_batch() {
        let mut container = Container::new(usize::MAX);
        let batch = [Item::new(usize::MAX, 1.0), Item::new(1, 1.0)];
        assert!(matches!(
            container.add_all(&batch),
            Err(KSError::CapacityExceeded { .. })
        ));
        assert!(container.is_empty());
    }

    #[test]
    fn empty_summary() {
        let summary = Container::new(100).summary();
        assert!(summary.total_value.is_sign_positive());
        assert_eq!(
            summary.to_string(),
            "Container with volume 0/100 contains (0.00)"
        );
    }

    #[test]
    fn summary() {
        let mut container = Container::new(100);
        container
            .add_all(&[Item::new(3, 99.0), Item::new(1, 10.0)])
            .unwrap();
        let summary = container.summary();
        assert_eq!(
            summary,
            Summary {
                total_value: 109.0,
                used_capacity: 4,
                capacity: 100
            }
        );
        assert_eq!(
            summary.to_string(),
            "Container with volume 4/100 contains (109.00)"
        );
    }
}
