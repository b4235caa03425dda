use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::KSError;
use crate::entities::{Container, Item};
use crate::solvers::Solver;
use crate::util;

/// Value-density heuristic: considers the items by descending value/size ratio
/// and adds every item which still fits at that moment.
/// Items which do not fit are skipped and never reconsidered.
///
/// Runs in O(n log n), but is not guaranteed to find the optimal subset.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, items: &[Item], container: &mut Container) -> Result<(), KSError> {
        util::validate_items(items)?;

        //stable sort: equal densities keep their input order
        let ranked = items
            .iter()
            .sorted_by_key(|item| Reverse(OrderedFloat(item.density())));

        let mut n_skipped = 0;
        for item in ranked {
            match container.fits(item) {
                true => container.add(*item)?,
                false => n_skipped += 1,
            }
        }

        debug!(
            "[GREEDY] added {} items, skipped {n_skipped}",
            items.len() - n_skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_by_density() {
        let items = [
            Item::new(3, 60.0),
            Item::new(4, 100.0),
            Item::new(2, 120.0),
        ];
        let mut container = Container::new(5);
        GreedySolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(2, 120.0), Item::new(3, 60.0)]);
        assert_eq!(container.total_value(), 180.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = [Item::new(2, 20.0), Item::new(1, 10.0), Item::new(3, 30.0)];
        let mut container = Container::new(3);
        GreedySolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(2, 20.0), Item::new(1, 10.0)]);
    }

    #[test]
    fn skipped_items_are_not_retried() {
        // the dense item is taken, stranding the capacity the two others would have used
        let items = [Item::new(5, 50.0), Item::new(6, 66.0), Item::new(5, 50.0)];
        let mut container = Container::new(10);
        GreedySolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(6, 66.0)]);
        assert_eq!(container.used_capacity(), 6);
    }

    #[test]
    fn invalid_input() {
        let mut container = Container::new(10);
        let res = GreedySolver.solve(&[Item::new(1, -5.0)], &mut container);
        assert!(matches!(res, Err(KSError::InvalidInput(_))));
        assert!(container.is_empty());
    }
}
