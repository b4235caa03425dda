use log::debug;

use crate::KSError;
use crate::entities::{Container, Item};
use crate::solvers::Solver;
use crate::util;
use crate::util::assertions;

/// Exact solver which enumerates every include/exclude decision recursively.
///
/// The search tree has up to 2^n leaves, so this solver is only practical for tens of items.
/// No limit is imposed here: callers wanting to bound the runtime have to do so themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, items: &[Item], container: &mut Container) -> Result<(), KSError> {
        util::validate_items(items)?;

        let mut search = Search {
            items,
            current: vec![],
            best: vec![],
            best_value: 0.0,
            n_leaves: 0,
        };
        search.branch(0, container.remaining_capacity(), 0.0);

        let selected = search.best.iter().map(|&idx| items[idx]).collect::<Vec<_>>();
        debug!(
            "[EXH] {} leaves visited, best subset holds {} items with value {:.3}",
            search.n_leaves,
            selected.len(),
            search.best_value
        );
        debug_assert!(assertions::subset_fits(&selected, container.remaining_capacity()));
        debug_assert!(assertions::subset_value_matches(&selected, search.best_value));

        container.add_all(&selected)
    }
}

/// State of the depth-first enumeration.
/// `current` holds the indices of the items included along the path from the root.
/// The value of the path is passed down the recursion instead, so it is always summed in input order.
struct Search<'a> {
    items: &'a [Item],
    current: Vec<usize>,
    best: Vec<usize>,
    best_value: f64,
    n_leaves: usize,
}

impl Search<'_> {
    fn branch(&mut self, idx: usize, remaining: usize, value: f64) {
        if idx >= self.items.len() || remaining == 0 {
            self.n_leaves += 1;
            //only a strictly better subset replaces the incumbent, ties are won by the exclude branch
            if value > self.best_value {
                self.best.clone_from(&self.current);
                self.best_value = value;
            }
            return;
        }

        //exclude
        self.branch(idx + 1, remaining, value);

        //include, if it fits
        let item = &self.items[idx];
        if item.size <= remaining {
            self.current.push(idx);
            self.branch(idx + 1, remaining - item.size, value + item.value);
            self.current.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_optimum() {
        let items = [Item::new(6, 66.0), Item::new(5, 50.0), Item::new(5, 50.0)];
        let mut container = Container::new(10);
        ExhaustiveSolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(5, 50.0), Item::new(5, 50.0)]);
        assert_eq!(container.used_capacity(), 10);
    }

    #[test]
    fn ties_favor_exclusion() {
        // both items alone are optimal, the exclude-first order keeps the later one
        let items = [Item::new(3, 10.0), Item::new(2, 10.0)];
        let mut container = Container::new(3);
        ExhaustiveSolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(2, 10.0)]);
    }

    #[test]
    fn mixed_magnitudes() {
        let items = [
            (1, 1000000.0000000012),
            (1, 1e-9),
            (3, 1.0000000012),
            (4, 1.6e-9),
            (3, 1.2e-9),
            (1, 1.2e-9),
            (1, 6e-10),
            (3, 1000000.0),
        ]
        .map(Item::from);
        let mut container = Container::new(10);
        ExhaustiveSolver.solve(&items, &mut container).unwrap();

        // everything but the items of size 4 and the first of size 3 holding 1.2e-9
        let expected = [0, 1, 2, 5, 6, 7].map(|idx| items[idx]);
        assert_eq!(container.items(), &expected);
        assert_eq!(container.used_capacity(), 10);
    }

    #[test]
    fn respects_remaining_capacity() {
        let mut container = Container::new(5);
        container.add(Item::new(2, 1.0)).unwrap();

        let items = [Item::new(4, 100.0), Item::new(3, 60.0)];
        ExhaustiveSolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(2, 1.0), Item::new(3, 60.0)]);
    }
}
