use log::{debug, trace};
use ndarray::Array2;

use crate::KSError;
use crate::entities::{Container, Item};
use crate::solvers::Solver;
use crate::util;
use crate::util::assertions;

/// Exact dynamic programming solver, O(n × capacity) in both time and memory.
///
/// Fills a table `T` where `T[i][c]` is the best value achievable with the first `i` items
/// and capacity `c`, then backtraces from `T[n][capacity]` to recover the selected items.
///
/// The include branch is only taken when it is strictly better, otherwise the cell is a bitwise
/// copy of the one above it. The backtrace therefore detects a selected item by bitwise inequality,
/// which always reproduces the decision taken during the fill.
///
/// Every cell holds the value of a subset summed in input order, the same order in which a
/// [`Container`] sums the items committed to it. As float addition rounds monotonically,
/// `T[n][capacity]` is bit-for-bit the largest such sum over all feasible subsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct DPSolver;

impl Solver for DPSolver {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn solve(&self, items: &[Item], container: &mut Container) -> Result<(), KSError> {
        util::validate_items(items)?;
        let capacity = container.remaining_capacity();

        let table = fill_table(items, capacity)?;
        let selected = backtrace(&table, items);

        let optimum = table[[items.len(), capacity]];
        debug!(
            "[DP] selected {} of {} items with value {:.3}",
            selected.len(),
            items.len(),
            optimum
        );
        debug_assert!(assertions::subset_fits(&selected, capacity));
        debug_assert!(assertions::subset_value_matches(&selected, optimum));
        debug_assert!(assertions::subset_drawn_from(&selected, items));

        container.add_all(&selected)
    }
}

/// Builds the `(n+1) × (capacity+1)` value table.
/// Row 0 (no items considered) and column 0 (no capacity available) remain zero.
fn fill_table(items: &[Item], capacity: usize) -> Result<Array2<f64>, KSError> {
    let n = items.len();
    let n_cells = capacity
        .checked_add(1)
        .and_then(|n_cols| n_cols.checked_mul(n + 1))
        .filter(|&n_cells| n_cells <= isize::MAX as usize / size_of::<f64>());
    if n_cells.is_none() {
        return Err(KSError::InvalidInput(format!(
            "DP table for {n} items and capacity {capacity} is too large"
        )));
    }
    debug!("[DP] table of {} x {}", n + 1, capacity + 1);

    let mut table = Array2::<f64>::zeros((n + 1, capacity + 1));
    //the maximum over the entire table, always equal to T[n][capacity] in this formulation
    let mut max = (0.0, (0, 0));

    for i in 1..=n {
        let item = &items[i - 1];
        for c in 1..=capacity {
            let exclude = table[[i - 1, c]];
            table[[i, c]] = match item.size <= c {
                true => {
                    let include = table[[i - 1, c - item.size]] + item.value;
                    match include > exclude {
                        true => include,
                        false => exclude,
                    }
                }
                false => exclude,
            };
            if table[[i, c]] > max.0 {
                max = (table[[i, c]], (i, c));
            }
        }
    }

    trace!("[DP] maximum {:.3} found at {:?}", max.0, max.1);
    debug_assert!(max.0 == table[[n, capacity]]);

    Ok(table)
}

/// Recovers the selected items, in input order, starting from `T[n][capacity]`.
fn backtrace(table: &Array2<f64>, items: &[Item]) -> Vec<Item> {
    let (mut i, mut c) = (items.len(), table.ncols() - 1);
    let mut selected = vec![];

    while i > 0 && c > 0 {
        if table[[i, c]].to_bits() != table[[i - 1, c]].to_bits() {
            let item = items[i - 1];
            selected.push(item);
            c -= item.size;
        }
        i -= 1;
    }

    selected.reverse();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[(usize, f64)]) -> Vec<Item> {
        raw.iter().copied().map(Item::from).collect()
    }

    #[test]
    fn table_matches_hand_computation() {
        let items = items(&[(5, 10.0), (4, 40.0), (6, 30.0), (4, 50.0)]);
        let table = fill_table(&items, 10).unwrap();

        assert_eq!(table.dim(), (5, 11));
        assert_eq!(
            table.row(2).to_vec(),
            vec![0.0, 0.0, 0.0, 0.0, 40.0, 40.0, 40.0, 40.0, 40.0, 50.0, 50.0]
        );
        assert_eq!(
            table.row(4).to_vec(),
            vec![0.0, 0.0, 0.0, 0.0, 50.0, 50.0, 50.0, 50.0, 90.0, 90.0, 90.0]
        );
        assert_eq!(
            backtrace(&table, &items),
            vec![Item::new(4, 40.0), Item::new(4, 50.0)]
        );
    }

    #[test]
    fn oversized_items_are_skipped() {
        let items = items(&[(11, 1000.0), (3, 1.0)]);
        let mut container = Container::new(10);
        DPSolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(3, 1.0)]);
    }

    #[test]
    fn fractional_values() {
        // 0.1 + 0.2 sums to 0.30000000000000004, which the later 0.3 does not beat
        let items = items(&[(1, 0.1), (1, 0.2), (2, 0.3)]);
        let mut container = Container::new(2);
        DPSolver.solve(&items, &mut container).unwrap();

        assert_eq!(container.items(), &[Item::new(1, 0.1), Item::new(1, 0.2)]);
        assert_eq!(container.total_value(), 0.1 + 0.2);
    }

    #[test]
    fn tiny_improvements_are_kept() {
        let mut container = Container::new(1);
        DPSolver.solve(&items(&[(1, 5e-10)]), &mut container).unwrap();
        assert_eq!(container.total_value(), 5e-10);

        let items = items(&[(1, 1e-9), (4, 1.0000000006)]);
        let mut container = Container::new(6);
        DPSolver.solve(&items, &mut container).unwrap();
        assert_eq!(container.items(), items.as_slice());
        assert_eq!(container.total_value(), 1e-9 + 1.0000000006);
    }

    #[test]
    fn mixed_magnitudes() {
        let items = items(&[
            (1, 2.8e-9),
            (4, 1.6e-9),
            (1, 1000000.0000000017),
            (3, 2.2e-9),
            (1, 6e-10),
        ]);
        let table = fill_table(&items, 8).unwrap();
        let optimum = table[[items.len(), 8]];
        assert_eq!(table.iter().cloned().fold(0.0, f64::max), optimum);

        let selected = backtrace(&table, &items);
        // all items but the one of size 4 fit together
        assert_eq!(selected.len(), 4);
        assert_eq!(selected.iter().fold(0.0, |acc, i| acc + i.value), optimum);
    }

    #[test]
    fn too_large_table() {
        let items = items(&[(1, 1.0), (2, 2.0)]);
        let mut container = Container::new(usize::MAX);
        let res = DPSolver.solve(&items, &mut container);

        assert!(matches!(res, Err(KSError::InvalidInput(_))));
        assert!(container.is_empty());
    }
}
