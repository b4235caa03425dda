use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Total value compared with a tolerance, through [`float_cmp::approx_eq!()`].
///
/// The exact solvers sum every subset in input order and can be compared bit-for-bit.
/// A container filled by the greedy heuristic sums its items in density order instead,
/// so its total may differ by a few ulps from the same subset summed in input order.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, ulps = 8)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
