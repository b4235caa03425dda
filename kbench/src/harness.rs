use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use itertools::Itertools;
use knapsack_rs::entities::{KPInstance, Summary};
use knapsack_rs::util::FPA;
use log::{error, info, warn};
use thousands::Separable;

use crate::config::SolverKind;

/// Outcome of a single solver run
#[derive(Debug, Clone, Copy)]
pub struct SolveReport {
    pub solver: SolverKind,
    pub summary: Summary,
    pub elapsed: Duration,
}

/// Runs every solver in `kinds` on `instance`, each filling a fresh container.
/// The exhaustive solver is skipped if the instance holds more than `exhaustive_item_limit` items.
pub fn run(
    instance: &KPInstance,
    kinds: &[SolverKind],
    exhaustive_item_limit: usize,
) -> Result<Vec<SolveReport>> {
    let n_items = instance.items().len();
    let mut reports = vec![];

    for &kind in kinds {
        if kind == SolverKind::Exhaustive && n_items > exhaustive_item_limit {
            warn!(
                "[BENCH] skipping {}: {n_items} items exceeds the limit of {exhaustive_item_limit}",
                kind.solver().name()
            );
            continue;
        }

        let solver = kind.solver();
        let mut container = instance.container();

        let start = Instant::now();
        solver.solve(instance.items(), &mut container)?;
        let elapsed = start.elapsed();

        let report = SolveReport {
            solver: kind,
            summary: container.summary(),
            elapsed,
        };
        log_report(&report);
        reports.push(report);
    }

    Ok(reports)
}

pub fn log_report(report: &SolveReport) {
    info!(
        "[BENCH] {} took {}µs",
        report.solver.solver().name(),
        report.elapsed.as_micros().separate_with_commas()
    );
    info!("[BENCH] {}", report.summary);
}

/// Verifies the exact solvers among `reports` all found the same total value,
/// and that no heuristic outperformed them beyond the tolerance of [`FPA`].
pub fn check_consistency(reports: &[SolveReport]) -> Result<()> {
    let (exact, heuristic): (Vec<&SolveReport>, Vec<&SolveReport>) =
        reports.iter().partition(|r| r.solver.is_exact());

    let Some(reference) = exact.first() else {
        return Ok(());
    };
    // exact solvers all sum their subsets in input order, so their optima agree bit-for-bit
    let optimum = reference.summary.total_value;
    if let Some(r) = exact
        .iter()
        .find(|r| r.summary.total_value.to_bits() != optimum.to_bits())
    {
        error!(
            "[BENCH] exact solvers disagree: {:?} found {}, {:?} found {}",
            reference.solver, optimum, r.solver, r.summary.total_value
        );
        bail!("exact solvers disagree on the optimal value");
    }

    let outperforming = heuristic
        .iter()
        .filter(|r| FPA(r.summary.total_value) > FPA(optimum))
        .map(|r| r.solver)
        .collect_vec();
    if !outperforming.is_empty() {
        error!("[BENCH] {outperforming:?} outperformed the optimum of {optimum}");
        bail!("heuristic solver outperformed an exact solver");
    }

    for r in heuristic {
        info!(
            "[BENCH] {} reached {:.3}% of the optimum",
            r.solver.solver().name(),
            match optimum > 0.0 {
                true => r.summary.total_value / optimum * 100.0,
                false => 100.0,
            }
        );
    }
    Ok(())
}
