//! Chaos harness - convergence under message reordering
//!
//! Replicas receive the same events in different orders. The harness
//! generates seeded permutations of a fixed log, folds each through a
//! caller-supplied run function, and counts agreement with a canonical
//! state. Folding after a timestamp sort should converge every time;
//! folding in arrival order with arrival-derived timestamps should not.

use meld_core::LogicalTime;
use meld_temporal::{DomainEvent, EventLog};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

/// Harness configuration
#[derive(Clone, Debug)]
pub struct ChaosConfig {
    /// Number of permutations to run
    pub runs: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        ChaosConfig {
            runs: 200,
            seed: 42,
        }
    }
}

impl ChaosConfig {
    /// Few permutations for quick tests
    pub fn light() -> Self {
        ChaosConfig { runs: 50, seed: 42 }
    }
}

/// Outcome of a permutation sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvergenceReport {
    pub runs: usize,
    pub converged: usize,
    pub diverged: usize,
}

impl ConvergenceReport {
    /// Every permutation reproduced the canonical state.
    #[inline]
    pub fn all_converged(&self) -> bool {
        self.diverged == 0
    }

    /// Fraction of permutations that diverged.
    pub fn divergence_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.diverged as f64 / self.runs as f64
        }
    }
}

/// One seeded permutation of the log.
pub fn shuffle_log<E: Clone>(log: &[DomainEvent<E>], rng: &mut StdRng) -> EventLog<E> {
    let mut shuffled = log.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Sort ascending by timestamp (stable: ties keep arrival order).
pub fn sort_by_timestamp<E: Clone>(log: &[DomainEvent<E>]) -> EventLog<E> {
    let mut sorted = log.to_vec();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

/// Replace each timestamp with one derived from arrival position.
///
/// Simulates a replica stamping events with its own clock as they
/// arrive: event i gets timestamp (i + 1) * 10 regardless of when it
/// was produced. Folding such a log is order-dependent by construction.
pub fn restamp_by_arrival<E: Clone>(log: &[DomainEvent<E>]) -> EventLog<E> {
    log.iter()
        .enumerate()
        .map(|(i, event)| {
            DomainEvent::new(LogicalTime::new((i as i64 + 1) * 10), event.payload.clone())
        })
        .collect()
}

/// Run seeded permutations of the log through `run` and count how many
/// reproduce the canonical state.
pub fn run_permutations<E: Clone, S>(
    log: &[DomainEvent<E>],
    config: &ChaosConfig,
    run: impl Fn(&[DomainEvent<E>]) -> S,
    canonical: &S,
    eq: impl Fn(&S, &S) -> bool,
) -> ConvergenceReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut converged = 0;

    for _ in 0..config.runs {
        let permuted = shuffle_log(log, &mut rng);
        let state = run(&permuted);
        if eq(&state, canonical) {
            converged += 1;
        }
    }

    let report = ConvergenceReport {
        runs: config.runs,
        converged,
        diverged: config.runs - converged,
    };

    info!(
        runs = report.runs,
        converged = report.converged,
        diverged = report.diverged,
        "permutation sweep complete"
    );

    report
}
