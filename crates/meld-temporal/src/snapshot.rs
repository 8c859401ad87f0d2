//! Snapshot-accelerated state reconstruction
//!
//! A naive point-in-time fold costs O(all events). A `SnapshotLog`
//! checkpoints the folded state at every multiple of a fixed interval,
//! so a query folds only the events since the nearest checkpoint,
//! bounded by roughly one interval of events once snapshots exist. The
//! accelerated path is a pure optimization: it must always produce the
//! same state as the naive fold, which `verify_equivalence` checks.

use meld_core::{LogicalTime, MeldError, MeldResult};
use tracing::debug;

use crate::{fold_events, prefix_up_to, DomainEvent, EventLog};

/// A fully-folded state as of a checkpoint instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<S> {
    pub timestamp: LogicalTime,
    pub state: S,
}

/// An event log indexed by periodic snapshots of its folded state.
///
/// Owns the log sorted ascending by timestamp (stable, so arrival order
/// breaks ties), the initial state, the apply step, and the derived
/// checkpoints.
pub struct SnapshotLog<E, S, F> {
    events: EventLog<E>,
    snapshots: Vec<Snapshot<S>>,
    initial: S,
    apply: F,
    interval: i64,
}

impl<E, S, F> SnapshotLog<E, S, F>
where
    E: Clone,
    S: Clone,
    F: Fn(S, &E) -> S,
{
    /// Build a snapshot log from events in any arrival order.
    ///
    /// Sorts the events ascending by timestamp and walks them once,
    /// recording a snapshot at every multiple of `interval` up to the
    /// largest event timestamp; the recorded state at a multiple m is
    /// the fold of all events with timestamp <= m. An empty log yields
    /// zero snapshots.
    ///
    /// The walk is inherently sequential: `apply` is an arbitrary step
    /// function with no structure to parallelize over.
    ///
    /// # Errors
    ///
    /// [`MeldError::InvalidSnapshotInterval`] if `interval <= 0`.
    pub fn build(
        events: &[DomainEvent<E>],
        initial: S,
        apply: F,
        interval: i64,
    ) -> MeldResult<Self> {
        if interval <= 0 {
            return Err(MeldError::InvalidSnapshotInterval(interval));
        }

        let mut sorted = events.to_vec();
        sorted.sort_by_key(|e| e.timestamp);

        let mut snapshots = Vec::new();
        if let Some(last) = sorted.last() {
            let max_ticks = last.timestamp.ticks();
            let mut state = initial.clone();
            let mut next_event = 0;
            let mut checkpoint = interval;

            while checkpoint <= max_ticks {
                while next_event < sorted.len()
                    && sorted[next_event].timestamp.ticks() <= checkpoint
                {
                    state = apply(state, &sorted[next_event].payload);
                    next_event += 1;
                }
                snapshots.push(Snapshot {
                    timestamp: LogicalTime::new(checkpoint),
                    state: state.clone(),
                });
                checkpoint = match checkpoint.checked_add(interval) {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        debug!(
            events = sorted.len(),
            snapshots = snapshots.len(),
            interval,
            "built snapshot log"
        );

        Ok(SnapshotLog {
            events: sorted,
            snapshots,
            initial,
            apply,
            interval,
        })
    }

    /// State at instant t via the nearest checkpoint.
    ///
    /// Binary-searches the snapshot with the greatest timestamp <= t
    /// (falling back to the initial state when none precedes t), then
    /// folds only the events with timestamps in `(snapshot, t]`.
    pub fn state_at(&self, t: LogicalTime) -> S {
        let idx = self.snapshots.partition_point(|s| s.timestamp <= t);
        let (base_state, base_time) = if idx == 0 {
            (self.initial.clone(), None)
        } else {
            let snapshot = &self.snapshots[idx - 1];
            (snapshot.state.clone(), Some(snapshot.timestamp))
        };

        let start = match base_time {
            Some(base) => self.events.partition_point(|e| e.timestamp <= base),
            None => 0,
        };
        let end = self.events.partition_point(|e| e.timestamp <= t);

        self.events[start..end]
            .iter()
            .fold(base_state, |state, event| {
                (self.apply)(state, &event.payload)
            })
    }

    /// Check that the accelerated path agrees with the naive fold at t.
    pub fn verify_equivalence(&self, t: LogicalTime, eq: impl Fn(&S, &S) -> bool) -> bool {
        let accelerated = self.state_at(t);
        let naive = fold_events(
            &prefix_up_to(&self.events, t),
            self.initial.clone(),
            |state, event| (self.apply)(state, event),
        );
        eq(&accelerated, &naive)
    }

    /// The events, sorted ascending by timestamp.
    pub fn events(&self) -> &[DomainEvent<E>] {
        &self.events
    }

    /// The recorded checkpoints, in ascending order.
    pub fn snapshots(&self) -> &[Snapshot<S>] {
        &self.snapshots
    }

    /// The checkpoint interval in ticks.
    #[inline]
    pub fn interval(&self) -> i64 {
        self.interval
    }

    /// The state before any event.
    pub fn initial(&self) -> &S {
        &self.initial
    }
}
