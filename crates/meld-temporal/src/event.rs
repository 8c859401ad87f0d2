//! Domain events and time-indexed log views
//!
//! The log is a presheaf over time: `prefix_up_to(log, t)` is the view
//! at instant t, and `restrict` maps a view at t down to a view at an
//! earlier s. Restriction commutes with taking prefixes; that is the
//! functoriality law checked by `verify_functoriality`.

use meld_core::LogicalTime;

/// An event payload stamped at a logical instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainEvent<E> {
    pub timestamp: LogicalTime,
    pub payload: E,
}

impl<E> DomainEvent<E> {
    #[inline]
    pub fn new(timestamp: LogicalTime, payload: E) -> Self {
        DomainEvent { timestamp, payload }
    }
}

/// An event log in arrival order.
pub type EventLog<E> = Vec<DomainEvent<E>>;

/// The subsequence of events with `timestamp <= t`, arrival order kept.
///
/// A filter, never a sort: callers needing timestamp-ordered folding
/// must sort deliberately.
pub fn prefix_up_to<E: Clone>(log: &[DomainEvent<E>], t: LogicalTime) -> EventLog<E> {
    log.iter().filter(|e| e.timestamp <= t).cloned().collect()
}

/// Restriction map from the view at some t down to the view at s.
///
/// The same filter as [`prefix_up_to`], named for its role as the
/// presheaf restriction.
pub fn restrict<E: Clone>(log: &[DomainEvent<E>], s: LogicalTime) -> EventLog<E> {
    prefix_up_to(log, s)
}

/// Left-fold the log, in its given order, into a state value.
pub fn fold_events<E, S>(
    log: &[DomainEvent<E>],
    initial: S,
    mut apply: impl FnMut(S, &E) -> S,
) -> S {
    log.iter().fold(initial, |state, event| apply(state, &event.payload))
}

/// State at instant t: fold the prefix up to t.
pub fn state_at<E: Clone, S>(
    log: &[DomainEvent<E>],
    t: LogicalTime,
    initial: S,
    apply: impl FnMut(S, &E) -> S,
) -> S {
    fold_events(&prefix_up_to(log, t), initial, apply)
}

/// Check the functoriality law for one pair `s <= t`:
/// `restrict(prefix_up_to(log, t), s) == prefix_up_to(log, s)`,
/// same events in the same relative order. Returns `false` for `s > t`.
pub fn verify_functoriality<E: Clone + PartialEq>(
    log: &[DomainEvent<E>],
    s: LogicalTime,
    t: LogicalTime,
) -> bool {
    if s > t {
        return false;
    }
    restrict(&prefix_up_to(log, t), s) == prefix_up_to(log, s)
}
