//! Last-writer-wins register
//!
//! A value paired with a logical timestamp. The join keeps the operand
//! with the greater timestamp; exact ties fall back to a deterministic
//! byte comparison of the values' canonical serialization so the join
//! stays commutative even when no timestamp order exists.

use meld_core::LogicalTime;
use serde::Serialize;

use crate::JoinSemilattice;

/// A last-writer-wins register: a timestamped value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lww<A> {
    pub value: A,
    pub timestamp: LogicalTime,
}

impl<A> Lww<A> {
    #[inline]
    pub fn new(value: A, timestamp: LogicalTime) -> Self {
        Lww { value, timestamp }
    }
}

/// Join-semilattice instance for LWW registers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LwwLattice;

impl<A: Serialize> JoinSemilattice<Lww<A>> for LwwLattice {
    fn join(&self, x: Lww<A>, y: Lww<A>) -> Lww<A> {
        if x.timestamp > y.timestamp {
            return x;
        }
        if y.timestamp > x.timestamp {
            return y;
        }
        // Equal timestamps: deterministic tiebreak on the canonical
        // serialization. Values that serialize identically are equal for
        // merge purposes, so either operand is acceptable then.
        if canonical_bytes(&x.value) >= canonical_bytes(&y.value) {
            x
        } else {
            y
        }
    }
}

fn canonical_bytes<A: Serialize>(value: &A) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_default()
}
