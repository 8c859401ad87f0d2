//! Join-semilattice trait, primitive instances, and derived operations
//!
//! A join-semilattice is a set with a binary join that is commutative,
//! associative, and idempotent. The join is the conflict-free merge:
//! replicas that join their states converge regardless of merge order
//! or repetition.

use std::collections::BTreeSet;

/// A join-semilattice over `A`, passed around as an ordinary value.
///
/// INVARIANT (caller-guaranteed, not engine-enforced): for all x, y, z
/// `join(x, y) == join(y, x)`, `join(x, join(y, z)) == join(join(x, y), z)`,
/// and `join(x, x) == x`. Use [`verify_semilattice_laws`] in tests to
/// spot-check an instance.
pub trait JoinSemilattice<A> {
    /// The binary join. Total, pure, side-effect free.
    fn join(&self, x: A, y: A) -> A;
}

/// Max-based semilattice for any totally ordered type.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxLattice;

impl<A: Ord> JoinSemilattice<A> for MaxLattice {
    #[inline]
    fn join(&self, x: A, y: A) -> A {
        x.max(y)
    }
}

/// Set-union semilattice over an arbitrary element type.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetUnionLattice;

impl<A: Ord> JoinSemilattice<BTreeSet<A>> for SetUnionLattice {
    fn join(&self, mut x: BTreeSet<A>, y: BTreeSet<A>) -> BTreeSet<A> {
        x.extend(y);
        x
    }
}

/// Fold an ordered sequence of values through the join.
///
/// Returns `None` for an empty sequence. When the instance is lawful the
/// result is independent of sequence order; this is the entry point for
/// merging more than two replicas at once.
pub fn join_all<A>(
    lattice: &impl JoinSemilattice<A>,
    values: impl IntoIterator<Item = A>,
) -> Option<A> {
    let mut iter = values.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, v| lattice.join(acc, v)))
}

/// Merge two replica states using the semilattice join.
///
/// The state-based CRDT merge: safe for uncoordinated concurrent use
/// exactly when the instance satisfies the semilattice laws.
#[inline]
pub fn merge<A>(lattice: &impl JoinSemilattice<A>, local: A, remote: A) -> A {
    lattice.join(local, remote)
}

/// Outcome of evaluating the three semilattice laws on a sample triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LawReport {
    pub commutative: bool,
    pub associative: bool,
    pub idempotent: bool,
}

impl LawReport {
    /// All three laws held for the sample.
    #[inline]
    pub fn all_hold(&self) -> bool {
        self.commutative && self.associative && self.idempotent
    }
}

/// Evaluate the semilattice laws for one sample triple.
///
/// A reporting utility for tests: it never blocks a join and takes no
/// corrective action on failure.
pub fn verify_semilattice_laws<A: Clone>(
    lattice: &impl JoinSemilattice<A>,
    eq: impl Fn(&A, &A) -> bool,
    x: A,
    y: A,
    z: A,
) -> LawReport {
    let commutative = eq(
        &lattice.join(x.clone(), y.clone()),
        &lattice.join(y.clone(), x.clone()),
    );
    let associative = eq(
        &lattice.join(x.clone(), lattice.join(y.clone(), z.clone())),
        &lattice.join(lattice.join(x.clone(), y.clone()), z),
    );
    let idempotent = eq(&lattice.join(x.clone(), x.clone()), &x);

    LawReport {
        commutative,
        associative,
        idempotent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set_of(values: &[i64]) -> BTreeSet<i64> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_max_join() {
        assert_eq!(MaxLattice.join(3, 7), 7);
        assert_eq!(MaxLattice.join(7, 3), 7);
    }

    #[test]
    fn test_set_union_join() {
        let joined = SetUnionLattice.join(set_of(&[1, 2]), set_of(&[2, 3]));
        assert_eq!(joined, set_of(&[1, 2, 3]));
    }

    #[test]
    fn test_join_all_folds_sequence() {
        assert_eq!(join_all(&MaxLattice, vec![1, 5, 3, 2]), Some(5));
    }

    #[test]
    fn test_join_all_single_element() {
        assert_eq!(join_all(&MaxLattice, vec![42]), Some(42));
    }

    #[test]
    fn test_join_all_empty() {
        assert_eq!(join_all(&MaxLattice, Vec::<i64>::new()), None);
    }

    #[test]
    fn test_merge_delegates_to_join() {
        assert_eq!(merge(&MaxLattice, 3, 5), 5);
    }

    #[test]
    fn test_laws_hold_for_max() {
        let report = verify_semilattice_laws(&MaxLattice, |a, b| a == b, 1, 2, 3);
        assert!(report.all_hold());
    }

    #[test]
    fn test_laws_report_unlawful_instance() {
        // Saturating sum is commutative and associative but not idempotent;
        // the checker reports the violation rather than failing.
        struct SumLattice;
        impl JoinSemilattice<i64> for SumLattice {
            fn join(&self, x: i64, y: i64) -> i64 {
                x.saturating_add(y)
            }
        }

        let report = verify_semilattice_laws(&SumLattice, |a, b| a == b, 1, 2, 3);
        assert!(report.commutative);
        assert!(report.associative);
        assert!(!report.idempotent);
        assert!(!report.all_hold());
    }

    proptest! {
        #[test]
        fn max_is_commutative(x in any::<i64>(), y in any::<i64>()) {
            prop_assert_eq!(MaxLattice.join(x, y), MaxLattice.join(y, x));
        }

        #[test]
        fn max_is_associative(x in any::<i64>(), y in any::<i64>(), z in any::<i64>()) {
            prop_assert_eq!(
                MaxLattice.join(x, MaxLattice.join(y, z)),
                MaxLattice.join(MaxLattice.join(x, y), z)
            );
        }

        #[test]
        fn max_is_idempotent(x in any::<i64>()) {
            prop_assert_eq!(MaxLattice.join(x, x), x);
        }

        #[test]
        fn set_union_laws(
            x in proptest::collection::btree_set(0i64..100, 0..8),
            y in proptest::collection::btree_set(0i64..100, 0..8),
            z in proptest::collection::btree_set(0i64..100, 0..8),
        ) {
            let report = verify_semilattice_laws(&SetUnionLattice, |a, b| a == b, x, y, z);
            prop_assert!(report.all_hold());
        }
    }
}
