//! Composite semilattice constructors
//!
//! Products and named-field records inherit the semilattice laws from
//! their components: each field is joined independently with its own
//! instance, so the composite is lawful exactly when every component is.

use std::collections::BTreeMap;

use crate::JoinSemilattice;

/// Product semilattice: joins a pair componentwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairLattice<SA, SB> {
    pub left: SA,
    pub right: SB,
}

impl<SA, SB> PairLattice<SA, SB> {
    #[inline]
    pub fn new(left: SA, right: SB) -> Self {
        PairLattice { left, right }
    }
}

impl<A, B, SA, SB> JoinSemilattice<(A, B)> for PairLattice<SA, SB>
where
    SA: JoinSemilattice<A>,
    SB: JoinSemilattice<B>,
{
    fn join(&self, x: (A, B), y: (A, B)) -> (A, B) {
        (self.left.join(x.0, y.0), self.right.join(x.1, y.1))
    }
}

/// Named-field record semilattice.
///
/// Holds a child instance per field name and joins a string-keyed record
/// field by field with the matching child. A field present on only one
/// side passes through unchanged; fields with no registered instance are
/// dropped from the result.
pub struct RecordLattice<V> {
    fields: BTreeMap<String, Box<dyn JoinSemilattice<V>>>,
}

impl<V> RecordLattice<V> {
    pub fn new() -> Self {
        RecordLattice {
            fields: BTreeMap::new(),
        }
    }

    /// Register the semilattice instance for a field.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        lattice: impl JoinSemilattice<V> + 'static,
    ) -> Self {
        self.fields.insert(name.into(), Box::new(lattice));
        self
    }

    /// Names of the registered fields, in ascending order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<V> Default for RecordLattice<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> JoinSemilattice<BTreeMap<String, V>> for RecordLattice<V> {
    fn join(&self, mut x: BTreeMap<String, V>, mut y: BTreeMap<String, V>) -> BTreeMap<String, V> {
        let mut joined = BTreeMap::new();
        for (name, lattice) in &self.fields {
            match (x.remove(name), y.remove(name)) {
                (Some(a), Some(b)) => {
                    joined.insert(name.clone(), lattice.join(a, b));
                }
                (Some(a), None) | (None, Some(a)) => {
                    joined.insert(name.clone(), a);
                }
                (None, None) => {}
            }
        }
        joined
    }
}
