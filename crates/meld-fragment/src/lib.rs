//! Meld Fragment - Deterministic keyed-fragment merge
//!
//! A fragment is an ordered sequence of `(key, value)` records observed
//! by one source. Merging collects every record across a sequence of
//! fragments and folds the values sharing a key through a caller-supplied
//! combine function, producing one record per distinct key. The merge is
//! the colimit of the fragment diagram: any compatible target factors
//! through it, which the injection/mediating maps let tests check by
//! direct computation.

pub mod fragment;
pub mod merge;

pub use fragment::*;
pub use merge::*;
