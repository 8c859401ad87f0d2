//! Meld Lattice - Join-semilattice engine
//!
//! This crate implements the semilattice layer of Meld:
//! - The `JoinSemilattice` capability trait
//! - Primitive instances (max, set union, last-writer-wins register)
//! - Composite constructors (pairwise product, named-field record)
//! - Derived operations (`join_all`, `merge`) and the law checker
//!
//! A semilattice instance is an ordinary value passed to the operations
//! that need it. The laws (commutativity, associativity, idempotence)
//! are a caller obligation: the engine cannot verify them at join time,
//! and an unlawful instance silently loses order-independence.

pub mod composite;
pub mod lww;
pub mod semilattice;

pub use composite::*;
pub use lww::*;
pub use semilattice::*;
