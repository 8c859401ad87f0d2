//! Meld Testkit - Convergence validation harness
//!
//! This crate provides:
//! - Seeded event-log permutation (message reordering)
//! - Arrival-order re-stamping (clock-skew simulation)
//! - A permutation sweep measuring convergence against a canonical state

pub mod chaos;

pub use chaos::*;
