//! Meld Temporal - Event log engine and snapshot acceleration
//!
//! This crate reconstructs entity state from an append-only log of
//! timestamped events:
//! - Time-indexed views of the log (`prefix_up_to`, `restrict`)
//! - State reconstruction by left fold (`fold_events`, `state_at`)
//! - Periodic checkpoints bounding reconstruction cost (`SnapshotLog`)
//!
//! A log's sequence order is arrival order, which is NOT assumed to be
//! timestamp order. The engine never reorders silently: time-indexed
//! views filter, and only `SnapshotLog::build` sorts, explicitly.

pub mod event;
pub mod snapshot;

pub use event::*;
pub use snapshot::*;
