//! Error types for Meld engines
//!
//! The taxonomy is narrow on purpose: the engines are almost entirely
//! total functions. Unlawful semilattice instances are reported as data
//! by the law checker, never raised here.

use thiserror::Error;

/// Core Meld errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeldError {
    // Configuration errors
    #[error("invalid snapshot interval {0}: interval must be positive")]
    InvalidSnapshotInterval(i64),
}

/// Result type for Meld operations
pub type MeldResult<T> = Result<T, MeldError>;
