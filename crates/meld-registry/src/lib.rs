//! Meld Registry - Provider directory domain layer
//!
//! A healthcare provider's profile spans several bounded contexts
//! (EHR, credentialing, contracting, directory), each holding a partial
//! view. This crate wires those views to the Meld engines:
//! - Entity resolution: per-context fragments merged into one record
//!   per provider
//! - Replica reconciliation: provider state as a record of LWW fields
//!   merged by semilattice join
//! - History: provider state reconstructed from a timestamped event log
//! - Schema translation between differently-named context schemas

pub mod provider;
pub mod resolve;
pub mod schema;

pub use provider::*;
pub use resolve::*;
pub use schema::*;
