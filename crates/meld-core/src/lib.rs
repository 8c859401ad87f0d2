//! Meld Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every Meld engine:
//! - Logical time (`LogicalTime`)
//! - The error taxonomy (`MeldError`, `MeldResult`)

pub mod error;
pub mod time;

pub use error::*;
pub use time::*;
