//! An owning, ordered sequence container with a few functional-style helpers:
//! in-place filtering, duplicate removal and left-fold reduction.
//!
//! See [`SeqVec`] for details.

pub mod error;
pub mod seq_vec;

pub use error::{Error, ErrorKind, Result};
pub use seq_vec::SeqVec;
