//! Error types and result definitions for the csv2sql tool.
//!
//! All crates in the workspace share the single [`Error`] enum and the
//! [`Result<T>`] alias so failures propagate across crate boundaries with
//! the `?` operator and callers can match on specific variants. Failures are
//! scoped per input file: the batch layer records them and moves on to the
//! next file rather than aborting the run.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
