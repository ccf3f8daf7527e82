//! In-memory identifier completion on top of `finch-fuzzy`.
//!
//! [`IdentifierCompleter`] owns a deduplicated, insertion-ordered store of
//! precomputed [`finch_fuzzy::Candidate`] records and answers ranked
//! completion queries over it: pre-filter with the letter bitset, score the
//! survivors, sort best-first.

#![forbid(unsafe_code)]

mod completer;
mod config;

pub use completer::{IdentifierCompleter, RankedIdentifier};
pub use config::CompleterConfig;
