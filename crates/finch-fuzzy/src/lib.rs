//! Fuzzy subsequence matching and ranking for identifier completion.
//!
//! The crate decides whether a short query matches a candidate identifier
//! and assigns the match a comparable score. Hitting word boundaries
//! (`"fbq"` against `FooBarQux`) and long consecutive stretches dominate
//! the score; candidate length, case conversions, and late match positions
//! act as tie-breakers. Candidates are precomputed once ([`Candidate::new`])
//! and scored many times ([`query_match`]).
//!
//! Matching is byte-oriented and ASCII-only: bytes outside the printable
//! ASCII range are opaque characters that never satisfy a class predicate.
//! Callers are expected to filter such identifiers upstream.

#![forbid(unsafe_code)]

mod bitset;
mod candidate;
mod chars;
mod lcs;
mod matcher;
mod result;

pub use bitset::{LetterBitset, ALPHABET_SLOTS};
pub use candidate::Candidate;
pub use chars::{matches_smart, CharMatch, Character};
pub use matcher::query_match;
pub use result::MatchResult;
