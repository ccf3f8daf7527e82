use std::collections::HashSet;

use finch_fuzzy::{query_match, Candidate};

use crate::config::CompleterConfig;

/// An identifier ranked against one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedIdentifier<'a> {
    pub text: &'a str,
    pub score: i64,
}

/// In-memory identifier database plus ranking front-end.
///
/// Identifiers are stored once, deduplicated, in insertion order; each is
/// precomputed into a [`Candidate`] when added. A query computes its own
/// candidate form once, pre-filters the store with the letter bitset,
/// scores the survivors, and returns the matches best-first. Equal scores
/// keep insertion order.
///
/// The store is append-only: candidates are never mutated or removed, so
/// scoring borrows them freely.
#[derive(Debug, Default)]
pub struct IdentifierCompleter {
    config: CompleterConfig,
    candidates: Vec<Candidate>,
    seen: HashSet<Box<str>>,
}

impl IdentifierCompleter {
    pub fn new() -> Self {
        Self::with_config(CompleterConfig::default())
    }

    pub fn with_config(config: CompleterConfig) -> Self {
        Self {
            config,
            candidates: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Adds one identifier to the database.
    ///
    /// Returns false when the identifier was already present or contains
    /// bytes outside printable ASCII; such identifiers are expected to be
    /// discarded before they reach the matcher, and the completer is the
    /// last place to do so.
    pub fn insert(&mut self, identifier: &str) -> bool {
        if !is_printable(identifier) {
            tracing::debug!(identifier, "discarding non-printable identifier");
            return false;
        }
        if self.seen.contains(identifier) {
            return false;
        }
        self.seen.insert(identifier.into());
        self.candidates.push(Candidate::new(identifier));
        true
    }

    pub fn extend<'i>(&mut self, identifiers: impl IntoIterator<Item = &'i str>) {
        for identifier in identifiers {
            self.insert(identifier);
        }
    }

    /// Ranks every stored identifier matching `query`, best first.
    ///
    /// An empty query completes to nothing: the matcher itself treats an
    /// empty query as a universal zero-score match, but offering the whole
    /// database is useless to a caller.
    pub fn ranked(&self, query: &str) -> Vec<RankedIdentifier<'_>> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = Candidate::new(query);
        tracing::trace!(
            query = query.text(),
            candidates = self.candidates.len(),
            "ranking identifiers"
        );

        let mut ranked = Vec::new();
        for candidate in &self.candidates {
            // The subset test rejects most candidates without running the
            // scorer.
            if !candidate
                .letters_present()
                .contains_all(query.letters_present())
            {
                continue;
            }
            let result = query_match(&query, candidate, self.config.case_sensitive);
            if result.is_subsequence() {
                ranked.push(RankedIdentifier {
                    text: candidate.text(),
                    score: result.score(),
                });
            }
        }

        // Stable sort over the insertion-ordered store keeps ties in
        // insertion order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = self.config.max_results {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Convenience over [`IdentifierCompleter::ranked`] returning just the
    /// identifier texts.
    pub fn completions(&self, query: &str) -> Vec<&str> {
        self.ranked(query)
            .into_iter()
            .map(|ranked| ranked.text)
            .collect()
    }
}

fn is_printable(identifier: &str) -> bool {
    identifier.bytes().all(|byte| matches!(byte, 0x20..=0x7e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_duplicates() {
        let mut completer = IdentifierCompleter::new();
        assert!(completer.insert("foobar"));
        assert!(!completer.insert("foobar"));
        assert_eq!(completer.len(), 1);
    }

    #[test]
    fn insert_rejects_non_printable_identifiers() {
        let mut completer = IdentifierCompleter::new();
        assert!(!completer.insert("uni\u{a2}\u{10348}d\u{20ac}"));
        assert!(!completer.insert("\x01\x1f\x7f"));
        assert!(!completer.insert("tab\there"));
        assert!(completer.is_empty());
    }

    #[test]
    fn empty_query_completes_to_nothing() {
        let mut completer = IdentifierCompleter::new();
        completer.insert("foobar");
        assert!(completer.completions("").is_empty());
    }

    #[test]
    fn ranked_exposes_scores_best_first() {
        let mut completer = IdentifierCompleter::new();
        completer.extend(["afoobar", "foobar"]);

        let ranked = completer.ranked("fbr");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, "foobar");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let mut completer = IdentifierCompleter::new();
        completer.extend(["aax", "aay", "aaz"]);

        // Identical structure except for the unmatched trailing letter, so
        // all three scores tie.
        let ranked = completer.ranked("aa");
        let scores: Vec<i64> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores[0], scores[1]);
        assert_eq!(scores[1], scores[2]);
        assert_eq!(completer.completions("aa"), vec!["aax", "aay", "aaz"]);
    }

    #[test]
    fn max_results_truncates_after_ranking() {
        let config = CompleterConfig {
            max_results: Some(1),
            ..CompleterConfig::default()
        };
        let mut completer = IdentifierCompleter::with_config(config);
        completer.extend(["afoobar", "foobar"]);

        assert_eq!(completer.completions("fbr"), vec!["foobar"]);
    }

    #[test]
    fn case_insensitive_mode_folds_uppercase_queries() {
        let mut smart = IdentifierCompleter::new();
        smart.insert("foobar");
        assert!(smart.completions("FBR").is_empty());

        let config = CompleterConfig {
            case_sensitive: false,
            ..CompleterConfig::default()
        };
        let mut folded = IdentifierCompleter::with_config(config);
        folded.insert("foobar");
        assert_eq!(folded.completions("FBR"), vec!["foobar"]);
    }
}
