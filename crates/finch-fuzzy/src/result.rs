use std::cmp::Ordering;

/// The outcome of matching one query against one candidate.
///
/// Holds a non-owning reference to the candidate's text; the candidate
/// store must outlive the results of a ranking pass. A no-match result
/// carries the minimum score so it sorts after every real match.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    is_subsequence: bool,
    text: Option<&'a str>,
    score: i64,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn no_match() -> Self {
        Self {
            is_subsequence: false,
            text: None,
            score: i64::MIN,
        }
    }

    pub(crate) fn subsequence(text: &'a str, score: i64) -> Self {
        Self {
            is_subsequence: true,
            text: Some(text),
            score,
        }
    }

    /// Whether the query's characters occur, in order, in the candidate.
    pub fn is_subsequence(&self) -> bool {
        self.is_subsequence
    }

    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Results order best-first: a higher score compares as less, so sorting
/// ascending yields the ranking. Equality is score equality; callers that
/// need deterministic ties sort stably over an insertion-ordered store.
impl PartialEq for MatchResult<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for MatchResult<'_> {}

impl Ord for MatchResult<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }
}

impl PartialOrd for MatchResult<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
