use crate::candidate::Candidate;
use crate::chars::{matches_smart, CharMatch, Character};
use crate::lcs::longest_common_subsequence_len;
use crate::result::MatchResult;

/// The scoring unit. Word-boundary and continuity contributions are
/// multiples of this, which keeps the linear penalties (candidate length,
/// case changes, match positions) strictly in tie-break territory.
const BASIC: i64 = 1024;

/// A maximal stretch of consecutive candidate positions that each advanced
/// the query pointer.
///
/// Only the starting pair is stored; a run's length is the distance to the
/// next run's `query_start`, which is why the walk appends a sentinel run
/// once the query is exhausted.
#[derive(Debug, Clone, Copy)]
struct Run {
    query_start: usize,
    candidate_start: usize,
}

struct Walk {
    /// Real runs followed by the `(query_len, last_matched + 1)` sentinel.
    runs: Vec<Run>,
    index_sum: i64,
    case_changes: i64,
}

/// Matches `query` against `candidate` and scores the match.
///
/// An empty query matches everything with score zero. A query longer than
/// the candidate, or one whose letters are not all present in the
/// candidate, is reported as a no-match without walking. Otherwise the
/// query must occur as a smart-case subsequence of the candidate.
///
/// The score prefers, in roughly decreasing order of weight: query
/// characters aligned with the candidate's word boundaries, long
/// consecutive stretches of matches, shorter candidates, matches that
/// preserve case, and matches that occur early in the candidate.
pub fn query_match<'a>(
    query: &Candidate,
    candidate: &'a Candidate,
    case_sensitive: bool,
) -> MatchResult<'a> {
    let query_chars = query.characters();
    let candidate_chars = candidate.characters();

    if query_chars.is_empty() {
        return MatchResult::subsequence(candidate.text(), 0);
    }
    if candidate_chars.len() < query_chars.len() {
        return MatchResult::no_match();
    }
    if !candidate.letters_present().contains_all(query.letters_present()) {
        return MatchResult::no_match();
    }

    let Some(mut walk) = walk_subsequence(query_chars, candidate_chars, case_sensitive) else {
        return MatchResult::no_match();
    };
    correct_longest_run(&mut walk.runs, query_chars, candidate_chars, case_sensitive);

    let score = score_match(query, candidate, &walk);
    MatchResult::subsequence(candidate.text(), score)
}

/// Greedy left-to-right subsequence walk.
///
/// Every smart-case match advances the query pointer; a run begins at each
/// match whose predecessor position did not match. Returns `None` when the
/// candidate is exhausted before the query.
fn walk_subsequence(
    query: &[Character],
    candidate: &[Character],
    case_sensitive: bool,
) -> Option<Walk> {
    // One run per query character is the worst case, plus the sentinel.
    let mut runs = Vec::with_capacity(query.len() + 1);
    let mut query_index = 0usize;
    let mut index_sum = 0i64;
    let mut case_changes = 0i64;
    let mut previous_matched = false;

    for (candidate_index, &ch) in candidate.iter().enumerate() {
        let outcome = matches_smart(ch, query[query_index], case_sensitive);
        if !outcome.is_match() {
            previous_matched = false;
            continue;
        }

        if !previous_matched {
            runs.push(Run {
                query_start: query_index,
                candidate_start: candidate_index,
            });
        }
        previous_matched = true;
        index_sum += candidate_index as i64;
        if outcome == CharMatch::CaseChanged {
            case_changes += 1;
        }

        query_index += 1;
        if query_index == query.len() {
            runs.push(Run {
                query_start: query_index,
                candidate_start: candidate_index + 1,
            });
            return Some(Walk {
                runs,
                index_sum,
                case_changes,
            });
        }
    }

    None
}

/// Repairs runs split by greedy matching.
///
/// The walk can attach a query prefix to an early repeated character,
/// splitting what is really one long run: against `"aaabcd"`, the query
/// `"abcd"` walks a run of one (the first `a`) plus a run of three. Extend
/// the longest run leftwards while the preceding pairs still match, and
/// drop the earlier runs it absorbs, so the run above is reported with
/// length four.
fn correct_longest_run(
    runs: &mut Vec<Run>,
    query: &[Character],
    candidate: &[Character],
    case_sensitive: bool,
) {
    let run_count = runs.len() - 1;
    let mut longest = 0usize;
    let mut longest_len = 0usize;
    for i in 0..run_count {
        let len = runs[i + 1].query_start - runs[i].query_start;
        if len > longest_len {
            longest = i;
            longest_len = len;
        }
    }
    if longest_len < 2 || longest == 0 {
        return;
    }

    let mut query_start = runs[longest].query_start;
    let mut candidate_start = runs[longest].candidate_start;
    while query_start > 0
        && candidate_start > 0
        && matches_smart(
            candidate[candidate_start - 1],
            query[query_start - 1],
            case_sensitive,
        )
        .is_match()
    {
        query_start -= 1;
        candidate_start -= 1;
    }
    if query_start == runs[longest].query_start {
        return;
    }

    runs[longest] = Run {
        query_start,
        candidate_start,
    };
    let tail = runs.split_off(longest);
    runs.retain(|run| run.query_start < query_start);
    runs.extend(tail);
}

fn score_match(query: &Candidate, candidate: &Candidate, walk: &Walk) -> i64 {
    let query_len = query.characters().len() as i64;
    let boundary_hits =
        longest_common_subsequence_len(candidate.word_boundary_chars(), query.characters()) as i64;
    let boundary_total = candidate.word_boundary_chars().len() as i64;

    // Word-boundary contribution: each aligned boundary character is worth a
    // full BASIC, unused boundary characters shave a little off.
    let mut word_boundary = if boundary_hits == 0 {
        0.0
    } else {
        (boundary_hits * BASIC - (boundary_total - boundary_hits)) as f64
    };

    let mut continuity = 0.0;
    for pair in walk.runs.windows(2) {
        let run_len = (pair[1].query_start - pair[0].query_start) as i64;
        if run_len < 2 {
            continue;
        }

        // Consecutive matches not already credited to boundary hits earn an
        // arithmetic-series bonus: 0.4·BASIC for the first extra character,
        // growing by 0.3·BASIC per further one.
        let extra = (query_len - boundary_hits).min(run_len - 1);
        if extra > 0 {
            let k = extra as f64;
            word_boundary += BASIC as f64 * (0.4 + 0.3 * k + 0.1) * k / 2.0;
        }

        continuity += (BASIC * run_len * run_len) as f64 / 2.0;
    }

    // The two positive formulations over-count each other when a long run
    // happens to start on word boundaries; take the better one, not the sum.
    let positive = word_boundary.max(continuity) as i64;

    positive - 3 * candidate.characters().len() as i64 - walk.case_changes - walk.index_sum
}
