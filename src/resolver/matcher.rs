//! Fuzzy matching of a search query against ambiguous candidate hits.
//!
//! Everything here is pure - no I/O, no shared state - so the matching
//! policy can be tested exhaustively. The same normalization rule doubles
//! as the cache key rule (see `crate::cache`).

use super::domain::CandidateHit;

/// Normalize a name for comparison: lower-case, collapse every run of
/// non-ASCII-alphanumeric characters to a single space, trim.
///
/// Non-ASCII letters count as separators, so "Björk" becomes "bj rk".
/// Queries and candidate names go through the same rule, so matching stays
/// consistent either way.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Match tier for a candidate, highest wins.
///
/// 3 = exact normalized match, 2 = prefix or whole-word match,
/// 1 = substring anywhere, 0 = no signal. Tier 0 candidates are still
/// eligible: a nonempty hit list always yields a winner, even a bad one.
fn tier(query: &str, candidate: &str) -> u8 {
    if candidate == query {
        3
    } else if candidate.starts_with(query) || candidate.split(' ').any(|word| word == query) {
        2
    } else if candidate.contains(query) {
        1
    } else {
        0
    }
}

/// Pick the most plausible candidate for `query` from search hits.
///
/// Selection maximizes `(tier, -raw_name_length)` - higher tier always
/// wins, and within a tier the shorter (more specific) raw display name
/// wins. On a full tie the leftmost hit in the input order is kept, so the
/// result is deterministic for a given hit order.
///
/// Returns `None` only for an empty hit list.
pub fn pick_best<'a>(query: &str, hits: &'a [CandidateHit]) -> Option<&'a CandidateHit> {
    let query = normalize(query);

    let mut best: Option<(&CandidateHit, (u8, i64))> = None;
    for hit in hits {
        let score = (
            tier(&query, &normalize(&hit.name)),
            -(hit.name.chars().count() as i64),
        );
        // Strictly-greater comparison keeps the leftmost candidate on ties.
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((hit, score)),
        }
    }
    best.map(|(hit, _)| hit)
}
