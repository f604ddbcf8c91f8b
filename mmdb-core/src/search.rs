//! Fuzzy title matching
//!
//! Ranks stored titles against a partial, possibly misspelled query. The
//! score is a normalized Levenshtein ratio scaled to [0, 100], taking the
//! better of a whole-string comparison and a best-window partial comparison
//! so that a short query can still match inside a long title
//! ("godfathr" -> "The Godfather: Part II").

use tracing::debug;

/// Minimum score a candidate must reach to be reported.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Maximum number of candidates reported per query.
pub const DEFAULT_LIMIT: usize = 5;

/// Similarity between a query and a candidate title, in [0, 100].
///
/// Both sides are case-folded first; casing never affects the score.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let q = query.to_lowercase();
    let c = candidate.to_lowercase();
    let whole = strsim::normalized_levenshtein(&q, &c);
    100.0 * whole.max(partial_ratio(&q, &c))
}

/// Best alignment of the shorter string against every same-length window of
/// the longer one. 1.0 means the shorter string appears verbatim.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if short.is_empty() {
        return if long.is_empty() { 1.0 } else { 0.0 };
    }

    let needle: String = short.iter().collect();
    let mut best = 0.0_f64;
    for window in long.windows(short.len()) {
        let haystack: String = window.iter().collect();
        let score = strsim::normalized_levenshtein(&needle, &haystack);
        if score > best {
            best = score;
        }
    }
    best
}

/// Rank `titles` against `query`.
///
/// Returns at most `limit` candidates scoring at least `threshold`, highest
/// score first. The sort is stable, so equal scores keep the candidates'
/// iteration order, making results deterministic for a fixed input.
pub fn search<'a, I>(query: &str, titles: I, threshold: f64, limit: usize) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hits: Vec<(&'a str, f64)> = titles
        .into_iter()
        .filter_map(|title| {
            let score = similarity(query, title);
            (score >= threshold).then_some((title, score))
        })
        .collect();
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));
    hits.truncate(limit);

    debug!("query {query:?} matched {} title(s)", hits.len());
    hits
}
