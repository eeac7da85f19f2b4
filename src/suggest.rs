//! Close-match lookup for mistyped variable names.
//!
//! When a caller supplies a key with no matching default, the engine offers
//! the nearest known names as hints. Similarity is the char-level diff ratio
//! from the `similar` crate, with the classic ≥ 0.6 cutoff and at most three
//! results.

use similar::TextDiff;

/// Minimum similarity ratio for a name to count as a close match.
const CUTOFF: f32 = 0.6;

/// Maximum number of matches returned.
const MAX_MATCHES: usize = 3;

/// Names from `known` judged closest to `candidate`, best first.
///
/// Returns at most [`MAX_MATCHES`] names whose similarity ratio against the
/// candidate clears [`CUTOFF`]; ties are broken alphabetically. Empty when
/// nothing is close enough.
#[must_use]
pub fn close_matches<'a, I>(candidate: &str, known: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f32, &str)> = known
        .into_iter()
        .filter_map(|name| {
            let ratio = TextDiff::from_chars(candidate, name).ratio();
            (ratio >= CUTOFF).then_some((ratio, name))
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(_, name)| name.to_string())
        .collect()
}
