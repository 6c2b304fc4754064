//! Local extractive summarizer, the fallback when the remote provider is
//! unavailable, unconfigured, or failing.
//!
//! Selects up to three sentences by a fixed length/position score. The whole
//! path is deterministic and infallible, so degradation from the remote
//! provider can never itself fail a summarization request.

use std::cmp::Ordering;

/// Inputs at or below this word count are already summary-length and are
/// returned unchanged (after whitespace normalization).
pub const PASSTHROUGH_WORD_LIMIT: usize = 30;

/// Number of top-scored sentences included in the summary.
pub const MAX_SENTENCES: usize = 3;

/// Upper bound on summary length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 150;

/// Prefix length used when the text has no sentence punctuation at all.
const PREFIX_CHARS: usize = 100;

/// Word-count band considered ideal for an extracted sentence.
const IDEAL_MIN_WORDS: usize = 10;
const IDEAL_MAX_WORDS: usize = 25;

/// Produce an extractive summary of `text`.
///
/// Deterministic for a given input and total over all strings. Sentences
/// are split on runs of `.`, `!`, `?`, scored by length and position, and
/// the top three are rejoined in score-rank order. Results longer than
/// [`MAX_SUMMARY_CHARS`] are truncated at a character count, which can cut
/// mid-word; that is an accepted limitation of the fallback path.
pub fn extractive_summary(text: &str) -> String {
    let normalized = normalize_whitespace(text);
    if normalized.split_whitespace().count() <= PASSTHROUGH_WORD_LIMIT {
        return normalized;
    }

    let sentences: Vec<&str> = normalized
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    // No sentence punctuation anywhere: fall back to a fixed-length prefix.
    if sentences.is_empty() {
        let prefix: String = normalized.chars().take(PREFIX_CHARS).collect();
        return format!("{prefix}...");
    }

    let total = sentences.len();
    let mut ranked: Vec<(f64, &str)> = sentences
        .iter()
        .enumerate()
        .map(|(index, s)| (score_sentence(s, index, total), *s))
        .collect();

    // Stable sort: equal scores keep original document order, so the output
    // is reproducible.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let top: Vec<&str> = ranked
        .iter()
        .take(MAX_SENTENCES.min(total))
        .map(|(_, s)| *s)
        .collect();
    let mut summary = top.join(". ");

    if summary.chars().count() > MAX_SUMMARY_CHARS {
        summary = summary.chars().take(MAX_SUMMARY_CHARS - 3).collect();
        summary.push_str("...");
    }

    if !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }
    summary
}

/// Score one candidate sentence.
///
/// Length score is 1.0 inside the 10-25 word band, 0.5 outside. Position
/// score is 0.8 for the first or last sentence, 0.6 otherwise.
fn score_sentence(sentence: &str, index: usize, total: usize) -> f64 {
    let words = sentence.split_whitespace().count();
    let length_score = if (IDEAL_MIN_WORDS..=IDEAL_MAX_WORDS).contains(&words) {
        1.0
    } else {
        0.5
    };
    let position_score = if index == 0 || index + 1 == total {
        0.8
    } else {
        0.6
    };
    length_score + position_score
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
