//! Word count and reading-time estimation for note and summary text.

/// Average silent reading speed used for the estimate, in words per minute.
pub const WORDS_PER_MINUTE: i32 = 200;

/// Derived metrics for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TextMetrics {
    /// Number of whitespace-delimited words.
    pub word_count: i32,
    /// Estimated reading time, rounded up to whole minutes.
    pub reading_time_minutes: i32,
}

impl TextMetrics {
    /// Reading time at seconds granularity, for stores that keep seconds.
    pub fn reading_time_seconds(&self) -> i32 {
        self.reading_time_minutes * 60
    }
}

/// Compute word count and estimated reading time for arbitrary text.
///
/// Words are maximal whitespace-delimited tokens; empty or whitespace-only
/// input counts zero words and zero minutes. Reading time is
/// `ceil(words / 200)`. Total over all string inputs.
pub fn compute(text: &str) -> TextMetrics {
    let word_count = text.split_whitespace().count() as i32;
    let reading_time_minutes = (word_count + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
    TextMetrics {
        word_count,
        reading_time_minutes,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_metrics() {
        let metrics = compute("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.reading_time_minutes, 0);
        assert_eq!(metrics.reading_time_seconds(), 0);
    }

    #[test]
    fn whitespace_only_text_has_zero_metrics() {
        let metrics = compute("   \t\n  ");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.reading_time_minutes, 0);
    }

    #[test]
    fn ten_words_read_in_one_minute() {
        let metrics = compute("a b c d e f g h i j");
        assert_eq!(metrics.word_count, 10);
        assert_eq!(metrics.reading_time_minutes, 1);
        assert_eq!(metrics.reading_time_seconds(), 60);
    }

    #[test]
    fn reading_time_rounds_up_past_one_page() {
        let text = "word ".repeat(201);
        let metrics = compute(&text);
        assert_eq!(metrics.word_count, 201);
        assert_eq!(metrics.reading_time_minutes, 2);
    }

    #[test]
    fn exactly_two_hundred_words_is_one_minute() {
        let text = "word ".repeat(200);
        assert_eq!(compute(&text).reading_time_minutes, 1);
    }

    #[test]
    fn irregular_whitespace_counts_once_per_token() {
        let metrics = compute("  one\t\ttwo \n three  ");
        assert_eq!(metrics.word_count, 3);
    }
}
