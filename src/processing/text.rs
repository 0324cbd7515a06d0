//! Character/word counts and word frequencies for free text.

use tracing::info;

use super::words::{tokenize, top_words};
use crate::types::TextMetrics;

/// Default number of ranked words in [`TextMetrics`].
pub const TEXT_TOP_N: usize = 20;
/// Default minimum ranked word length for free text.
pub const TEXT_MIN_WORD_LEN: usize = 5;

/// Compute [`TextMetrics`] with the default limits ([`TEXT_TOP_N`], [`TEXT_MIN_WORD_LEN`]).
pub fn text_metrics(text: &str) -> TextMetrics {
    text_metrics_with(text, TEXT_TOP_N, TEXT_MIN_WORD_LEN)
}

/// Compute [`TextMetrics`], ranking the `top_n` most common words of at least `min_word_len`
/// characters. `word_count` counts every token regardless of length.
pub fn text_metrics_with(text: &str, top_n: usize, min_word_len: usize) -> TextMetrics {
    let tokens = tokenize(text);
    let metrics = TextMetrics {
        characters: text.chars().count(),
        word_count: tokens.len(),
        top_words: top_words(&tokens, min_word_len, top_n),
    };
    info!(
        characters = metrics.characters,
        words = metrics.word_count,
        "Text metrics computed"
    );
    metrics
}
