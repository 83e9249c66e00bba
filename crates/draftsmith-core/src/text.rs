//! Reading statistics shown next to each generated section.

/// Average adult reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 225;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words`, rounded up. Zero words is zero minutes.
pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

pub fn has_citations(footnotes: &str) -> bool {
    !footnotes.trim().is_empty()
}
