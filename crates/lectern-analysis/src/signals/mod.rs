//! Independent signal extractors.
//!
//! Each submodule exposes one pure function of the analysis input.
//! None of them consult each other; the blend in `analyzer` is the
//! only place their scores interact.

pub mod credibility;
pub mod language;
pub mod learning;
pub mod platform;
pub mod quality;
pub mod topics;

/// Whitespace tokenization shared by the gate and several extractors:
/// trim, split, drop empty tokens.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::word_count;

    #[test]
    fn word_count_drops_empty_tokens() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t  "), 0);
        assert_eq!(word_count("one  two\nthree"), 3);
    }
}
