//! Negative-signal gate — cheap rejection before the weighted blend.
//!
//! All four checks are computed independently and OR-ed; the reported
//! reason is the first true condition in precedence order: blocked
//! keyword, negative-pattern density, length floor, language mismatch.
//! Gate-rejected content never receives a nonzero score.

use crate::config::AnalyzerConfig;
use crate::patterns::{BLOCKED_KEYWORDS, BLOCKED_MATCHER, NEGATIVE_REGEXES};
use crate::signals::language::analyze_language;
use crate::signals::word_count;
use crate::types::{AnalysisInput, LanguageRelevance, RejectReason};

/// What the gate measured, whether or not it blocked.
#[derive(Debug, Clone)]
pub struct GateOutcome {
    /// `Some` means the analyzer short-circuits to a rejection.
    pub rejection: Option<RejectReason>,
    /// Total negative-pattern occurrences in title+content.
    pub negative_matches: usize,
    /// Word count of the content body.
    pub word_count: usize,
    /// Language measurement; reused by the blend when the gate passes.
    pub language: LanguageRelevance,
}

/// Runs the gate checks against an input.
pub fn evaluate(input: &AnalysisInput, config: &AnalyzerConfig) -> GateOutcome {
    let combined = format!("{}\n{}", input.title, input.content);

    let blocked_keyword = BLOCKED_MATCHER
        .find(&combined)
        .map(|m| BLOCKED_KEYWORDS[m.pattern().as_usize()].to_string());

    let negative_matches: usize = NEGATIVE_REGEXES
        .iter()
        .map(|re| re.find_iter(&combined).count())
        .sum();

    let words = word_count(&input.content);
    let language = analyze_language(&input.content, config);

    let rejection = if let Some(keyword) = blocked_keyword {
        Some(RejectReason::BlockedKeyword(keyword))
    } else if negative_matches > config.max_negative_matches {
        Some(RejectReason::NegativePatterns(negative_matches))
    } else if words < config.min_word_count {
        Some(RejectReason::TooShort {
            words,
            minimum: config.min_word_count,
        })
    } else if !language.is_target_language {
        Some(RejectReason::WrongLanguage)
    } else {
        None
    };

    GateOutcome {
        rejection,
        negative_matches,
        word_count: words,
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    fn long_clean_prose() -> String {
        "The borrow checker enforces aliasing rules at compile time. ".repeat(40)
    }

    #[test]
    fn clean_long_content_passes() {
        let input = AnalysisInput::new("https://example.com", "Notes", long_clean_prose());
        let outcome = evaluate(&input, &config());
        assert!(outcome.rejection.is_none());
        assert!(outcome.word_count >= 300);
    }

    #[test]
    fn blocked_keyword_in_title_rejects() {
        let input = AnalysisInput::new("https://example.com", "Celebrity homes tour", long_clean_prose());
        let outcome = evaluate(&input, &config());
        assert_eq!(
            outcome.rejection,
            Some(RejectReason::BlockedKeyword("celebrity".to_string()))
        );
    }

    #[test]
    fn negative_pattern_density_rejects() {
        let text = format!(
            "Breaking news! A shocking feud goes viral. You won't believe the drama. {}",
            long_clean_prose()
        );
        let input = AnalysisInput::new("https://example.com", "Wire report", text);
        let outcome = evaluate(&input, &config());
        assert!(outcome.negative_matches > 3);
        assert!(matches!(
            outcome.rejection,
            Some(RejectReason::NegativePatterns(_))
        ));
    }

    #[test]
    fn short_content_rejects_with_counts() {
        let input = AnalysisInput::new("https://example.com", "Note", "only a handful of words here");
        let outcome = evaluate(&input, &config());
        assert_eq!(
            outcome.rejection,
            Some(RejectReason::TooShort { words: 6, minimum: 300 })
        );
    }

    #[test]
    fn foreign_script_content_rejects() {
        // Spaced so the token count clears the length floor and the
        // language check is what actually fires.
        let body = "これは 学習 に関する 長い 記事 です。".repeat(60);
        let input = AnalysisInput::new("https://example.com", "記事", body);
        let outcome = evaluate(&input, &config());
        assert_eq!(outcome.rejection, Some(RejectReason::WrongLanguage));
    }

    #[test]
    fn blocked_keyword_outranks_short_content() {
        // Both conditions hold; precedence names the blocklist first.
        let input = AnalysisInput::new("https://example.com", "Celebrity gossip", "tiny");
        let outcome = evaluate(&input, &config());
        assert!(matches!(
            outcome.rejection,
            Some(RejectReason::BlockedKeyword(_))
        ));
    }

    #[test]
    fn density_outranks_short_content() {
        let text = "Breaking: shocking drama feud goes viral, you won't believe it";
        let input = AnalysisInput::new("https://example.com", "", text);
        let outcome = evaluate(&input, &config());
        assert!(outcome.negative_matches > 3);
        assert!(matches!(
            outcome.rejection,
            Some(RejectReason::NegativePatterns(_))
        ));
    }

    #[test]
    fn short_outranks_wrong_language() {
        let input = AnalysisInput::new("https://example.com", "", "短い");
        let outcome = evaluate(&input, &config());
        assert!(matches!(outcome.rejection, Some(RejectReason::TooShort { .. })));
    }
}
