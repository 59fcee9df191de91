//! Property tests: the analyzer is a total, deterministic, bounded
//! function over arbitrary strings.

use lectern_analysis::{AnalysisInput, Analyzer};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Never panics, and the blended score stays in 0-100.
    #[test]
    fn score_is_bounded(url in ".{0,120}", title in ".{0,200}", content in ".{0,2000}") {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(&AnalysisInput::new(url, title, content));
        prop_assert!(result.learning_score <= 100);
    }

    /// Every sub-score respects its documented range.
    #[test]
    fn sub_scores_are_bounded(title in ".{0,200}", content in ".{0,2000}") {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(&AnalysisInput::new("https://example.com", title, content));
        let s = &result.signals;
        if let Some(q) = &s.content_quality {
            prop_assert!(q.quality_score <= 100);
        }
        if let Some(l) = &s.learning_indicators {
            prop_assert!(l.learning_score <= 100);
        }
        if let Some(lang) = &s.language_relevance {
            prop_assert!(lang.language_score == 0 || lang.language_score == 100);
            prop_assert!((0.0..=100.0).contains(&lang.target_language_char_percent));
            prop_assert!((0.0..=100.0).contains(&lang.other_script_char_percent));
        }
        if let Some(t) = &s.topical_relevance {
            prop_assert!(t.topical_relevance_score <= 100);
        }
        if let Some(c) = &s.source_credibility {
            prop_assert!(matches!(c.credibility_score, 50 | 80 | 100));
        }
        if let Some(p) = &s.platform {
            prop_assert!(p.platform_score <= 100);
        }
    }

    /// Identical inputs produce identical results.
    #[test]
    fn analysis_is_pure(url in ".{0,120}", title in ".{0,200}", content in ".{0,2000}") {
        let analyzer = Analyzer::new();
        let input = AnalysisInput::new(url, title, content);
        prop_assert_eq!(analyzer.analyze(&input), analyzer.analyze(&input));
    }

    /// Gate rejections always score zero and never claim a category.
    #[test]
    fn gated_results_score_zero(title in ".{0,200}", content in ".{0,400}") {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(&AnalysisInput::new("https://example.com", title, content));
        if result.signals.content_quality.is_none() {
            prop_assert_eq!(result.learning_score, 0);
            prop_assert!(!result.should_track);
            prop_assert_eq!(result.category.as_str(), "other");
        }
    }

    /// The track decision is exactly the threshold comparison.
    #[test]
    fn decision_matches_threshold(title in "[a-z ]{0,200}", content in "[a-z ]{0,2000}") {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(&AnalysisInput::new("https://example.com", title, content));
        let threshold = analyzer.config().min_score_threshold;
        prop_assert_eq!(result.should_track, result.learning_score >= threshold);
    }
}
