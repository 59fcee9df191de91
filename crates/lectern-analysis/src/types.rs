//! Boundary types for the relevance analyzer.
//!
//! Everything here is a plain value: produced fresh on every call,
//! serializable for the extension/backend boundary, never mutated by
//! the analyzer after construction.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Raw input for one page or post, as extracted upstream.
///
/// `content` is plain text; the analyzer does no markup stripping
/// beyond its own pattern detection. Empty strings are valid input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Absolute URL when available. Malformed URLs degrade credibility
    /// and platform detection to neutral defaults, never fail.
    pub url: String,
    /// Page/post title. May be empty.
    pub title: String,
    /// Extracted body text. May be empty.
    pub content: String,
}

impl AnalysisInput {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Fixed topic taxonomy used for scoring and newsletter sectioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Technology,
    Science,
    Education,
    Business,
    FutureTrends,
}

impl Topic {
    /// Declaration order doubles as the tie-break order: on equal
    /// topic scores the earlier topic wins.
    pub const ALL: [Topic; 5] = [
        Topic::Technology,
        Topic::Science,
        Topic::Education,
        Topic::Business,
        Topic::FutureTrends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Technology => "technology",
            Topic::Science => "science",
            Topic::Education => "education",
            Topic::Business => "business",
            Topic::FutureTrends => "future-trends",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural quality measurements for the content body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuality {
    /// Whitespace-delimited non-empty tokens in `content`.
    pub word_count: usize,
    /// ceil(word_count / 250); 0 for empty content.
    pub reading_time_minutes: usize,
    pub has_code_examples: bool,
    pub has_structure: bool,
    pub has_references: bool,
    /// Recorded but unscored.
    pub has_links: bool,
    /// 0-100.
    pub quality_score: u32,
}

/// Lexical evidence of educational/analytical intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningIndicators {
    /// Learning patterns that matched at least once in title+content.
    pub matched_pattern_count: usize,
    /// Distinct pattern-group tags that matched, in table order.
    pub matched_groups: SmallVec<[String; 4]>,
    pub has_question_answer_format: bool,
    pub has_step_by_step: bool,
    /// Total whole-word occurrences of technical vocabulary.
    pub technical_term_count: usize,
    pub has_actionable_verbs: bool,
    /// 0-100.
    pub learning_score: u32,
}

/// Script-share measurement for the configured target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRelevance {
    pub is_target_language: bool,
    /// Share of alphabetic characters in the target (Latin) script.
    pub target_language_char_percent: f64,
    /// Share of alphabetic characters in configured foreign scripts.
    pub other_script_char_percent: f64,
    /// Binary by design: 100 if target language, else 0.
    pub language_score: u32,
}

/// Topic classification and match strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicalRelevance {
    /// Raw per-topic scores (+1 per content match, +2 per title match).
    pub score_per_topic: FxHashMap<Topic, u32>,
    /// Strict-max topic; ties broken by `Topic::ALL` order.
    pub primary_topic: Option<Topic>,
    /// min(100, max_topic_score * 20); 0 if nothing matched.
    pub topical_relevance_score: u32,
}

/// Publisher trustworthiness from static allow-lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCredibility {
    /// Extracted hostname, or the raw URL string as fallback.
    pub domain: String,
    pub is_high_credibility: bool,
    pub is_educational: bool,
    /// 100 high-credibility, 80 educational, 50 neutral.
    pub credibility_score: u32,
}

/// Platform family for bespoke heuristics, chosen by a pure domain
/// classifier. Exhaustive by construction; unknown hosts are Generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Generic,
    Video,
    LinkAggregator,
    Microblog,
    ProfessionalNetwork,
}

/// Platform-dependent sub-measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PlatformDetails {
    Generic,
    Video {
        is_educational_channel: bool,
        is_short_form: bool,
        has_transcript: bool,
    },
    LinkAggregator {
        is_learning_community: bool,
        has_substantial_discussion: bool,
    },
    Microblog {
        is_thread: bool,
        has_outbound_links: bool,
        is_very_short: bool,
    },
    /// Scored flat-neutral; the admission path for these posts is
    /// manual curation, which bypasses automatic scoring entirely.
    ProfessionalNetwork,
}

/// Platform-specific adjustment. Informational only: not part of the
/// default weighted blend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSignal {
    pub platform: Platform,
    /// 0-100.
    pub platform_score: u32,
    pub details: PlatformDetails,
}

/// Aggregate of the independent signal measurements.
///
/// A field is `None` when its extractor never ran — gate-rejected
/// content only carries the signals the gate itself computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalBundle {
    pub content_quality: Option<ContentQuality>,
    pub learning_indicators: Option<LearningIndicators>,
    pub language_relevance: Option<LanguageRelevance>,
    pub topical_relevance: Option<TopicalRelevance>,
    pub source_credibility: Option<SourceCredibility>,
    pub platform: Option<PlatformSignal>,
}

/// The sole output contract of the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub should_track: bool,
    /// 0-100 blended score; always 0 for gate-rejected content.
    pub learning_score: u32,
    /// Primary topic label, or `"other"` when no topic matched.
    pub category: String,
    pub reason: String,
    pub signals: SignalBundle,
}

/// Why the negative-signal gate rejected an input.
///
/// Variant order is the reporting precedence: when several conditions
/// hold, the earliest one names the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// A blocklist keyword appeared in title or content.
    BlockedKeyword(String),
    /// Negative lexical patterns matched more than the allowed count.
    NegativePatterns(usize),
    /// Content below the configured minimum word count.
    TooShort { words: usize, minimum: usize },
    /// Script shares outside the target-language thresholds.
    WrongLanguage,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BlockedKeyword(kw) => write!(f, "Blocked keyword: {kw}"),
            RejectReason::NegativePatterns(n) => {
                write!(f, "Too many negative signals ({n} matches)")
            }
            RejectReason::TooShort { words, minimum } => {
                write!(f, "Content too short ({words} words, minimum {minimum})")
            }
            RejectReason::WrongLanguage => f.write_str("Content not in target language"),
        }
    }
}

/// An item explicitly admitted by the user, outside the scoring blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedItem {
    pub url: String,
    pub title: String,
    /// Caller-chosen category; `None` files the item under "other".
    pub category: Option<Topic>,
}

/// Result of manual curation: a fixed elevated score, no signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedScoreResult {
    pub learning_score: u32,
    pub category: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_labels_are_kebab_case() {
        assert_eq!(Topic::Technology.as_str(), "technology");
        assert_eq!(Topic::FutureTrends.as_str(), "future-trends");
        assert_eq!(
            serde_json::to_string(&Topic::FutureTrends).unwrap(),
            "\"future-trends\""
        );
    }

    #[test]
    fn topic_order_is_the_tie_break_order() {
        assert_eq!(Topic::ALL[0], Topic::Technology);
        assert_eq!(Topic::ALL[4], Topic::FutureTrends);
    }

    #[test]
    fn reject_reason_messages() {
        assert_eq!(
            RejectReason::BlockedKeyword("celebrity".into()).to_string(),
            "Blocked keyword: celebrity"
        );
        assert_eq!(
            RejectReason::TooShort { words: 120, minimum: 300 }.to_string(),
            "Content too short (120 words, minimum 300)"
        );
    }
}
