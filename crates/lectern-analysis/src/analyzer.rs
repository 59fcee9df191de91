//! The relevance analyzer: gate, signal extraction, weighted blend,
//! and the track/no-track decision.
//!
//! Per invocation there are exactly two paths: `gated` (terminal
//! early return, score 0) and `scored` (full blend). No state
//! persists across calls; the analyzer is safe to share and invoke
//! concurrently.

use tracing::debug;

use crate::config::{AnalyzerConfig, ConfigError};
use crate::gate;
use crate::signals::credibility::{analyze_credibility, extract_domain};
use crate::signals::learning::analyze_learning;
use crate::signals::platform::analyze_platform;
use crate::signals::quality::analyze_quality;
use crate::signals::topics::analyze_topics;
use crate::types::{
    AnalysisInput, AnalysisResult, CuratedItem, FixedScoreResult, SignalBundle,
};

const TRACKED_REASON: &str = "High learning value";
const UNTRACKED_REASON: &str = "Low learning value";
const CURATED_REASON: &str = "Manually curated";
const OTHER_CATEGORY: &str = "other";

/// Content relevance analyzer. Holds only immutable configuration;
/// every call is an independent pure computation.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with default configuration (always valid).
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Analyzer with host-supplied configuration, validated up front.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scores one page/post and decides whether it is worth tracking.
    ///
    /// Total over arbitrary strings: malformed URLs, empty titles and
    /// empty content all degrade to clean rejections or neutral
    /// scores, never errors.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let outcome = gate::evaluate(input, &self.config);

        if let Some(reason) = outcome.rejection {
            debug!(url = %input.url, %reason, "rejected by negative-signal gate");
            return AnalysisResult {
                should_track: false,
                learning_score: 0,
                category: OTHER_CATEGORY.to_string(),
                reason: reason.to_string(),
                signals: SignalBundle {
                    language_relevance: Some(outcome.language),
                    ..SignalBundle::default()
                },
            };
        }

        let quality = analyze_quality(&input.content);
        let learning = analyze_learning(&input.title, &input.content);
        let language = outcome.language;
        let topical = analyze_topics(&input.title, &input.content);
        let credibility = analyze_credibility(&input.url);
        let platform = analyze_platform(input, &extract_domain(&input.url));

        let w = &self.config.weights;
        let weighted = f64::from(quality.quality_score) * w.content_quality
            + f64::from(learning.learning_score) * w.learning_indicators
            + f64::from(language.language_score) * w.language_relevance
            + f64::from(topical.topical_relevance_score) * w.topical_relevance
            + f64::from(credibility.credibility_score) * w.source_credibility;
        let learning_score = weighted.round() as u32;

        let should_track = learning_score >= self.config.min_score_threshold;
        let category = topical
            .primary_topic
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());

        debug!(
            url = %input.url,
            score = learning_score,
            category = %category,
            should_track,
            "scored"
        );

        AnalysisResult {
            should_track,
            learning_score,
            category,
            reason: if should_track { TRACKED_REASON } else { UNTRACKED_REASON }.to_string(),
            signals: SignalBundle {
                content_quality: Some(quality),
                learning_indicators: Some(learning),
                language_relevance: Some(language),
                topical_relevance: Some(topical),
                source_credibility: Some(credibility),
                platform: Some(platform),
            },
        }
    }

    /// Admits a user-selected item with the fixed configured score,
    /// bypassing the blend entirely. Manually curated items never run
    /// through `analyze`; the scoring engine's contract stays a pure
    /// function of text.
    pub fn manual_admit(&self, item: &CuratedItem) -> FixedScoreResult {
        debug!(url = %item.url, "manually admitted");
        FixedScoreResult {
            learning_score: self.config.manual_admit_score,
            category: item
                .category
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| OTHER_CATEGORY.to_string()),
            reason: CURATED_REASON.to_string(),
        }
    }
}
