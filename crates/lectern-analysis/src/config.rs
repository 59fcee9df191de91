//! Analyzer configuration.
//!
//! An explicit immutable struct passed in at construction — never
//! ambient or mutable state — so every analysis stays a pure function
//! of its input. Hosts may deserialize partial config files; missing
//! fields take the documented defaults.

use serde::{Deserialize, Serialize};

/// Errors raised by configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Blend weights must sum to 1.0 (got {0:.4})")]
    WeightSum(f64),

    #[error("Score threshold must be between 0 and 100 (got {0})")]
    ThresholdOutOfRange(u32),

    #[error("Manual admit score must be between 0 and 100 (got {0})")]
    ManualScoreOutOfRange(u32),
}

/// Fixed weights for the five-signal blend.
///
/// The platform-specific signal is informational only and carries no
/// weight here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub content_quality: f64,
    pub learning_indicators: f64,
    pub language_relevance: f64,
    pub topical_relevance: f64,
    pub source_credibility: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            content_quality: 0.30,
            learning_indicators: 0.40,
            language_relevance: 0.10,
            topical_relevance: 0.15,
            source_credibility: 0.05,
        }
    }
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.content_quality
            + self.learning_indicators
            + self.language_relevance
            + self.topical_relevance
            + self.source_credibility
    }
}

/// Configuration for the relevance analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum blended score for `should_track`. Default: 50.
    pub min_score_threshold: u32,
    /// Length floor for the negative-signal gate. Default: 300 words.
    pub min_word_count: usize,
    /// Negative-pattern matches tolerated before the gate blocks.
    /// Default: 3 (blocks on 4 or more).
    pub max_negative_matches: usize,
    /// Target-script share required for the language check. Default: 70%.
    pub target_script_min_percent: f64,
    /// Foreign-script share tolerated by the language check. Default: 5%.
    pub foreign_script_max_percent: f64,
    /// Fixed score assigned by `manual_admit`. Default: 75.
    pub manual_admit_score: u32,
    /// Blend weights; must sum to 1.0.
    pub weights: BlendWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_score_threshold: 50,
            min_word_count: 300,
            max_negative_matches: 3,
            target_script_min_percent: 70.0,
            foreign_script_max_percent: 5.0,
            manual_admit_score: 75,
            weights: BlendWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Checks the invariants the blend depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum(sum));
        }
        if self.min_score_threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(self.min_score_threshold));
        }
        if self.manual_admit_score > 100 {
            return Err(ConfigError::ManualScoreOutOfRange(self.manual_admit_score));
        }
        Ok(())
    }
}
