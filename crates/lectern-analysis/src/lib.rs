//! lectern-analysis: content relevance scoring engine
//!
//! This crate decides whether a page or post represents
//! learning-worthy content. It is the only decision logic in the
//! Lectern reading tracker:
//! - Gate: early negative-signal rejection (blocklist, clickbait
//!   density, length floor, language mismatch)
//! - Signals: content quality, learning indicators, language
//!   relevance, topical relevance, source credibility, and
//!   platform-specific adjustments, each an independent pure function
//! - Blend: fixed-weight sum into one 0-100 learning score plus a
//!   track/no-track decision and a category label
//! - Manual curation: a fixed-score bypass for user-selected items
//!
//! The analyzer performs no I/O, holds no mutable state, and is total
//! over arbitrary string inputs: identical inputs always produce
//! bit-identical results.

pub mod analyzer;
pub mod config;
pub mod gate;
pub mod patterns;
pub mod signals;
pub mod types;

// Re-exports for convenience
pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, BlendWeights, ConfigError};
pub use gate::GateOutcome;
pub use signals::platform::classify_platform;
pub use types::{
    AnalysisInput, AnalysisResult, ContentQuality, CuratedItem, FixedScoreResult,
    LanguageRelevance, LearningIndicators, Platform, PlatformDetails, PlatformSignal,
    RejectReason, SignalBundle, SourceCredibility, Topic, TopicalRelevance,
};
