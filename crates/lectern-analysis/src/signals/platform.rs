//! Platform-specific signal — bespoke heuristics for platforms whose
//! generic structure misleads the other signals.
//!
//! Dispatch is a total match over an explicit `Platform` enum chosen
//! by a pure domain classifier, replacing open-ended substring
//! chains. The signal is informational only: it never enters the
//! default weighted blend.

use crate::patterns::{
    ANALYTICAL_MARKERS, EDUCATIONAL_CHANNELS, HYPERLINKS, LEARNING_COMMUNITIES,
    THREAD_MARKERS, TRANSCRIPT_MARKERS,
};
use crate::signals::word_count;
use crate::types::{AnalysisInput, Platform, PlatformDetails, PlatformSignal};

const NEUTRAL_SCORE: u32 = 50;

/// Matches a hostname against a platform label: exact or dot-suffix,
/// never bare substring — so the `x.com` label cannot match
/// `netflix.com`.
fn host_matches(host: &str, label: &str) -> bool {
    host == label || host.ends_with(&format!(".{label}"))
}

/// Classifies a hostname into a platform family. Total: unknown hosts
/// are `Generic`.
pub fn classify_platform(host: &str) -> Platform {
    const VIDEO: &[&str] = &["youtube.com", "youtu.be", "vimeo.com"];
    const AGGREGATOR: &[&str] = &["reddit.com", "news.ycombinator.com", "lobste.rs"];
    const MICROBLOG: &[&str] = &["twitter.com", "x.com", "bsky.app", "threads.net", "mastodon.social"];
    const PROFESSIONAL: &[&str] = &["linkedin.com"];

    if VIDEO.iter().any(|d| host_matches(host, d)) {
        Platform::Video
    } else if AGGREGATOR.iter().any(|d| host_matches(host, d)) {
        Platform::LinkAggregator
    } else if MICROBLOG.iter().any(|d| host_matches(host, d)) {
        Platform::Microblog
    } else if PROFESSIONAL.iter().any(|d| host_matches(host, d)) {
        Platform::ProfessionalNetwork
    } else {
        Platform::Generic
    }
}

/// Runs the handler for the classified platform.
pub fn analyze_platform(input: &AnalysisInput, host: &str) -> PlatformSignal {
    match classify_platform(host) {
        Platform::Generic => PlatformSignal {
            platform: Platform::Generic,
            platform_score: NEUTRAL_SCORE,
            details: PlatformDetails::Generic,
        },
        Platform::Video => video_handler(input),
        Platform::LinkAggregator => aggregator_handler(input),
        Platform::Microblog => microblog_handler(input),
        // Professional-network posts are admitted through manual
        // curation, not the blend; they get the flat neutral score.
        Platform::ProfessionalNetwork => PlatformSignal {
            platform: Platform::ProfessionalNetwork,
            platform_score: NEUTRAL_SCORE,
            details: PlatformDetails::ProfessionalNetwork,
        },
    }
}

fn video_handler(input: &AnalysisInput) -> PlatformSignal {
    let haystack = format!("{}\n{}", input.title, input.content).to_lowercase();

    let is_educational_channel = EDUCATIONAL_CHANNELS
        .iter()
        .any(|ch| haystack.contains(ch));
    let is_short_form =
        input.url.contains("/shorts/") || input.title.to_lowercase().contains("#shorts");
    let has_transcript = TRANSCRIPT_MARKERS.is_match(&input.content);

    let mut score: i32 = 40;
    if is_educational_channel {
        score += 45;
    }
    if is_short_form {
        score -= 25;
    }
    if has_transcript {
        score += 10;
    }

    PlatformSignal {
        platform: Platform::Video,
        platform_score: score.clamp(0, 100) as u32,
        details: PlatformDetails::Video {
            is_educational_channel,
            is_short_form,
            has_transcript,
        },
    }
}

fn aggregator_handler(input: &AnalysisInput) -> PlatformSignal {
    let url_lower = input.url.to_lowercase();

    let is_learning_community = LEARNING_COMMUNITIES
        .iter()
        .any(|community| url_lower.contains(community));
    let has_substantial_discussion =
        word_count(&input.content) >= 400 && ANALYTICAL_MARKERS.is_match(&input.content);

    let mut score: i32 = 40;
    if is_learning_community {
        score += 30;
    }
    if has_substantial_discussion {
        score += 20;
    }

    PlatformSignal {
        platform: Platform::LinkAggregator,
        platform_score: score.clamp(0, 100) as u32,
        details: PlatformDetails::LinkAggregator {
            is_learning_community,
            has_substantial_discussion,
        },
    }
}

fn microblog_handler(input: &AnalysisInput) -> PlatformSignal {
    let combined = format!("{}\n{}", input.title, input.content);

    let is_thread = THREAD_MARKERS.is_match(&combined);
    let has_outbound_links = HYPERLINKS.is_match(&input.content);
    let is_very_short = word_count(&input.content) < 50;

    let mut score: i32 = 30;
    if is_thread {
        score += 35;
    }
    if has_outbound_links {
        score += 10;
    }
    if is_very_short {
        score -= 30;
    }

    PlatformSignal {
        platform: Platform::Microblog,
        platform_score: score.clamp(0, 100) as u32,
        details: PlatformDetails::Microblog {
            is_thread,
            has_outbound_links,
            is_very_short,
        },
    }
}
