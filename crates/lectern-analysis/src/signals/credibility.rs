//! Source credibility signal — publisher trustworthiness from static
//! allow-lists. Absence of credibility data is not penalized.

use url::Url;

use crate::patterns::{EDUCATIONAL_PLATFORMS, HIGH_CREDIBILITY_DOMAINS};
use crate::types::SourceCredibility;

const HIGH_CREDIBILITY_SCORE: u32 = 100;
const EDUCATIONAL_SCORE: u32 = 80;
const NEUTRAL_SCORE: u32 = 50;

/// Extracts the hostname, falling back to the raw string for
/// unparseable input. Never fails.
pub fn extract_domain(raw_url: &str) -> String {
    match Url::parse(raw_url) {
        Ok(url) => url
            .host_str()
            .map(|h| h.to_ascii_lowercase())
            .unwrap_or_else(|| raw_url.trim().to_ascii_lowercase()),
        Err(_) => raw_url.trim().to_ascii_lowercase(),
    }
}

/// Looks the hostname up against the credibility allow-lists.
pub fn analyze_credibility(raw_url: &str) -> SourceCredibility {
    let domain = extract_domain(raw_url);

    let is_high_credibility = HIGH_CREDIBILITY_DOMAINS
        .iter()
        .any(|d| domain.contains(d));
    let is_educational = domain.contains(".edu")
        || domain.contains(".org")
        || EDUCATIONAL_PLATFORMS.iter().any(|d| domain.contains(d));

    let credibility_score = if is_high_credibility {
        HIGH_CREDIBILITY_SCORE
    } else if is_educational {
        EDUCATIONAL_SCORE
    } else {
        NEUTRAL_SCORE
    };

    SourceCredibility {
        domain,
        is_high_credibility,
        is_educational,
        credibility_score,
    }
}
