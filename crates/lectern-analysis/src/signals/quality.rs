//! Content quality signal — rewards substantial, well-organized writing.

use crate::patterns::{CODE_MARKERS, HYPERLINKS, REFERENCE_VOCAB, STRUCTURE_MARKERS};
use crate::signals::word_count;
use crate::types::ContentQuality;

/// Words per minute assumed for reading-time estimation.
const READING_WPM: usize = 250;

/// Measures structural quality of the content body.
///
/// Scoring: word-count tier up to 30, reading-time tier up to 20,
/// +15 code examples, +10 structure, +15 references; capped at 100.
/// Links are recorded but carry no score.
pub fn analyze_quality(content: &str) -> ContentQuality {
    let words = word_count(content);
    let reading_time_minutes = words.div_ceil(READING_WPM);

    let has_code_examples = CODE_MARKERS.is_match(content);
    let has_structure = STRUCTURE_MARKERS.is_match(content);
    let has_references = REFERENCE_VOCAB.is_match(content);
    let has_links = HYPERLINKS.is_match(content);

    let mut score: u32 = 0;
    score += match words {
        w if w >= 1000 => 30,
        w if w >= 500 => 20,
        w if w >= 300 => 10,
        _ => 0,
    };
    score += match reading_time_minutes {
        m if m >= 10 => 20,
        m if m >= 5 => 15,
        m if m >= 3 => 10,
        _ => 0,
    };
    if has_code_examples {
        score += 15;
    }
    if has_structure {
        score += 10;
    }
    if has_references {
        score += 15;
    }

    ContentQuality {
        word_count: words,
        reading_time_minutes,
        has_code_examples,
        has_structure,
        has_references,
        has_links,
        quality_score: score.min(100),
    }
}
