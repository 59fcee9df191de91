//! Topical relevance signal — classifies content into the fixed topic
//! taxonomy and measures match strength.

use rustc_hash::FxHashMap;

use crate::patterns::TOPIC_MATCHER;
use crate::types::{Topic, TopicalRelevance};

/// Score multiplier: five raw points saturate the 0-100 scale.
const POINTS_TO_PERCENT: u32 = 20;

fn accumulate(text: &str, weight: u32, scores: &mut [u32; Topic::ALL.len()]) {
    let (matcher, topics) = &*TOPIC_MATCHER;
    for m in matcher.find_iter(text) {
        let topic = topics[m.pattern().as_usize()];
        let idx = Topic::ALL.iter().position(|t| *t == topic).unwrap_or(0);
        scores[idx] += weight;
    }
}

/// Scores every topic against title and content.
///
/// Title occurrences weigh double: a title mention is a stronger
/// relevance signal than a body mention. The primary topic is the
/// strict maximum; at equal scores the earlier topic in `Topic::ALL`
/// wins. This tie-break is a documented contract, not an accident.
pub fn analyze_topics(title: &str, content: &str) -> TopicalRelevance {
    let mut scores = [0u32; Topic::ALL.len()];
    accumulate(content, 1, &mut scores);
    accumulate(title, 2, &mut scores);

    let mut primary: Option<(Topic, u32)> = None;
    for (idx, topic) in Topic::ALL.iter().enumerate() {
        let score = scores[idx];
        if score == 0 {
            continue;
        }
        // Strictly-greater comparison keeps the first topic on ties.
        if primary.map_or(true, |(_, best)| score > best) {
            primary = Some((*topic, score));
        }
    }

    let mut score_per_topic = FxHashMap::default();
    for (idx, topic) in Topic::ALL.iter().enumerate() {
        if scores[idx] > 0 {
            score_per_topic.insert(*topic, scores[idx]);
        }
    }

    let topical_relevance_score = primary
        .map(|(_, best)| (best * POINTS_TO_PERCENT).min(100))
        .unwrap_or(0);

    TopicalRelevance {
        score_per_topic,
        primary_topic: primary.map(|(topic, _)| topic),
        topical_relevance_score,
    }
}
