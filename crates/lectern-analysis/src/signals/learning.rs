//! Learning-indicator signal — detects language that signals
//! educational or analytical intent.

use smallvec::SmallVec;

use crate::patterns::{ACTIONABLE_VERBS, LEARNING_REGEXES, QUESTION_FORMAT, STEP_BY_STEP, TECHNICAL_TERMS};
use crate::types::LearningIndicators;

/// Points per matched learning pattern, and the cap on that component.
const POINTS_PER_PATTERN: u32 = 8;
const PATTERN_COMPONENT_CAP: u32 = 40;

/// Points per technical-term occurrence, and the cap on that component.
const POINTS_PER_TERM: u32 = 3;
const TERM_COMPONENT_CAP: u32 = 20;

/// Scans title+content for learning-intent patterns.
///
/// Pattern matching is a breadth check: each table entry counts once
/// no matter how often it matches. Term density counts occurrences.
pub fn analyze_learning(title: &str, content: &str) -> LearningIndicators {
    let combined = format!("{title}\n{content}");

    let mut matched_pattern_count = 0usize;
    let mut matched_groups: SmallVec<[String; 4]> = SmallVec::new();
    for (group, regex) in LEARNING_REGEXES.iter() {
        if regex.is_match(&combined) {
            matched_pattern_count += 1;
            if !matched_groups.iter().any(|g| g == group) {
                matched_groups.push((*group).to_string());
            }
        }
    }

    let has_question_answer_format = QUESTION_FORMAT.is_match(&combined);
    let has_step_by_step = STEP_BY_STEP.is_match(&combined);
    let has_actionable_verbs = ACTIONABLE_VERBS.is_match(&combined);
    let technical_term_count = TECHNICAL_TERMS.find_iter(&combined).count();

    let mut score = (matched_pattern_count as u32 * POINTS_PER_PATTERN).min(PATTERN_COMPONENT_CAP);
    if has_question_answer_format {
        score += 15;
    }
    if has_step_by_step {
        score += 10;
    }
    score += (technical_term_count as u32 * POINTS_PER_TERM).min(TERM_COMPONENT_CAP);
    if has_actionable_verbs {
        score += 15;
    }

    LearningIndicators {
        matched_pattern_count,
        matched_groups,
        has_question_answer_format,
        has_step_by_step,
        technical_term_count,
        has_actionable_verbs,
        learning_score: score.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prose_scores_zero() {
        let li = analyze_learning("Weekend notes", "We went for a walk by the river.");
        assert_eq!(li.matched_pattern_count, 0);
        assert_eq!(li.technical_term_count, 0);
        assert_eq!(li.learning_score, 0);
    }

    #[test]
    fn tutorial_phrasing_counts_patterns_once_each() {
        // "tutorial" appears twice but is one table entry.
        let li = analyze_learning(
            "A tutorial on sorting",
            "This tutorial covers how to pick a pivot.",
        );
        assert_eq!(li.matched_pattern_count, 2); // "tutorial" + "how to"
        assert_eq!(li.matched_groups.to_vec(), vec!["tutorial".to_string()]);
        assert_eq!(li.learning_score, 16);
    }

    #[test]
    fn pattern_component_caps_at_forty() {
        let content = "how to guide to tutorial walkthrough getting started \
                       deep dive under the hood internals case study best practices";
        let li = analyze_learning("", content);
        assert!(li.matched_pattern_count > 5);
        // 5+ matches saturate the 40-point component; nothing else matches.
        assert_eq!(li.learning_score, 40);
    }

    #[test]
    fn question_and_steps_add_points() {
        let li = analyze_learning(
            "Why is my index slow?",
            "Step 1: check the query plan. Step 2: add statistics.",
        );
        assert!(li.has_question_answer_format);
        assert!(li.has_step_by_step);
        assert_eq!(li.learning_score, 15 + 10);
    }

    #[test]
    fn term_density_caps_at_twenty() {
        let content = "api api api api api api api api api api";
        let li = analyze_learning("", content);
        assert_eq!(li.technical_term_count, 10);
        assert_eq!(li.learning_score, TERM_COMPONENT_CAP);
    }

    #[test]
    fn actionable_verbs_detected() {
        let li = analyze_learning("", "We will implement and deploy the service.");
        assert!(li.has_actionable_verbs);
        assert_eq!(li.learning_score, 15);
    }

    #[test]
    fn score_never_exceeds_100() {
        let content = "How to implement a cache? Step 1: tutorial deep dive \
                       case study best practices api algorithm async mutex \
                       protocol latency throughput encryption deployment \
                       walkthrough under the hood internals troubleshooting \
                       root cause debugging documentation specification";
        let li = analyze_learning("Mastering the api algorithm", content);
        assert_eq!(li.learning_score, 100);
    }
}
