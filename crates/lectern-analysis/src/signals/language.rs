//! Language relevance signal — restricts tracking to the configured
//! target script.
//!
//! Binary by design: language is a hard gate dressed as a weighted
//! signal in the blend. Shares are computed over alphabetic characters
//! only, so digits and punctuation cannot dilute them.

use crate::config::AnalyzerConfig;
use crate::types::LanguageRelevance;

/// Unicode ranges counted as foreign scripts.
const FOREIGN_RANGES: &[(char, char)] = &[
    ('\u{0400}', '\u{04FF}'), // Cyrillic
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{3040}', '\u{309F}'), // Hiragana
    ('\u{30A0}', '\u{30FF}'), // Katakana
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
    ('\u{AC00}', '\u{D7AF}'), // Hangul Syllables
];

fn is_target_script(ch: char) -> bool {
    // Latin proper plus Latin-1/Extended accents.
    ch.is_ascii_alphabetic() || ('\u{00C0}'..='\u{024F}').contains(&ch)
}

fn is_foreign_script(ch: char) -> bool {
    FOREIGN_RANGES.iter().any(|(lo, hi)| (*lo..=*hi).contains(&ch))
}

/// Measures the script composition of the content.
///
/// Target language requires target share above the configured floor
/// AND foreign share below the configured ceiling. Content with no
/// alphabetic characters has 0% target share and fails the check.
pub fn analyze_language(content: &str, config: &AnalyzerConfig) -> LanguageRelevance {
    let mut alphabetic = 0usize;
    let mut target = 0usize;
    let mut foreign = 0usize;

    for ch in content.chars() {
        if !ch.is_alphabetic() {
            continue;
        }
        alphabetic += 1;
        if is_target_script(ch) {
            target += 1;
        } else if is_foreign_script(ch) {
            foreign += 1;
        }
    }

    let (target_pct, foreign_pct) = if alphabetic == 0 {
        (0.0, 0.0)
    } else {
        (
            target as f64 * 100.0 / alphabetic as f64,
            foreign as f64 * 100.0 / alphabetic as f64,
        )
    };

    let is_target_language = target_pct > config.target_script_min_percent
        && foreign_pct < config.foreign_script_max_percent;

    LanguageRelevance {
        is_target_language,
        target_language_char_percent: target_pct,
        other_script_char_percent: foreign_pct,
        language_score: if is_target_language { 100 } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> LanguageRelevance {
        analyze_language(content, &AnalyzerConfig::default())
    }

    #[test]
    fn english_prose_is_target_language() {
        let lang = check("A thorough walk through the borrow checker.");
        assert!(lang.is_target_language);
        assert_eq!(lang.language_score, 100);
        assert!(lang.target_language_char_percent > 99.0);
    }

    #[test]
    fn accented_latin_counts_as_target() {
        let lang = check("Él diseñó una heurística de relevancia útil.");
        assert!(lang.is_target_language);
    }

    #[test]
    fn cjk_content_is_not_target() {
        let lang = check("今日は新しいアルゴリズムについて学びました。とても面白かったです。");
        assert!(!lang.is_target_language);
        assert_eq!(lang.language_score, 0);
        assert!(lang.other_script_char_percent > 90.0);
    }

    #[test]
    fn small_foreign_admixture_still_blocks() {
        // ~90% Latin, but the foreign share exceeds the 5% ceiling.
        let lang = check("The kanji 勉強 and 学習 and 漢字 appear in this otherwise english line of text here");
        assert!(lang.target_language_char_percent > 70.0);
        assert!(lang.other_script_char_percent > 5.0);
        assert!(!lang.is_target_language);
        assert_eq!(lang.language_score, 0);
    }

    #[test]
    fn empty_and_symbol_only_content_fails_check() {
        assert!(!check("").is_target_language);
        assert!(!check("1234 !!! ???").is_target_language);
        assert_eq!(check("").target_language_char_percent, 0.0);
    }

    #[test]
    fn digits_do_not_dilute_shares() {
        let lang = check("port 8080 and 443 use tcp");
        assert!(lang.is_target_language);
        assert!(lang.target_language_char_percent > 99.0);
    }
}
