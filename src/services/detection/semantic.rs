// Semantic Pattern Analysis
// Vocabulary diversity and word-repetition signals over lowercased tokens.

use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::FeatureSet;
use super::SubScore;
use std::collections::{HashMap, HashSet};

/// Words longer than this (in chars) are eligible for the repetition check.
const REPEAT_MIN_WORD_LEN: usize = 3;
/// Occurrences above this count a word as repeated.
const REPEAT_MIN_COUNT: usize = 3;

pub fn analyze(features: &FeatureSet, _config: &ScorerConfig) -> SubScore {
    let mut score: f64 = 0.0;
    let mut patterns = Vec::new();

    let diversity = features.vocabulary_diversity;
    if features.word_count > 0 {
        if diversity < 0.4 {
            score += 25.0;
            patterns.push(format!("Low vocabulary diversity ({:.2})", diversity));
        } else if diversity < 0.5 {
            score += 15.0;
            patterns.push(format!("Moderate vocabulary diversity ({:.2})", diversity));
        }
    }

    let repeated = repeated_words(&features.tokens);
    if repeated.len() > 2 {
        score += 20.0;
        let sample = repeated
            .iter()
            .take(3)
            .map(|w| format!("'{}'", w))
            .collect::<Vec<_>>()
            .join(", ");
        patterns.push(format!("Excessive word repetition: {}", sample));
    }

    SubScore {
        score: score.min(100.0),
        patterns,
    }
}

/// Tokens longer than three chars occurring more than three times, in order of
/// first appearance so the reported sample is deterministic.
fn repeated_words(tokens: &[String]) -> Vec<&str> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if token.chars().count() > REPEAT_MIN_WORD_LEN {
            *freq.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut repeated = Vec::new();
    for token in tokens {
        let word = token.as_str();
        if freq.get(word).is_some_and(|&c| c > REPEAT_MIN_COUNT) && seen.insert(word) {
            repeated.push(word);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::text_processor::extract_features;

    fn run(text: &str) -> SubScore {
        analyze(&extract_features(text), &ScorerConfig::default())
    }

    #[test]
    fn test_diverse_text_scores_zero() {
        let result = run("Every single word inside this short example differs from all others entirely.");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_low_diversity() {
        let text = "same same same same same same same word word word".repeat(2);
        let result = run(&text);
        assert!(result.patterns.iter().any(|p| p.contains("vocabulary diversity")));
        assert!(result.score >= 25.0);
    }

    #[test]
    fn test_repeated_words_reported_in_first_seen_order() {
        // alpha, gamma, delta each appear 4 times; beta only twice.
        let text = "alpha gamma delta beta alpha gamma delta alpha gamma delta beta alpha gamma delta";
        let result = run(text);
        assert!(result
            .patterns
            .iter()
            .any(|p| p.contains("'alpha', 'gamma', 'delta'")));
    }

    #[test]
    fn test_short_words_ignored_for_repetition() {
        let text = "the the the the the cat cat cat cat cat sun sun sun sun sun";
        let fs = extract_features(text);
        // All tokens are <= 3 chars, so no repetition hit despite heavy reuse.
        assert!(repeated_words(&fs.tokens).is_empty());
    }

    #[test]
    fn test_determinism() {
        let text = "alpha gamma delta beta alpha gamma delta alpha gamma delta beta alpha gamma delta";
        let first = run(text);
        let second = run(text);
        assert_eq!(first.score, second.score);
        assert_eq!(first.patterns, second.patterns);
    }
}
