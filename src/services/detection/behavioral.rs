// Behavioral Pattern Analysis
// First-person language, emotional vocabulary and contractions. Their absence
// in longer text reads as machine-written; each check only fires above a
// minimum word count so short notes are not penalized.

use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{match_phrases, FeatureSet};
use super::SubScore;

const PERSONAL_MIN_WORDS: usize = 50;
const EMOTIONAL_MIN_WORDS: usize = 100;

pub fn analyze(features: &FeatureSet, config: &ScorerConfig) -> SubScore {
    let mut score: f64 = 0.0;
    let mut patterns = Vec::new();
    let word_count = features.word_count;

    if word_count > PERSONAL_MIN_WORDS {
        let ratio = features.personal_pronoun_count as f64 / word_count as f64;
        if ratio < 0.01 {
            score += 30.0;
            patterns.push("Lack of personal language".to_string());
        } else if ratio < 0.02 {
            score += 15.0;
            patterns.push("Limited personal expression".to_string());
        }
    }

    let emotional_hits = match_phrases(&features.text_lower, &config.emotional_words);
    if emotional_hits.is_empty() && word_count > EMOTIONAL_MIN_WORDS {
        score += 20.0;
        patterns.push("Absence of emotional language".to_string());
    }

    if features.contraction_count == 0 && word_count > PERSONAL_MIN_WORDS {
        score += 15.0;
        patterns.push("No contractions (overly formal)".to_string());
    }

    SubScore {
        score: score.min(100.0),
        patterns,
    }
}
