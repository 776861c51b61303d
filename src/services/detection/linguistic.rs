// Linguistic Pattern Analysis
// Scans lowercased text against the three AI-leaning phrase dictionaries.
// Matching is substring containment; "furthermoreover" still counts as
// "furthermore" (documented scorer-wide choice).

use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{match_phrases, FeatureSet};
use super::SubScore;

const AI_PHRASE_POINTS: f64 = 40.0;

pub fn analyze(features: &FeatureSet, config: &ScorerConfig) -> SubScore {
    let mut score = 0.0;
    let mut patterns = Vec::new();
    let text = features.text_lower.as_str();

    // Each distinct AI self-reference phrase is a large, saturating increment.
    for phrase in match_phrases(text, &config.phrases.ai_phrases) {
        score += AI_PHRASE_POINTS;
        patterns.push(format!("AI identifier: '{}'", phrase));
    }

    let transitions = match_phrases(text, &config.phrases.formal_transitions);
    for phrase in &transitions {
        patterns.push(format!("Formal transition: '{}'", phrase));
    }
    if transitions.len() > 3 {
        score += 25.0;
    } else if transitions.len() > 1 {
        score += 15.0;
    }

    let markers = match_phrases(text, &config.phrases.academic_markers);
    for phrase in &markers {
        patterns.push(format!("Academic marker: '{}'", phrase));
    }
    if markers.len() > 2 {
        score += 20.0;
    }

    SubScore {
        score: score.min(100.0),
        patterns,
    }
}
