// Structural Pattern Analysis
// Sentence and paragraph length consistency. Machine-generated text tends to
// keep both unusually uniform.

use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{std_dev, FeatureSet};
use super::SubScore;

pub fn analyze(features: &FeatureSet, _config: &ScorerConfig) -> SubScore {
    // Single-sentence input carries no consistency signal.
    if features.sentence_count < 2 {
        return SubScore::default();
    }

    let mut score: f64 = 0.0;
    let mut patterns = Vec::new();

    let mean = features.sentence_len_mean;
    let dev = features.sentence_len_std_dev;

    if dev < 3.0 && mean > 15.0 {
        score += 20.0;
        patterns.push("Highly consistent sentence lengths".to_string());
    } else if dev < 5.0 {
        score += 10.0;
        patterns.push("Consistent sentence structure".to_string());
    }

    if features.paragraph_word_counts.len() > 1
        && std_dev(&features.paragraph_word_counts) < 10.0
    {
        score += 15.0;
        patterns.push("Uniform paragraph lengths".to_string());
    }

    SubScore {
        score: score.min(100.0),
        patterns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::text_processor::extract_features;

    fn run(text: &str) -> SubScore {
        analyze(&extract_features(text), &ScorerConfig::default())
    }

    #[test]
    fn test_single_sentence_scores_zero() {
        let result = run("Only one long sentence without any interesting structure to speak of.");
        assert_eq!(result.score, 0.0);
        assert!(result.patterns.is_empty());
    }

    #[test]
    fn test_uniform_long_sentences() {
        // Three sentences of exactly 16 words each: std dev 0, mean > 15.
        let sentence = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen";
        let text = format!("{s}. {s}. {s}.", s = sentence);
        let result = run(&text);
        assert_eq!(result.score, 20.0);
        assert!(result.patterns[0].contains("Highly consistent"));
    }

    #[test]
    fn test_moderately_uniform_short_sentences() {
        // Lengths 4, 5, 4: std dev < 3 but mean <= 15, falls to the < 5 branch.
        let result = run("The cat sat down. The dog ran away fast. A bird flew off.");
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn test_varied_sentences_score_zero() {
        let result = run(
            "No. Short one here. This sentence runs much longer than the others and keeps going with extra words to widen the spread considerably.",
        );
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_uniform_paragraphs_add_points() {
        let para = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen. \
                    one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen.";
        let text = format!("{p}\n\n{p}", p = para);
        let result = run(&text);
        assert_eq!(result.score, 35.0);
        assert!(result.patterns.iter().any(|p| p.contains("Uniform paragraph")));
    }
}
