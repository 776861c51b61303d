// Detection Module
// Lexical risk scoring organized into specialized submodules:
// - linguistic: phrase-dictionary matches (AI identifiers, transitions, hedges)
// - structural: sentence/paragraph length consistency
// - semantic: vocabulary diversity and word repetition
// - behavioral: personal language, emotional words, contractions
// - aggregation: weighted combination, risk tiers, confidence
// - scorer: the public entry point tying the sub-analyses together

pub mod aggregation;
pub mod behavioral;
pub mod linguistic;
pub mod scorer;
pub mod semantic;
pub mod structural;

/// Result of one sub-analysis: a score bounded to [0,100] and human-readable
/// descriptions of what fired.
#[derive(Debug, Clone, Default)]
pub struct SubScore {
    pub score: f64,
    pub patterns: Vec<String>,
}

pub use aggregation::{combine_scores, confidence_from_probability, risk_level};
pub use scorer::{DetectError, LexicalRiskScorer};
