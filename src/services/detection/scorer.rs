// Lexical Risk Scorer
// Single-pass, stateless scoring of free text: four sub-analyses over one
// extracted feature set, combined by fixed weights into a bounded verdict.
// Never fails toward the caller; bad input degrades to a neutral verdict.

use crate::models::{AnalysisMetadata, ScoreBreakdown, TextFeatures, Verdict};
use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{extract_features, split_sentences, word_count};
use super::aggregation::{combine_scores, confidence_from_probability, risk_level};
use super::{behavioral, linguistic, semantic, structural};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

const MODEL_TAG: &str = "LexicalRiskScorer v1.0";
const TOO_SHORT_MESSAGE: &str = "Text too short for analysis";
const NEUTRAL_SCORE: f64 = 0.5;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("text too short for analysis")]
    InputTooShort,
    #[error("analysis failed: {0}")]
    Analysis(String),
}

struct Analysis {
    breakdown: ScoreBreakdown,
    patterns: Vec<String>,
    features: TextFeatures,
    word_count: usize,
    sentence_count: usize,
}

/// Heuristic scorer over surface text statistics. Owns its configuration;
/// construction is cheap and instances are freely shareable across threads.
pub struct LexicalRiskScorer {
    config: ScorerConfig,
}

impl Default for LexicalRiskScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl LexicalRiskScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score a piece of text. Always returns a verdict: inputs under the
    /// minimum length and unexpected analysis failures both produce the fixed
    /// neutral verdict instead of an error.
    pub fn score(&self, text: &str, subject_id: Option<&str>, item_id: Option<&str>) -> Verdict {
        let started = Instant::now();

        match self.try_analyze(text) {
            Ok(analysis) => {
                let probability = combine_scores(
                    &analysis.breakdown,
                    &self.config.weights,
                    self.config.score_cap,
                );
                let suspected = probability > 0.5;
                let message = format!(
                    "{} (Score: {:.1}%)",
                    if suspected { "Likely AI-generated" } else { "Likely human-written" },
                    probability * 100.0
                );

                info!(
                    word_count = analysis.word_count,
                    score = probability,
                    suspected,
                    "text analysis complete"
                );

                Verdict {
                    score: round3(probability),
                    is_suspected_ai: suspected,
                    confidence: round3(confidence_from_probability(probability)),
                    risk_level: risk_level(probability, &self.config.risk_thresholds),
                    message,
                    breakdown: rounded(&analysis.breakdown),
                    detected_patterns: analysis.patterns,
                    features: Some(analysis.features),
                    metadata: self.metadata(
                        text,
                        subject_id,
                        item_id,
                        analysis.word_count,
                        analysis.sentence_count,
                        started,
                    ),
                    error: None,
                }
            }
            Err(DetectError::InputTooShort) => {
                self.neutral_verdict(text, subject_id, item_id, started, TOO_SHORT_MESSAGE, None)
            }
            Err(DetectError::Analysis(detail)) => {
                warn!(error = %detail, "text analysis failed, returning neutral verdict");
                self.neutral_verdict(
                    text,
                    subject_id,
                    item_id,
                    started,
                    "Analysis failed",
                    Some(detail),
                )
            }
        }
    }

    fn try_analyze(&self, text: &str) -> Result<Analysis, DetectError> {
        if text.trim().chars().count() < self.config.min_text_chars {
            return Err(DetectError::InputTooShort);
        }

        catch_unwind(AssertUnwindSafe(|| self.analyze(text)))
            .map_err(|payload| DetectError::Analysis(panic_message(payload)))
    }

    fn analyze(&self, text: &str) -> Analysis {
        let feature_set = extract_features(text);

        let linguistic = linguistic::analyze(&feature_set, &self.config);
        let structural = structural::analyze(&feature_set, &self.config);
        let semantic = semantic::analyze(&feature_set, &self.config);
        let behavioral = behavioral::analyze(&feature_set, &self.config);

        let breakdown = ScoreBreakdown {
            linguistic: linguistic.score,
            structural: structural.score,
            semantic: semantic.score,
            behavioral: behavioral.score,
        };

        let mut patterns = linguistic.patterns;
        patterns.extend(structural.patterns);
        patterns.extend(semantic.patterns);
        patterns.extend(behavioral.patterns);

        let words = feature_set.word_count.max(1) as f64;
        let informal_occurrences: usize = self
            .config
            .phrases
            .informal_markers
            .iter()
            .map(|m| feature_set.text_lower.matches(m.as_str()).count())
            .sum();

        let features = TextFeatures {
            vocabulary_diversity: round3(feature_set.vocabulary_diversity),
            avg_word_length: round1(feature_set.avg_word_length),
            avg_sentence_length: round1(feature_set.sentence_len_mean),
            sentence_length_std_dev: round1(feature_set.sentence_len_std_dev),
            personal_language_ratio: round3(feature_set.personal_pronoun_count as f64 / words),
            informal_language_ratio: round3(informal_occurrences as f64 / words),
            contraction_ratio: round3(feature_set.contraction_count as f64 / words),
        };

        Analysis {
            breakdown,
            patterns,
            features,
            word_count: feature_set.word_count,
            sentence_count: feature_set.sentence_count,
        }
    }

    fn neutral_verdict(
        &self,
        text: &str,
        subject_id: Option<&str>,
        item_id: Option<&str>,
        started: Instant,
        message: &str,
        error: Option<String>,
    ) -> Verdict {
        Verdict {
            score: NEUTRAL_SCORE,
            is_suspected_ai: false,
            confidence: 0.0,
            risk_level: risk_level(NEUTRAL_SCORE, &self.config.risk_thresholds),
            message: message.to_string(),
            breakdown: ScoreBreakdown::default(),
            detected_patterns: vec![],
            features: None,
            metadata: self.metadata(
                text,
                subject_id,
                item_id,
                word_count(text),
                split_sentences(text).len(),
                started,
            ),
            error,
        }
    }

    fn metadata(
        &self,
        text: &str,
        subject_id: Option<&str>,
        item_id: Option<&str>,
        word_count: usize,
        sentence_count: usize,
        started: Instant,
    ) -> AnalysisMetadata {
        AnalysisMetadata {
            subject_id: subject_id.map(|s| s.to_string()),
            item_id: item_id.map(|s| s.to_string()),
            analysis_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
            processing_time_ms: round2(started.elapsed().as_secs_f64() * 1000.0),
            text_length: text.chars().count(),
            word_count,
            sentence_count,
            model: MODEL_TAG.to_string(),
        }
    }
}

fn rounded(breakdown: &ScoreBreakdown) -> ScoreBreakdown {
    ScoreBreakdown {
        linguistic: round1(breakdown.linguistic),
        structural: round1(breakdown.structural),
        semantic: round1(breakdown.semantic),
        behavioral: round1(breakdown.behavioral),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected panic during analysis".to_string()
    }
}
