// TRUVOICE Data Models
// Wire types for text and media verdicts (camelCase JSON, matching the legacy
// server output consumed by the platform frontend)

use serde::{Deserialize, Serialize};

/// Risk tier derived from thresholding the final probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// The four bounded [0,100] component scores combined into the final probability.
/// Serialized as `detailedAnalysis` for wire compatibility.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub linguistic: f64,
    pub structural: f64,
    pub semantic: f64,
    pub behavioral: f64,
}

/// Surface statistics surfaced alongside the verdict for diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    pub vocabulary_diversity: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub sentence_length_std_dev: f64,
    pub personal_language_ratio: f64,
    pub informal_language_ratio: f64,
    pub contraction_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub subject_id: Option<String>,
    pub item_id: Option<String>,
    pub analysis_id: String,
    /// ISO-8601 local timestamp of the analysis.
    pub timestamp: String,
    pub processing_time_ms: f64,
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub model: String,
}

/// Full detection verdict for a single piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Final AI probability in [0, 0.95], rounded to 3 decimals.
    pub score: f64,
    #[serde(rename = "isSuspectedAI")]
    pub is_suspected_ai: bool,
    /// Distance from the 0.5 decision boundary, scaled to [0, 1].
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub message: String,
    #[serde(rename = "detailedAnalysis")]
    pub breakdown: ScoreBreakdown,
    pub detected_patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<TextFeatures>,
    pub metadata: AnalysisMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Media kind accepted by the placeholder media assessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub fn parse(val: &str) -> Option<Self> {
        match val.trim().to_lowercase().as_str() {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// Verdict emitted by the media placeholder path. `trustScore` is a [0,1]
/// non-suspicion value; it is heuristic, never real inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaVerdict {
    pub trust_score: f64,
    pub suspicious: bool,
    pub media_type: String,
    pub confidence: f64,
    pub processing_time_ms: f64,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_wire_format() {
        assert_eq!(serde_json::to_string(&RiskLevel::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
    }

    #[test]
    fn test_verdict_field_names() {
        let verdict = Verdict {
            score: 0.5,
            is_suspected_ai: false,
            confidence: 0.0,
            risk_level: RiskLevel::Medium,
            message: "Text too short for analysis".to_string(),
            breakdown: ScoreBreakdown::default(),
            detected_patterns: vec![],
            features: None,
            metadata: AnalysisMetadata {
                subject_id: None,
                item_id: None,
                analysis_id: "test".to_string(),
                timestamp: "2025-01-01T00:00:00".to_string(),
                processing_time_ms: 0.0,
                text_length: 0,
                word_count: 0,
                sentence_count: 0,
                model: "test".to_string(),
            },
            error: None,
        };

        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("isSuspectedAI").is_some());
        assert!(json.get("riskLevel").is_some());
        assert!(json.get("detailedAnalysis").is_some());
        assert!(json.get("detectedPatterns").is_some());
        assert!(json.get("error").is_none());
        assert!(json.get("features").is_none());
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!(MediaKind::parse("Video"), Some(MediaKind::Video));
        assert_eq!(MediaKind::parse(" audio "), Some(MediaKind::Audio));
        assert_eq!(MediaKind::parse("text"), None);
    }
}
