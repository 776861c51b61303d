// Scorer Configuration
// Phrase dictionaries, weights and thresholds as explicit configuration data,
// plus JSON file persistence under the user config directory.
//
// The legacy server carried several scorer rewrites with drifting constants;
// the defaults here are the single canonical table (the advanced-detector
// variant). Tests and callers can substitute any part of it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Fixed weights combining the four sub-scores into the final probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerWeights {
    pub linguistic: f64,
    pub structural: f64,
    pub semantic: f64,
    pub behavioral: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            linguistic: 0.35,
            structural: 0.25,
            semantic: 0.25,
            behavioral: 0.15,
        }
    }
}

/// Probability thresholds for the risk tiers (strictly-greater comparisons).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: 0.8,
            high: 0.6,
            medium: 0.4,
        }
    }
}

/// The four phrase dictionaries scanned against lowercased text.
/// Matching is case-insensitive substring containment, so every entry must be
/// stored lowercased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseDictionaries {
    pub formal_transitions: Vec<String>,
    pub ai_phrases: Vec<String>,
    pub academic_markers: Vec<String>,
    pub informal_markers: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PhraseDictionaries {
    fn default() -> Self {
        Self {
            formal_transitions: to_strings(&[
                "furthermore",
                "moreover",
                "in conclusion",
                "it is important to note",
                "additionally",
                "consequently",
                "therefore",
                "in summary",
                "it should be noted",
                "it is worth mentioning",
                "as a result",
                "on the other hand",
                "in other words",
                "for instance",
                "to elaborate",
                "in essence",
                "fundamentally speaking",
                "it can be argued that",
                "one might consider",
                "it is evident that",
            ]),
            ai_phrases: to_strings(&[
                "as an ai",
                "i am an ai",
                "as a language model",
                "i cannot",
                "i don't have personal",
                "i don't have access to",
                "based on my training",
                "according to my knowledge",
                "i'm not able to",
                "i cannot provide",
                "i'm unable to",
            ]),
            academic_markers: to_strings(&[
                "according to research",
                "studies have shown",
                "it has been established",
                "research indicates",
                "evidence suggests",
                "scholars argue",
                "the literature suggests",
                "empirical evidence",
                "theoretical framework",
            ]),
            informal_markers: to_strings(&[
                "gonna", "wanna", "kinda", "sorta", "yeah", "nah",
            ]),
        }
    }
}

/// Complete scorer configuration. Owned by the scorer at construction time;
/// there is no hidden module-level dictionary state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerConfig {
    /// Inputs shorter than this (after trimming) short-circuit to the neutral verdict.
    pub min_text_chars: usize,
    /// Hard cap on the weighted sum; keeps the final probability below certainty.
    pub score_cap: f64,
    pub weights: ScorerWeights,
    pub risk_thresholds: RiskThresholds,
    pub phrases: PhraseDictionaries,
    pub emotional_words: Vec<String>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 20,
            score_cap: 95.0,
            weights: ScorerWeights::default(),
            risk_thresholds: RiskThresholds::default(),
            phrases: PhraseDictionaries::default(),
            emotional_words: to_strings(&[
                "feel", "think", "believe", "love", "hate", "excited", "worried",
                "happy", "sad",
            ]),
        }
    }
}

pub struct ConfigStore {
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_file: config_dir.join("config.json"),
        }
    }

    pub fn with_file(config_file: PathBuf) -> Self {
        Self { config_file }
    }

    /// Default config directory (platform config dir / truvoice).
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("truvoice"))
    }

    /// Load configuration; a missing file yields the canonical defaults.
    pub fn load(&self) -> Result<ScorerConfig> {
        if !self.config_file.exists() {
            return Ok(ScorerConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .with_context(|| format!("failed to read config {}", self.config_file.display()))?;
        let config: ScorerConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", self.config_file.display()))?;

        info!(path = %self.config_file.display(), "scorer config loaded");
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON, creating the directory if needed.
    pub fn save(&self, config: &ScorerConfig) -> Result<()> {
        if let Some(dir) = self.config_file.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config dir {}", dir.display()))?;
        }

        let content =
            serde_json::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.config_file, content)
            .with_context(|| format!("failed to write config {}", self.config_file.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScorerWeights::default();
        assert!((w.linguistic + w.structural + w.semantic + w.behavioral - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_dictionaries_lowercased() {
        let dicts = PhraseDictionaries::default();
        for list in [
            &dicts.formal_transitions,
            &dicts.ai_phrases,
            &dicts.academic_markers,
            &dicts.informal_markers,
        ] {
            for phrase in list {
                assert_eq!(phrase, &phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_config_round_trip() {
        let config = ScorerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScorerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.min_text_chars, 20);
        assert_eq!(parsed.score_cap, 95.0);
        assert_eq!(parsed.phrases.ai_phrases, config.phrases.ai_phrases);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let store = ConfigStore::with_file(PathBuf::from("/nonexistent/truvoice/config.json"));
        let config = store.load().unwrap();
        assert_eq!(config.min_text_chars, 20);
    }
}
