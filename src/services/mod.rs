// TRUVOICE Core Services
// Migrated from the Python detection backend

pub mod config_store;
pub mod detection;
pub mod media;
pub mod text_processor;

pub use config_store::{ConfigStore, PhraseDictionaries, RiskThresholds, ScorerConfig, ScorerWeights};
pub use detection::{DetectError, LexicalRiskScorer};
pub use media::{MediaAssessor, TrustMode};
