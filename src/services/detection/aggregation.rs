// Aggregation Logic
// Combines the four sub-scores into a bounded probability and derives the
// risk tier and boundary-distance confidence.

use crate::models::{RiskLevel, ScoreBreakdown};
use crate::services::config_store::{RiskThresholds, ScorerWeights};

/// Weighted sum of the sub-scores, capped below certainty and scaled to a
/// probability. The cap keeps the result in [0, cap/100] no matter the inputs.
pub fn combine_scores(breakdown: &ScoreBreakdown, weights: &ScorerWeights, cap: f64) -> f64 {
    let weighted = breakdown.linguistic * weights.linguistic
        + breakdown.structural * weights.structural
        + breakdown.semantic * weights.semantic
        + breakdown.behavioral * weights.behavioral;

    weighted.clamp(0.0, cap) / 100.0
}

/// Distance from the 0.5 decision boundary, scaled to [0, 1].
pub fn confidence_from_probability(probability: f64) -> f64 {
    ((probability - 0.5).abs() * 2.0).clamp(0.0, 1.0)
}

pub fn risk_level(probability: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if probability > thresholds.critical {
        RiskLevel::Critical
    } else if probability > thresholds.high {
        RiskLevel::High
    } else if probability > thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(l: f64, st: f64, se: f64, b: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            linguistic: l,
            structural: st,
            semantic: se,
            behavioral: b,
        }
    }

    #[test]
    fn test_combine_weights() {
        let p = combine_scores(
            &breakdown(100.0, 0.0, 0.0, 0.0),
            &ScorerWeights::default(),
            95.0,
        );
        assert!((p - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_combine_caps_below_certainty() {
        let p = combine_scores(
            &breakdown(100.0, 100.0, 100.0, 100.0),
            &ScorerWeights::default(),
            95.0,
        );
        assert!((p - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_boundary_distance() {
        assert_eq!(confidence_from_probability(0.5), 0.0);
        assert!((confidence_from_probability(0.75) - 0.5).abs() < 1e-9);
        assert!((confidence_from_probability(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_risk_tiers() {
        let t = RiskThresholds::default();
        assert_eq!(risk_level(0.95, &t), RiskLevel::Critical);
        assert_eq!(risk_level(0.8, &t), RiskLevel::High);
        assert_eq!(risk_level(0.61, &t), RiskLevel::High);
        assert_eq!(risk_level(0.5, &t), RiskLevel::Medium);
        assert_eq!(risk_level(0.4, &t), RiskLevel::Low);
        assert_eq!(risk_level(0.1, &t), RiskLevel::Low);
    }
}
