//! Confidence scoring: fold structural validity and URL reachability into a
//! single normalized score with an auditable rationale.
//!
//! The constants live in [`ScoringPolicy`] rather than inline so the table
//! can be recalibrated (or loaded from configuration) without touching the
//! scoring logic. Existing reports depend on the default values.

use crate::types::{
    ReachabilityResult, ReachabilityStatus, ScoredCitation, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// Scoring table: base score, per-error penalty, and reachability multipliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub base_score: f64,
    /// Uniform per-error penalty; not weighted by field importance, so the
    /// rule stays auditable.
    pub structural_penalty: f64,
    pub reachable_multiplier: f64,
    pub unknown_multiplier: f64,
    pub unreachable_multiplier: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base_score: 1.0,
            structural_penalty: 0.2,
            reachable_multiplier: 1.0,
            unknown_multiplier: 0.85,
            unreachable_multiplier: 0.5,
        }
    }
}

impl ScoringPolicy {
    fn multiplier_for(&self, status: ReachabilityStatus) -> f64 {
        match status {
            ReachabilityStatus::Reachable => self.reachable_multiplier,
            ReachabilityStatus::Unknown => self.unknown_multiplier,
            ReachabilityStatus::Unreachable => self.unreachable_multiplier,
        }
    }
}

/// Compute the confidence score for a validated, reachability-checked
/// citation.
///
/// Deterministic: base score minus a fixed penalty per structural error
/// (floored at zero), times the reachability multiplier, clamped to
/// [0.0, 1.0] and rounded to two decimal places. The rationale lists the
/// structural penalties first, then the reachability multiplier.
pub fn score(
    policy: &ScoringPolicy,
    validation: ValidationResult,
    reachability: ReachabilityResult,
) -> ScoredCitation {
    let mut rationale = Vec::with_capacity(validation.structural_errors.len() + 1);

    let mut value = policy.base_score;
    for error in &validation.structural_errors {
        value -= policy.structural_penalty;
        rationale.push(format!(
            "-{:.2}: {}",
            policy.structural_penalty,
            error.describe()
        ));
    }
    value = value.max(0.0);

    let multiplier = policy.multiplier_for(reachability.status);
    value *= multiplier;
    rationale.push(format!(
        "x{:.2}: URL {}",
        multiplier,
        match reachability.status {
            ReachabilityStatus::Reachable => "reachable",
            ReachabilityStatus::Unreachable => "unreachable",
            ReachabilityStatus::Unknown => "reachability unknown",
        }
    ));

    let confidence_score = round2(value.clamp(0.0, 1.0));
    let formatted_citation = crate::formatter::format_citation(&validation.record);

    ScoredCitation {
        validation,
        reachability,
        confidence_score,
        rationale,
        formatted_citation,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CitationRecord, CitationStyle, StructuralError};

    fn validation(errors: Vec<StructuralError>) -> ValidationResult {
        ValidationResult {
            record: CitationRecord {
                raw_text: "Smith, J. (2020). Climate Trends.".to_string(),
                authors: vec!["Smith, J.".to_string()],
                title: Some("Climate Trends".to_string()),
                year: Some(2020),
                source_url: None,
                style: CitationStyle::Apa,
            },
            is_structurally_valid: errors.is_empty(),
            structural_errors: errors,
        }
    }

    fn reachability(status: ReachabilityStatus) -> ReachabilityResult {
        ReachabilityResult {
            url: Some("https://example.org".to_string()),
            status,
            status_code: None,
            checked_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_clean_reachable_citation_scores_one() {
        let scored = score(
            &ScoringPolicy::default(),
            validation(vec![]),
            reachability(ReachabilityStatus::Reachable),
        );
        assert_eq!(scored.confidence_score, 1.00);
    }

    #[test]
    fn test_two_errors_with_unknown_url_scores_051() {
        // max(0, 1.0 - 0.4) * 0.85 = 0.51
        let scored = score(
            &ScoringPolicy::default(),
            validation(vec![
                StructuralError::MissingAuthors,
                StructuralError::MissingYear,
            ]),
            ReachabilityResult::absent(),
        );
        assert_eq!(scored.confidence_score, 0.51);
    }

    #[test]
    fn test_penalties_floor_at_zero() {
        let scored = score(
            &ScoringPolicy::default(),
            validation(vec![
                StructuralError::MissingAuthors,
                StructuralError::MissingTitle,
                StructuralError::MissingYear,
                StructuralError::MisplacedYear,
                StructuralError::MalformedAuthorList,
            ]),
            reachability(ReachabilityStatus::Reachable),
        );
        assert_eq!(scored.confidence_score, 0.00);
    }

    #[test]
    fn test_unreachable_halves_the_score() {
        let scored = score(
            &ScoringPolicy::default(),
            validation(vec![]),
            reachability(ReachabilityStatus::Unreachable),
        );
        assert_eq!(scored.confidence_score, 0.50);
    }

    #[test]
    fn test_rationale_lists_errors_then_reachability() {
        let scored = score(
            &ScoringPolicy::default(),
            validation(vec![StructuralError::MissingYear]),
            reachability(ReachabilityStatus::Unreachable),
        );
        assert_eq!(scored.rationale.len(), 2);
        assert_eq!(scored.rationale[0], "-0.20: missing year");
        assert_eq!(scored.rationale[1], "x0.50: URL unreachable");
    }

    #[test]
    fn test_scoring_is_idempotent_for_same_error_set() {
        let policy = ScoringPolicy::default();
        let first = score(
            &policy,
            validation(vec![StructuralError::MissingTitle]),
            reachability(ReachabilityStatus::Unknown),
        );
        let second = score(
            &policy,
            validation(vec![StructuralError::MissingTitle]),
            reachability(ReachabilityStatus::Unknown),
        );
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(first.rationale, second.rationale);
    }

    #[test]
    fn test_custom_policy_overrides_constants() {
        let policy = ScoringPolicy {
            structural_penalty: 0.5,
            ..ScoringPolicy::default()
        };
        let scored = score(
            &policy,
            validation(vec![StructuralError::MissingYear]),
            reachability(ReachabilityStatus::Reachable),
        );
        assert_eq!(scored.confidence_score, 0.50);
    }
}
