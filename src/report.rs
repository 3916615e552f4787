//! Batch-level reporting over scored citations: totals, validation rate,
//! overall quality, and improvement recommendations.

use crate::types::{CitationStyle, ReachabilityStatus, ScoredCitation, StructuralError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A citation counts as valid at or above this confidence.
pub const VALID_THRESHOLD: f64 = 0.7;

/// Summary of a scored batch, suitable for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub timestamp: DateTime<Utc>,
    pub citation_style: CitationStyle,
    pub total_citations: usize,
    pub valid_citations: usize,
    /// Fraction of citations at or above [`VALID_THRESHOLD`]. Zero for an
    /// empty batch.
    pub validation_rate: f64,
    /// Mean confidence score across the batch.
    pub overall_quality_score: f64,
    pub needs_improvement: bool,
    pub recommendations: Vec<String>,
    pub citations: Vec<ScoredCitation>,
}

impl BatchReport {
    /// Build a report from scored citations.
    pub fn from_scored(citations: Vec<ScoredCitation>, style: CitationStyle) -> Self {
        let total = citations.len();
        let valid = citations
            .iter()
            .filter(|c| c.confidence_score >= VALID_THRESHOLD)
            .count();
        let overall = if total == 0 {
            0.0
        } else {
            citations.iter().map(|c| c.confidence_score).sum::<f64>() / total as f64
        };

        let recommendations = recommendations(&citations, overall, style);

        Self {
            timestamp: Utc::now(),
            citation_style: style,
            total_citations: total,
            valid_citations: valid,
            validation_rate: if total == 0 { 0.0 } else { valid as f64 / total as f64 },
            overall_quality_score: overall,
            needs_improvement: valid < total,
            recommendations,
            citations,
        }
    }
}

/// Derive improvement advice from the issues actually present in the batch.
fn recommendations(
    citations: &[ScoredCitation],
    overall_quality: f64,
    style: CitationStyle,
) -> Vec<String> {
    let has = |error: StructuralError| {
        citations
            .iter()
            .any(|c| c.validation.structural_errors.contains(&error))
    };
    let unreachable = citations
        .iter()
        .any(|c| c.reachability.status == ReachabilityStatus::Unreachable);

    let mut out = Vec::new();
    if has(StructuralError::MissingAuthors) {
        out.push("Add author information for incomplete citations".to_string());
    }
    if has(StructuralError::MissingYear) || has(StructuralError::MisplacedYear) {
        out.push("Include publication years for all sources".to_string());
    }
    if has(StructuralError::MissingTitle) {
        out.push("Provide complete titles for all cited works".to_string());
    }
    if unreachable {
        out.push("Verify all URLs are accessible and current".to_string());
    }
    if overall_quality < VALID_THRESHOLD {
        out.push("Review citations for completeness and accuracy".to_string());
    }
    if overall_quality < 0.5 {
        out.push("Consider using more authoritative sources".to_string());
    }
    out.push(format!(
        "Ensure all citations follow {} formatting guidelines",
        style
    ));
    out
}
