use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============= Citation Types =============

/// Citation style selected by the caller. Never inferred from the input text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    Apa,
    Mla,
    Chicago,
}

impl std::str::FromStr for CitationStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(Self::Apa),
            "mla" => Ok(Self::Mla),
            "chicago" => Ok(Self::Chicago),
            other => Err(AppError::InvalidInput(format!(
                "Unknown citation style: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apa => write!(f, "APA"),
            Self::Mla => write!(f, "MLA"),
            Self::Chicago => write!(f, "Chicago"),
        }
    }
}

/// Structured fields recovered from a free-text citation.
///
/// Fields the parser could not recover are `None`, never an empty string,
/// so the validator's missing-field checks stay unambiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Original input text, kept verbatim.
    pub raw_text: String,
    /// Ordered author names. Empty means no authors were recovered.
    pub authors: Vec<String>,
    pub title: Option<String>,
    /// Publication year, always four digits when present.
    pub year: Option<u16>,
    pub source_url: Option<String>,
    pub style: CitationStyle,
}

// ============= Validation Types =============

/// Named structural violations a citation can carry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StructuralError {
    MissingAuthors,
    MissingTitle,
    MissingYear,
    MisplacedYear,
    MalformedAuthorList,
}

impl StructuralError {
    /// Human-readable form used in score rationales.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::MissingAuthors => "missing authors",
            Self::MissingTitle => "missing title",
            Self::MissingYear => "missing year",
            Self::MisplacedYear => "year not in parentheses position",
            Self::MalformedAuthorList => "malformed author list",
        }
    }
}

/// Outcome of checking a record against its style's structural rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub record: CitationRecord,
    /// All violations found, not just the first. Sorted and deduplicated.
    pub structural_errors: Vec<StructuralError>,
    pub is_structurally_valid: bool,
}

// ============= Reachability Types =============

/// Classification of a URL liveness probe.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReachabilityStatus {
    /// HTTP 200-399.
    Reachable,
    /// Confirmed HTTP 400-599.
    Unreachable,
    /// Timeout, DNS failure, connection error, malformed URL, or no URL at all.
    Unknown,
}

/// Result of a single reachability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachabilityResult {
    /// The checked URL, or `None` when the record carried no URL.
    pub url: Option<String>,
    pub status: ReachabilityStatus,
    /// HTTP status code when a response was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub checked_at: DateTime<Utc>,
}

impl ReachabilityResult {
    /// Result for a citation with no URL: reachability is simply unknown.
    pub fn absent() -> Self {
        Self::unchecked(None)
    }

    /// Result for a URL that was deliberately not probed (verification
    /// disabled). The URL is kept for reporting; its status is unknown.
    pub fn unchecked(url: Option<String>) -> Self {
        Self {
            url,
            status: ReachabilityStatus::Unknown,
            status_code: None,
            checked_at: Utc::now(),
        }
    }
}

// ============= Scoring Types =============

/// Final pipeline output: validation and reachability folded into one
/// normalized confidence score with a human-readable rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCitation {
    pub validation: ValidationResult,
    pub reachability: ReachabilityResult,
    /// Quality score in [0.0, 1.0], rounded to two decimal places.
    pub confidence_score: f64,
    /// One line per contributing penalty or multiplier, structural errors
    /// first, reachability last.
    pub rationale: Vec<String>,
    /// The recovered fields rendered back out in the record's style.
    pub formatted_citation: String,
}

// ============= Tool Types =============

/// Schema describing a tool for orchestration layers that discover tools
/// dynamically.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Empty input: citation text is empty or whitespace-only")]
    EmptyInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing_is_case_insensitive() {
        assert_eq!("APA".parse::<CitationStyle>().unwrap(), CitationStyle::Apa);
        assert_eq!("mla".parse::<CitationStyle>().unwrap(), CitationStyle::Mla);
        assert_eq!(
            "Chicago".parse::<CitationStyle>().unwrap(),
            CitationStyle::Chicago
        );
        assert!("harvard".parse::<CitationStyle>().is_err());
    }

    #[test]
    fn test_absent_reachability_is_unknown() {
        let result = ReachabilityResult::absent();
        assert_eq!(result.status, ReachabilityStatus::Unknown);
        assert!(result.url.is_none());
        assert!(result.status_code.is_none());
    }

    #[test]
    fn test_structural_error_serde_names() {
        let json = serde_json::to_string(&StructuralError::MissingAuthors).unwrap();
        assert_eq!(json, "\"missing_authors\"");
        let json = serde_json::to_string(&StructuralError::MalformedAuthorList).unwrap();
        assert_eq!(json, "\"malformed_author_list\"");
    }
}
