//! Structural validation of parsed citations against per-style rule tables.
//!
//! Pure and deterministic: no I/O, no hidden state. Violations are data, not
//! errors, so a broken citation still flows through scoring.

use crate::types::{CitationRecord, CitationStyle, StructuralError, ValidationResult};

/// Fields a citation style requires.
#[derive(Debug, Clone, Copy)]
struct StyleRules {
    requires_authors: bool,
    requires_title: bool,
    requires_year: bool,
}

/// Per-style required-field table.
///
/// | Style   | Required fields       |
/// |---------|-----------------------|
/// | APA     | authors, year, title  |
/// | MLA     | authors, title        |
/// | Chicago | authors, title, year  |
fn rules_for(style: CitationStyle) -> StyleRules {
    match style {
        CitationStyle::Apa | CitationStyle::Chicago => StyleRules {
            requires_authors: true,
            requires_title: true,
            requires_year: true,
        },
        CitationStyle::Mla => StyleRules {
            requires_authors: true,
            requires_title: true,
            requires_year: false,
        },
    }
}

/// Check a record against its style's structural rules.
///
/// Returns every violation found, not just the first; the scorer needs the
/// full error set.
pub fn validate(record: &CitationRecord) -> ValidationResult {
    let rules = rules_for(record.style);
    let mut errors = Vec::new();

    if rules.requires_authors && record.authors.is_empty() {
        errors.push(StructuralError::MissingAuthors);
    }
    if rules.requires_title && record.title.is_none() {
        errors.push(StructuralError::MissingTitle);
    }
    if rules.requires_year && record.year.is_none() {
        errors.push(StructuralError::MissingYear);
    }
    // APA places the year in parentheses directly after the authors
    if record.style == CitationStyle::Apa {
        if let Some(year) = record.year {
            if !record.raw_text.contains(&format!("({})", year)) {
                errors.push(StructuralError::MisplacedYear);
            }
        }
    }
    if !record.authors.is_empty() && !authors_well_formed(&record.authors) {
        errors.push(StructuralError::MalformedAuthorList);
    }

    errors.sort();
    errors.dedup();

    ValidationResult {
        is_structurally_valid: errors.is_empty(),
        structural_errors: errors,
        record: record.clone(),
    }
}

/// Author names must be non-empty and carry no embedded digits.
fn authors_well_formed(authors: &[String]) -> bool {
    authors
        .iter()
        .all(|name| !name.trim().is_empty() && !name.chars().any(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rstest::rstest;

    fn record(raw: &str, style: CitationStyle) -> CitationRecord {
        parse(raw, style).unwrap()
    }

    #[test]
    fn test_complete_apa_citation_is_valid() {
        let rec = record(
            "Smith, J. (2020). Climate Trends. https://example.org/report",
            CitationStyle::Apa,
        );
        let result = validate(&rec);
        assert!(result.is_structurally_valid);
        assert!(result.structural_errors.is_empty());
    }

    #[rstest]
    #[case(CitationStyle::Apa, true)]
    #[case(CitationStyle::Chicago, true)]
    #[case(CitationStyle::Mla, false)]
    fn test_year_requirement_per_style(#[case] style: CitationStyle, #[case] required: bool) {
        let mut rec = record("Smith, J. (2020). Climate Trends.", style);
        rec.year = None;
        let result = validate(&rec);
        assert_eq!(
            result.structural_errors.contains(&StructuralError::MissingYear),
            required
        );
    }

    #[test]
    fn test_apa_missing_authors_and_year() {
        let rec = record("Climate Trends", CitationStyle::Apa);
        let result = validate(&rec);
        assert!(!result.is_structurally_valid);
        assert_eq!(
            result.structural_errors,
            vec![StructuralError::MissingAuthors, StructuralError::MissingYear]
        );
    }

    #[test]
    fn test_mla_year_is_optional() {
        let rec = record(
            "Doe, Jane. \"A Study of Ocean Currents.\" Marine Journal.",
            CitationStyle::Mla,
        );
        let result = validate(&rec);
        assert!(result.is_structurally_valid, "{:?}", result.structural_errors);
    }

    #[test]
    fn test_chicago_requires_year() {
        let rec = record(
            "Doe, Jane. \"A Study of Ocean Currents.\" Marine Journal.",
            CitationStyle::Chicago,
        );
        let result = validate(&rec);
        assert_eq!(result.structural_errors, vec![StructuralError::MissingYear]);
    }

    #[test]
    fn test_author_with_digits_is_malformed() {
        let mut rec = record(
            "Smith, J. (2020). Climate Trends. Example Press.",
            CitationStyle::Apa,
        );
        rec.authors = vec!["Sm1th, J.".to_string()];
        let result = validate(&rec);
        assert_eq!(
            result.structural_errors,
            vec![StructuralError::MalformedAuthorList]
        );
    }

    #[test]
    fn test_apa_year_outside_parentheses_is_misplaced() {
        let rec = record(
            "Smith, John. 2017. The Long Winter. Harbor Press.",
            CitationStyle::Apa,
        );
        assert_eq!(rec.year, Some(2017));
        let result = validate(&rec);
        assert!(result
            .structural_errors
            .contains(&StructuralError::MisplacedYear));
    }

    #[test]
    fn test_chicago_accepts_period_bounded_year() {
        let rec = record(
            "Smith, John. 2017. The Long Winter. Harbor Press.",
            CitationStyle::Chicago,
        );
        let result = validate(&rec);
        assert!(result.is_structurally_valid, "{:?}", result.structural_errors);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let rec = record("Climate Trends", CitationStyle::Apa);
        let first = validate(&rec);
        let second = validate(&rec);
        assert_eq!(first.structural_errors, second.structural_errors);
        assert_eq!(first.is_structurally_valid, second.is_structurally_valid);
    }
}
