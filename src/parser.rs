//! Citation parsing: free text in, structured [`CitationRecord`] out.
//!
//! Parsing is lossy-tolerant, not lossy-silent: any field that cannot be
//! recovered is explicitly absent. No field is ever invented and no empty
//! string ever stands in for a missing value.

use crate::types::{AppError, CitationRecord, CitationStyle, Result};
use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("valid url regex")
});

/// Year in parentheses position, e.g. `(2020)`.
static PAREN_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(((?:19|20)\d{2})\)").expect("valid year regex"));

/// Year bounded by periods, e.g. `. 2020.` (Chicago-style date position).
static PERIOD_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\.)\s*((?:19|20)\d{2})\s*\.").expect("valid year regex")
});

/// Title in straight or smart quotes.
static QUOTED_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"|“([^”]+)”"#).expect("valid title regex")
});

/// Run of capitalized words, allowing lowercase connectives between them.
static CAPITALIZED_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[A-Z][A-Za-z0-9'’\-]*(?:\s+(?:(?:of|the|and|in|on|for|a|an|to|with|at|by|from)\s+)*[A-Z][A-Za-z0-9'’\-]*)*",
    )
    .expect("valid title regex")
});

/// Leading segment that looks like a name list: `Surname, Initial/First ...`.
static NAME_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z'’\-]+,\s*[A-Z]").expect("valid author regex"));

/// Given-name-shaped piece: a single name word or run of initials, e.g.
/// `Jane`, `J.`, or `A. B.`.
static GIVEN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z'’\-]*\.?(?:\s+[A-Z]\.?)*$").expect("valid given-name regex")
});

/// Fragments shorter than this are separator debris, not citations.
const MIN_CITATION_LEN: usize = 20;

/// Split a text blob into individual citation strings.
///
/// Splits on blank lines and common list markers (bullets, dashes, numbered
/// items), then drops fragments too short to be citations.
pub fn split_citations(text: &str) -> Vec<String> {
    static LIST_MARKER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n\s*(?:[•\-*]|\d{1,2}[.)])\s+").expect("valid marker regex"));

    text.split("\n\n")
        .flat_map(|block| LIST_MARKER_RE.split(block))
        .map(str::trim)
        .filter(|c| c.len() >= MIN_CITATION_LEN)
        .map(|c| {
            // Strip a leading marker the line-based split could not see
            c.trim_start_matches(['•', '-', '*'])
                .trim_start()
                .to_string()
        })
        .collect()
}

/// Parse a single free-text citation into a structured record.
///
/// The style is selected by the caller and recorded as-is; it only matters
/// later, to the validator. Fails only on empty or whitespace-only input.
pub fn parse(raw_text: &str, style: CitationStyle) -> Result<CitationRecord> {
    if raw_text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let source_url = extract_url(raw_text);

    // Field extraction works on a copy with the URL blanked out so URL path
    // segments never masquerade as years or titles.
    let text = match &source_url {
        Some(url) => raw_text.replacen(url.as_str(), "", 1),
        None => raw_text.to_string(),
    };

    let (year, year_span) = extract_year(&text);
    let authors = extract_authors(&text, year_span);
    let title = extract_title(&text, &authors, year_span);

    Ok(CitationRecord {
        raw_text: raw_text.to_string(),
        authors,
        title,
        year,
        source_url,
        style,
    })
}

fn extract_url(text: &str) -> Option<String> {
    URL_RE.find(text).map(|m| {
        m.as_str()
            .trim_end_matches(['.', ',', ';', ':', ')'])
            .to_string()
    })
}

/// First four-digit year in parentheses position, falling back to a
/// period-bounded year. Returns the matched span for downstream extraction.
fn extract_year(text: &str) -> (Option<u16>, Option<(usize, usize)>) {
    if let Some(caps) = PAREN_YEAR_RE.captures(text) {
        let whole = caps.get(0).map(|m| (m.start(), m.end()));
        let year = caps.get(1).and_then(|m| m.as_str().parse().ok());
        return (year, whole);
    }
    if let Some(caps) = PERIOD_YEAR_RE.captures(text) {
        let span = caps.get(1).map(|m| (m.start(), m.end()));
        let year = caps.get(1).and_then(|m| m.as_str().parse().ok());
        return (year, span);
    }
    (None, None)
}

/// Author names are the segment before the year when the year is present,
/// otherwise a leading segment that looks like a name list. Anything else
/// yields an empty list (the "unknown author" case).
fn extract_authors(text: &str, year_span: Option<(usize, usize)>) -> Vec<String> {
    let segment = match year_span {
        Some((start, _)) => text[..start].trim(),
        None => {
            let lead = text.split_once(". ").map_or(text, |(head, _)| head);
            if NAME_LIST_RE.is_match(lead.trim()) {
                lead.trim()
            } else {
                return Vec::new();
            }
        }
    };

    split_author_segment(segment)
}

/// Split an author segment into individual names.
///
/// Commas both separate authors and attach given names to surnames
/// (`Smith, J., & Doe, A. B.`), so a given-name-shaped piece is folded into
/// the preceding name when that name is still a bare surname.
fn split_author_segment(segment: &str) -> Vec<String> {
    let segment = segment.trim().trim_end_matches([',', ';']);
    if segment.is_empty() {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();
    for group in segment.split(&['&', ';'][..]) {
        for part in group.split(" and ") {
            for piece in part.split(',') {
                let piece = piece.trim();
                if piece.is_empty() {
                    continue;
                }
                match names.last_mut() {
                    Some(last) if !last.contains(", ") && GIVEN_NAME_RE.is_match(piece) => {
                        last.push_str(", ");
                        last.push_str(piece);
                    }
                    _ => names.push(piece.to_string()),
                }
            }
        }
    }

    for name in &mut names {
        normalize_name(name);
    }
    names
}

/// Drop a sentence-final period from a name while keeping initial periods:
/// `Smith, John.` becomes `Smith, John` but `Smith, J.` stays intact.
fn normalize_name(name: &mut String) {
    if name.ends_with('.') {
        let mut chars = name.chars().rev().skip(1);
        if chars.next().is_some_and(|c| c.is_lowercase()) {
            name.pop();
        }
    }
}

/// Title is the quoted run when one exists, otherwise the longest run of
/// capitalized words outside the author segment and year.
fn extract_title(
    text: &str,
    authors: &[String],
    year_span: Option<(usize, usize)>,
) -> Option<String> {
    if let Some(caps) = QUOTED_TITLE_RE.captures(text) {
        let quoted = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim().trim_end_matches(['.', ',']).to_string())?;
        if !quoted.is_empty() {
            return Some(quoted);
        }
    }

    // Search only past the year (or past the author segment) so surnames
    // do not win over the actual title.
    let search_from = year_span.map(|(_, end)| end).unwrap_or_else(|| {
        authors
            .last()
            .and_then(|last| {
                let tail = last.rsplit(", ").next()?;
                text.find(tail).map(|i| i + tail.len())
            })
            .unwrap_or(0)
    });

    CAPITALIZED_RUN_RE
        .find_iter(&text[search_from..])
        .map(|m| m.as_str().trim())
        .filter(|run| !run.is_empty())
        .max_by_key(|run| run.len())
        .map(str::to_string)
}
