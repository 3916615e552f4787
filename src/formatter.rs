//! Render a parsed citation back out in its selected style.
//!
//! Formatting is best-effort: only recovered fields are rendered, in the
//! style's canonical order. Pure and deterministic, so the same record
//! always formats identically.

use crate::types::{CitationRecord, CitationStyle};

/// Format a record according to its citation style.
pub fn format_citation(record: &CitationRecord) -> String {
    match record.style {
        CitationStyle::Apa => format_apa(record),
        CitationStyle::Mla => format_mla(record),
        CitationStyle::Chicago => format_chicago(record),
    }
}

/// APA: `Authors. (Year). Title. Retrieved from URL.`
fn format_apa(record: &CitationRecord) -> String {
    let mut parts = Vec::new();
    if let Some(authors) = join_authors(&record.authors, ", & ") {
        parts.push(authors);
    }
    if let Some(year) = record.year {
        parts.push(format!("({})", year));
    }
    if let Some(title) = &record.title {
        parts.push(title.clone());
    }
    if let Some(url) = &record.source_url {
        parts.push(format!("Retrieved from {}", url));
    }
    finish(parts, ". ")
}

/// MLA: `Authors, "Title", Year, URL.`
fn format_mla(record: &CitationRecord) -> String {
    let mut parts = Vec::new();
    if let Some(authors) = join_authors(&record.authors, " and ") {
        parts.push(authors);
    }
    if let Some(title) = &record.title {
        parts.push(format!("\"{}\"", title));
    }
    if let Some(year) = record.year {
        parts.push(year.to_string());
    }
    if let Some(url) = &record.source_url {
        parts.push(url.clone());
    }
    finish(parts, ", ")
}

/// Chicago: `Authors, "Title", (Year), URL.`
fn format_chicago(record: &CitationRecord) -> String {
    let mut parts = Vec::new();
    if let Some(authors) = join_authors(&record.authors, " and ") {
        parts.push(authors);
    }
    if let Some(title) = &record.title {
        parts.push(format!("\"{}\"", title));
    }
    if let Some(year) = record.year {
        parts.push(format!("({})", year));
    }
    if let Some(url) = &record.source_url {
        parts.push(url.clone());
    }
    finish(parts, ", ")
}

fn join_authors(authors: &[String], separator: &str) -> Option<String> {
    if authors.is_empty() {
        None
    } else {
        Some(authors.join(separator))
    }
}

fn finish(parts: Vec<String>, separator: &str) -> String {
    if parts.is_empty() {
        return String::new();
    }
    // A period-joined part that already ends in a period (initials, trimmed
    // titles) would double up; drop the part's own period before joining.
    let parts: Vec<String> = if separator.starts_with('.') {
        parts
            .into_iter()
            .map(|mut part| {
                if part.ends_with('.') {
                    part.pop();
                }
                part
            })
            .collect()
    } else {
        parts
    };
    format!("{}.", parts.join(separator))
}
