//! Colored output helpers for the citecheck CLI.

use crate::report::BatchReport;
use crate::types::ScoredCitation;
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the per-citation lines and the batch summary.
    pub fn report(&self, report: &BatchReport) {
        for (idx, citation) in report.citations.iter().enumerate() {
            self.citation(idx + 1, citation);
        }
        self.summary(report);
    }

    fn citation(&self, number: usize, citation: &ScoredCitation) {
        let score = citation.confidence_score;
        let raw = truncate(&citation.validation.record.raw_text, 72);

        if self.colored {
            let score_str = format!("{:.2}", score);
            let colored_score = if score >= crate::report::VALID_THRESHOLD {
                score_str.green().bold().to_string()
            } else {
                score_str.red().bold().to_string()
            };
            println!("  [{}] {} {}", number, colored_score, raw);
        } else {
            println!("  [{}] {:.2} {}", number, score, raw);
        }

        for line in &citation.rationale {
            if self.colored {
                println!("        {}", line.dimmed());
            } else {
                println!("        {}", line);
            }
        }
    }

    fn summary(&self, report: &BatchReport) {
        let line = format!(
            "{}/{} valid, overall quality {:.2}",
            report.valid_citations, report.total_citations, report.overall_quality_score
        );
        if self.colored {
            if report.needs_improvement {
                println!("\n  {} {}", "!".yellow().bold(), line.yellow());
            } else {
                println!("\n  {} {}", "✓".green().bold(), line.green());
            }
        } else {
            println!("\n  {}", line);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 72), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(100);
        let cut = truncate(&long, 72);
        assert_eq!(cut.chars().count(), 72);
        assert!(cut.ends_with("..."));
    }
}
