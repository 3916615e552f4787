//! # citecheck - citation validation and scoring pipeline
//!
//! A small, self-contained pipeline that turns free-text bibliographic
//! citations into scored quality reports: parse, format-check, verify URL
//! reachability, and score.
//!
//! ## Overview
//!
//! citecheck can be used in two ways:
//!
//! 1. **As a standalone CLI** - Run the `citecheck` binary over a file of
//!    citations
//! 2. **As a library** - Call the pipeline from any orchestration layer
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use citecheck::{CitationPipeline, CitationStyle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = CitationPipeline::default();
//!     let scored = pipeline
//!         .process(
//!             "Smith, J. (2020). Climate Trends. https://example.org/report",
//!             CitationStyle::Apa,
//!         )
//!         .await?;
//!     println!("{:.2}: {:?}", scored.confidence_score, scored.rationale);
//!     Ok(())
//! }
//! ```
//!
//! ### As an Agent Tool
//!
//! ```rust,ignore
//! use citecheck::ToolRegistry;
//! use serde_json::json;
//!
//! let registry = ToolRegistry::with_default_tools();
//! let report = registry
//!     .execute("citation_validator", json!({"citations": text, "style": "APA"}))
//!     .await?;
//! ```
//!
//! ## Pipeline Stages
//!
//! | Stage | Module | I/O |
//! |-------|--------|-----|
//! | Parse | [`parser`] | pure |
//! | Validate | [`validator`] | pure |
//! | Verify | [`verifier`] | one HTTP probe, timeout-bounded |
//! | Score | [`scorer`] | pure |
//!
//! Data flows one-directional: raw text, parsed record, validated record,
//! scored record. Within one citation the stages are sequential (validator
//! and verifier overlap); across a batch, pipelines run independently with
//! no shared mutable state and results preserve input order.
//!
//! ## Error Model
//!
//! Only empty input is an error. Structural violations and unreachable URLs
//! are data: they flow into the confidence score and its rationale, never
//! abort a batch, and are never silently dropped.

/// Command-line interface.
pub mod cli;
/// Style-aware citation rendering.
pub mod formatter;
/// Free-text citation parsing.
pub mod parser;
/// Per-citation and batch pipeline.
pub mod pipeline;
/// Batch-level reporting.
pub mod report;
/// Confidence scoring and the scoring policy table.
pub mod scorer;
/// Tool surface for orchestration layers.
pub mod tools;
/// Core types (records, results, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;
/// Structural validation against per-style rule tables.
pub mod validator;
/// URL reachability probing.
pub mod verifier;

// Re-export commonly used types
pub use pipeline::CitationPipeline;
pub use report::BatchReport;
pub use scorer::ScoringPolicy;
pub use tools::{Tool, ToolRegistry};
pub use types::{
    AppError, CitationRecord, CitationStyle, ReachabilityResult, ReachabilityStatus, Result,
    ScoredCitation, StructuralError, ValidationResult,
};
pub use utils::CitecheckConfig;
pub use verifier::UrlVerifier;
