//! The citation pipeline: parse, validate, verify, score.
//!
//! Stages within a single citation run sequentially, except that the
//! validator and the URL probe have no data dependency on each other and run
//! concurrently. Batches fan out across independent per-citation pipelines
//! with no shared mutable state, and results come back in input order.

use crate::scorer::{self, ScoringPolicy};
use crate::types::{CitationStyle, ReachabilityResult, Result, ScoredCitation};
use crate::verifier::UrlVerifier;
use crate::{parser, validator};
use futures::future::join_all;

/// Per-citation processing pipeline.
///
/// Holds no per-citation state; a single pipeline can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct CitationPipeline {
    verifier: UrlVerifier,
    policy: ScoringPolicy,
    verify_urls: bool,
}

impl Default for CitationPipeline {
    fn default() -> Self {
        Self::new(UrlVerifier::default(), ScoringPolicy::default())
    }
}

impl CitationPipeline {
    pub fn new(verifier: UrlVerifier, policy: ScoringPolicy) -> Self {
        Self {
            verifier,
            policy,
            verify_urls: true,
        }
    }

    /// Disable URL probing: reachability is reported unknown for every
    /// citation, URL-bearing or not, and no network call is made. For
    /// offline runs and batch callers that cannot afford the timeout budget.
    pub fn without_url_verification(mut self) -> Self {
        self.verify_urls = false;
        self
    }

    /// Run one citation through all four stages.
    ///
    /// Fails only on empty input; every quality or reachability problem is
    /// reported as data inside the returned [`ScoredCitation`].
    pub async fn process(&self, raw_text: &str, style: CitationStyle) -> Result<ScoredCitation> {
        let record = parser::parse(raw_text, style)?;

        // Validator and verifier are independent; the scorer needs both.
        let validation_fut = async { validator::validate(&record) };
        let reachability_fut = async {
            match &record.source_url {
                Some(url) if self.verify_urls => self.verifier.verify(url).await,
                other => ReachabilityResult::unchecked(other.clone()),
            }
        };
        let (validation, reachability) = tokio::join!(validation_fut, reachability_fut);

        tracing::debug!(
            errors = validation.structural_errors.len(),
            status = ?reachability.status,
            "citation processed"
        );

        Ok(scorer::score(&self.policy, validation, reachability))
    }

    /// Run a batch of citations concurrently, preserving input order.
    ///
    /// An empty citation anywhere in the batch fails the whole call; partial
    /// batches would silently drop inputs, which the pipeline never does.
    pub async fn process_batch(
        &self,
        citations: &[String],
        style: CitationStyle,
    ) -> Result<Vec<ScoredCitation>> {
        let futures = citations.iter().map(|raw| self.process(raw, style));
        join_all(futures).await.into_iter().collect()
    }

    /// Split a free-text blob into citations and score each of them.
    ///
    /// The splitter never emits empty fragments, so this cannot fail on
    /// input shape; it returns an empty list for text with no citations.
    pub async fn process_text(
        &self,
        text: &str,
        style: CitationStyle,
    ) -> Result<Vec<ScoredCitation>> {
        let citations = parser::split_citations(text);
        self.process_batch(&citations, style).await
    }
}
