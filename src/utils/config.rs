//! TOML-based configuration for citecheck.
//!
//! Declarative configuration of the verifier and the scoring policy table
//! via `citecheck.toml`. Every field has a default, and a missing file falls
//! back to defaults entirely, so the binary works with zero setup.

use crate::pipeline::CitationPipeline;
use crate::scorer::ScoringPolicy;
use crate::types::{AppError, Result};
use crate::verifier::UrlVerifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Root configuration structure loaded from citecheck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CitecheckConfig {
    pub verifier: VerifierConfig,
    /// Scoring table; override with care, existing reports depend on the
    /// default constants.
    pub scoring: ScoringPolicy,
}

// ============= Verifier Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Per-probe timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CitecheckConfig {
    /// Load configuration from a TOML file. A missing file yields defaults;
    /// a present but unparseable file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Build a pipeline from this configuration.
    pub fn pipeline(&self) -> CitationPipeline {
        CitationPipeline::new(
            UrlVerifier::new(Duration::from_secs(self.verifier.timeout_secs)),
            self.scoring,
        )
    }
}
