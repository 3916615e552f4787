//! Citation validator tool: the pipeline exposed as a JSON-driven tool for
//! agent frameworks and other orchestration layers.
//!
//! The core stays pure; this layer only decodes arguments, runs the
//! pipeline, and encodes the batch report.

use crate::pipeline::CitationPipeline;
use crate::report::BatchReport;
use crate::tools::registry::Tool;
use crate::types::{AppError, CitationStyle, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Validates, verifies, and scores citations in a block of text.
#[derive(Default)]
pub struct CitationValidatorTool {
    pipeline: CitationPipeline,
}

impl CitationValidatorTool {
    pub fn new(pipeline: CitationPipeline) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Tool for CitationValidatorTool {
    fn name(&self) -> &str {
        "citation_validator"
    }

    fn description(&self) -> &str {
        "Validate citations against a citation style, check URL accessibility, and score citation quality"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "citations": {
                    "type": "string",
                    "description": "Text containing one or more citations to validate"
                },
                "style": {
                    "type": "string",
                    "enum": ["APA", "MLA", "Chicago"],
                    "description": "Citation style to validate against (default: APA)",
                    "default": "APA"
                },
                "verify_urls": {
                    "type": "boolean",
                    "description": "Probe cited URLs for reachability; disable for offline runs (default: true)",
                    "default": true
                }
            },
            "required": ["citations"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let citations = args
            .get("citations")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::InvalidInput("Missing 'citations' parameter".to_string()))?;

        let style = match args.get("style").and_then(|v| v.as_str()) {
            Some(s) => s.parse::<CitationStyle>()?,
            None => CitationStyle::Apa,
        };

        let verify_urls = args
            .get("verify_urls")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        let pipeline = if verify_urls {
            self.pipeline.clone()
        } else {
            self.pipeline.clone().without_url_verification()
        };

        let scored = pipeline.process_text(citations, style).await?;
        let report = BatchReport::from_scored(scored, style);

        serde_json::to_value(&report)
            .map_err(|e| AppError::Internal(format!("Report serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = CitationValidatorTool::default();
        assert_eq!(tool.name(), "citation_validator");
        assert!(!tool.description().is_empty());

        let schema = tool.parameters_schema();
        assert!(schema.is_object());
        assert!(schema.get("properties").is_some());
    }

    #[tokio::test]
    async fn test_missing_citations_parameter() {
        let tool = CitationValidatorTool::default();
        let result = tool.execute(json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unknown_style_is_rejected() {
        let tool = CitationValidatorTool::default();
        let result = tool
            .execute(json!({
                "citations": "Smith, J. (2020). Climate Trends. Example Press.",
                "style": "harvard"
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_validates_text_block() {
        let tool = CitationValidatorTool::default();
        let result = tool
            .execute(json!({
                "citations": "Smith, J. (2020). Climate Trends. Example Press.",
                "style": "APA"
            }))
            .await
            .unwrap();

        assert_eq!(result["total_citations"], 1);
        assert_eq!(result["citation_style"], "apa");
        assert!(result["citations"].is_array());
    }
}
