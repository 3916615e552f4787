//! URL liveness probing for cited sources.
//!
//! The verifier is the pipeline's only I/O boundary. It issues a single
//! probe per URL (HEAD preferred, GET when the server rejects HEAD) within a
//! configured timeout, and it never fails: every transport-level problem is
//! normalized to [`ReachabilityStatus::Unknown`] so one flaky URL cannot
//! abort scoring of the rest of a batch.

use crate::types::{ReachabilityResult, ReachabilityStatus};
use chrono::Utc;
use reqwest::{Client, Method, StatusCode, Url};
use std::time::Duration;

/// Default probe timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("citecheck/", env!("CARGO_PKG_VERSION"));

/// Reachability checker over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct UrlVerifier {
    client: Client,
    timeout: Duration,
}

impl UrlVerifier {
    /// Build a verifier with the given per-probe timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .unwrap_or_default();
        Self { client, timeout }
    }

    /// Probe a URL and classify the outcome.
    ///
    /// - HTTP 200-399 is `Reachable`
    /// - HTTP 400-599 is `Unreachable`
    /// - timeouts, DNS/connection failures, and malformed URLs are `Unknown`
    ///
    /// A URL that fails syntax validation short-circuits to `Unknown` without
    /// spending any of the timeout budget on the network.
    pub async fn verify(&self, url: &str) -> ReachabilityResult {
        let parsed = match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            _ => {
                tracing::debug!(url, "malformed URL, skipping probe");
                return ReachabilityResult {
                    url: Some(url.to_string()),
                    status: ReachabilityStatus::Unknown,
                    status_code: None,
                    checked_at: Utc::now(),
                };
            }
        };

        let (status, status_code) = self.probe(parsed).await;
        ReachabilityResult {
            url: Some(url.to_string()),
            status,
            status_code,
            checked_at: Utc::now(),
        }
    }

    /// Single probe: HEAD first, one GET retry if the server rejects HEAD.
    /// No retries beyond that; retry policy belongs to the caller.
    async fn probe(&self, url: Url) -> (ReachabilityStatus, Option<u16>) {
        match self.request(Method::HEAD, url.clone()).await {
            Ok(status) if head_rejected(status) => {
                tracing::debug!(%url, %status, "HEAD rejected, retrying with GET");
                match self.request(Method::GET, url).await {
                    Ok(status) => (classify(status), Some(status.as_u16())),
                    Err(err) => transport_failure(&err),
                }
            }
            Ok(status) => (classify(status), Some(status.as_u16())),
            Err(err) => transport_failure(&err),
        }
    }

    async fn request(&self, method: Method, url: Url) -> reqwest::Result<StatusCode> {
        let response = self
            .client
            .request(method, url)
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(response.status())
    }
}

impl Default for UrlVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn head_rejected(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
    )
}

fn classify(status: StatusCode) -> ReachabilityStatus {
    match status.as_u16() {
        200..=399 => ReachabilityStatus::Reachable,
        400..=599 => ReachabilityStatus::Unreachable,
        _ => ReachabilityStatus::Unknown,
    }
}

fn transport_failure(err: &reqwest::Error) -> (ReachabilityStatus, Option<u16>) {
    tracing::warn!(error = %err, "URL probe failed at transport level");
    (ReachabilityStatus::Unknown, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_unknown_without_network() {
        let verifier = UrlVerifier::new(Duration::from_millis(50));
        let result = verifier.verify("not-a-url").await;
        assert_eq!(result.status, ReachabilityStatus::Unknown);
        assert!(result.status_code.is_none());
        assert_eq!(result.url.as_deref(), Some("not-a-url"));
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_unknown() {
        let verifier = UrlVerifier::default();
        let result = verifier.verify("ftp://example.org/file").await;
        assert_eq!(result.status, ReachabilityStatus::Unknown);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(
            classify(StatusCode::OK),
            ReachabilityStatus::Reachable
        );
        assert_eq!(
            classify(StatusCode::PERMANENT_REDIRECT),
            ReachabilityStatus::Reachable
        );
        assert_eq!(
            classify(StatusCode::BAD_REQUEST),
            ReachabilityStatus::Unreachable
        );
        assert_eq!(
            classify(StatusCode::INTERNAL_SERVER_ERROR),
            ReachabilityStatus::Unreachable
        );
    }

    #[test]
    fn test_head_rejection_codes() {
        assert!(head_rejected(StatusCode::METHOD_NOT_ALLOWED));
        assert!(head_rejected(StatusCode::NOT_IMPLEMENTED));
        assert!(!head_rejected(StatusCode::OK));
        assert!(!head_rejected(StatusCode::NOT_FOUND));
    }
}
