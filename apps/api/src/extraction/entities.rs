//! Entity extraction — delegates span labeling to an external NER service
//! and aggregates labeled spans into deduplicated entity sets.
//!
//! ARCHITECTURAL RULE: no other module may call the recognizer directly.
//! All span labeling goes through the `SpanLabeler` trait, held in
//! `AppState` as `Arc<dyn SpanLabeler>` so tests can substitute a
//! deterministic stub for the real model.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::record::EntityBundle;

pub const LABEL_PERSON: &str = "PERSON";
pub const LABEL_ORG: &str = "ORG";
pub const LABEL_DATE: &str = "DATE";

const LABEL_PATH: &str = "/label";
const HEALTH_PATH: &str = "/health";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// A contiguous substring of the input text with the category the
/// recognizer assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSpan {
    pub text: String,
    pub label: String,
}

/// The span-labeling capability. Implementations must be safe for
/// concurrent read access from multiple pipeline invocations.
#[async_trait]
pub trait SpanLabeler: Send + Sync {
    async fn label_spans(&self, text: &str) -> Result<Vec<LabeledSpan>, AppError>;
}

/// Folds labeled spans into an `EntityBundle`.
///
/// Duplicate spans of the same category collapse (set union); labels other
/// than PERSON / ORG / DATE are ignored.
pub fn collect_entities(spans: &[LabeledSpan]) -> EntityBundle {
    let mut bundle = EntityBundle::default();
    for span in spans {
        match span.label.as_str() {
            LABEL_PERSON => {
                bundle.people.insert(span.text.clone());
            }
            LABEL_ORG => {
                bundle.organizations.insert(span.text.clone());
            }
            LABEL_DATE => {
                bundle.dates.insert(span.text.clone());
            }
            _ => {}
        }
    }
    bundle
}

#[derive(Debug, Serialize)]
struct LabelRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    spans: Vec<LabeledSpan>,
}

/// Span labeler backed by an external NER tagging service over HTTP.
///
/// One POST per document, no retries. A hung call blocks that invocation —
/// bounded only by the client timeout.
#[derive(Clone)]
pub struct HttpSpanLabeler {
    client: Client,
    base_url: String,
}

impl HttpSpanLabeler {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Startup readiness probe. Failure is fatal to the process: the
    /// recognizer is required, and unavailability is never retried
    /// per-document.
    pub async fn probe(&self) -> Result<(), AppError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::RecognizerUnavailable(format!("probe of {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RecognizerUnavailable(format!(
                "probe of {url} returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SpanLabeler for HttpSpanLabeler {
    async fn label_spans(&self, text: &str) -> Result<Vec<LabeledSpan>, AppError> {
        let url = format!("{}{LABEL_PATH}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LabelRequest { text })
            .send()
            .await
            .map_err(|e| AppError::Recognizer(format!("labeling request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Recognizer(format!(
                "labeling service returned status {status}: {body}"
            )));
        }

        let labeled: LabelResponse = response
            .json()
            .await
            .map_err(|e| AppError::Recognizer(format!("malformed labeling response: {e}")))?;

        debug!("Recognizer returned {} spans", labeled.spans.len());
        Ok(labeled.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, label: &str) -> LabeledSpan {
        LabeledSpan {
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_spans_land_in_their_assigned_category() {
        let bundle = collect_entities(&[
            span("Jane Doe", LABEL_PERSON),
            span("Acme Corp", LABEL_ORG),
            span("June 2021", LABEL_DATE),
        ]);
        assert!(bundle.people.contains("Jane Doe"));
        assert!(bundle.organizations.contains("Acme Corp"));
        assert!(bundle.dates.contains("June 2021"));
    }

    #[test]
    fn test_duplicate_spans_collapse() {
        let bundle = collect_entities(&[
            span("Acme Corp", LABEL_ORG),
            span("Acme Corp", LABEL_ORG),
        ]);
        assert_eq!(bundle.organizations.len(), 1);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let bundle = collect_entities(&[
            span("40%", "PERCENT"),
            span("San Francisco", "GPE"),
            span("$120k", "MONEY"),
        ]);
        assert_eq!(bundle, EntityBundle::default());
    }

    #[test]
    fn test_no_cross_category_merging() {
        // The same string under two labels stays in both sets, untouched.
        let bundle = collect_entities(&[span("Mercury", LABEL_PERSON), span("Mercury", LABEL_ORG)]);
        assert!(bundle.people.contains("Mercury"));
        assert!(bundle.organizations.contains("Mercury"));
        assert!(bundle.dates.is_empty());
    }

    #[test]
    fn test_empty_span_list_is_an_empty_bundle() {
        assert_eq!(collect_entities(&[]), EntityBundle::default());
    }

    #[test]
    fn test_labeled_span_deserializes_from_wire_form() {
        let json = r#"{"spans": [{"text": "Jane Doe", "label": "PERSON"}]}"#;
        let response: LabelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.spans, vec![span("Jane Doe", LABEL_PERSON)]);
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let labeler = HttpSpanLabeler::new("http://localhost:9000/".to_string());
        assert_eq!(labeler.base_url, "http://localhost:9000");
    }
}
