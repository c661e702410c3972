//! Document summary generation.
//!
//! Two strategies sit behind the `Summarizer` capability trait: a local
//! deterministic template and a delegated LLM call. `SummaryService` composes
//! them so that any delegate failure silently falls back to the template;
//! callers always receive a string, never an error.

use crate::domain::DocumentMetrics;
use crate::services::LlmClient;
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        file_name: &str,
        metrics: &DocumentMetrics,
    ) -> Result<String>;
}

/// Rule-based summary composed from the metrics alone. Always available.
#[derive(Debug, Clone, Default)]
pub struct TemplateSummarizer;

static LOCATION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+").expect("location pattern is valid"));

impl TemplateSummarizer {
    /// A capitalized word from the filename stands in for the property
    /// location; "the document" when the filename has none.
    pub fn render(&self, file_name: &str, metrics: &DocumentMetrics) -> String {
        let location = LOCATION_LABEL
            .find(file_name)
            .map(|m| m.as_str())
            .unwrap_or("the document");

        let clauses = if metrics.total_clauses == 1 {
            "1 clause".to_string()
        } else {
            format!("{} clauses", metrics.total_clauses)
        };
        let rent = if metrics.rent_amount != "N/A" {
            format!(" with rent of {}", metrics.rent_amount)
        } else {
            String::new()
        };
        let expiring = if metrics.expiring_soon { " (expiring soon)" } else { "" };

        format!(
            "{location} lease shows {clauses} and {}% compliance{rent}{expiring}.",
            metrics.compliance_score
        )
    }
}

#[async_trait]
impl Summarizer for TemplateSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        file_name: &str,
        metrics: &DocumentMetrics,
    ) -> Result<String> {
        Ok(self.render(file_name, metrics))
    }
}

/// Summarizer backed by the external chat-completions API.
pub struct DelegatedSummarizer {
    client: LlmClient,
}

impl DelegatedSummarizer {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Summarizer for DelegatedSummarizer {
    async fn summarize(
        &self,
        text: &str,
        file_name: &str,
        metrics: &DocumentMetrics,
    ) -> Result<String> {
        self.client.summarize_document(text, file_name, metrics).await
    }
}

/// Composes an optional delegate with the template fallback.
pub struct SummaryService {
    delegate: Option<Box<dyn Summarizer>>,
    template: TemplateSummarizer,
}

impl SummaryService {
    pub fn template_only() -> Self {
        Self {
            delegate: None,
            template: TemplateSummarizer,
        }
    }

    pub fn with_delegate(delegate: Box<dyn Summarizer>) -> Self {
        Self {
            delegate: Some(delegate),
            template: TemplateSummarizer,
        }
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Infallible: one delegate attempt at most, then the template.
    pub async fn summarize(
        &self,
        text: &str,
        file_name: &str,
        metrics: &DocumentMetrics,
    ) -> String {
        if let Some(delegate) = &self.delegate {
            match delegate.summarize(text, file_name, metrics).await {
                Ok(summary) if !summary.trim().is_empty() => return summary,
                Ok(_) => {
                    tracing::warn!("Delegated summarizer returned an empty summary - using template")
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Delegated summary failed - using template fallback")
                }
            }
        }

        self.template.render(file_name, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn metrics() -> DocumentMetrics {
        DocumentMetrics {
            total_clauses: 12,
            rent_amount: "$45,000".to_string(),
            expiring_soon: true,
            compliance_score: 88,
        }
    }

    #[test]
    fn template_uses_capitalized_filename_word_as_location() {
        let summary = TemplateSummarizer.render("Dallas_Tower_Lease.pdf", &metrics());
        assert_eq!(
            summary,
            "Dallas lease shows 12 clauses and 88% compliance with rent of $45,000 (expiring soon)."
        );
    }

    #[test]
    fn template_falls_back_to_generic_location() {
        let summary = TemplateSummarizer.render("lease-2024.pdf", &metrics());
        assert!(summary.starts_with("the document lease shows"));
    }

    #[test]
    fn template_omits_unknown_rent_and_singular_clause() {
        let m = DocumentMetrics {
            total_clauses: 1,
            rent_amount: "N/A".to_string(),
            expiring_soon: false,
            compliance_score: 95,
        };
        let summary = TemplateSummarizer.render("Plano.pdf", &m);
        assert_eq!(summary, "Plano lease shows 1 clause and 95% compliance.");
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _: &str, _: &str, _: &DocumentMetrics) -> Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn failing_delegate_falls_back_to_template() {
        let service = SummaryService::with_delegate(Box::new(FailingSummarizer));
        let summary = service.summarize("full text", "Austin.pdf", &metrics()).await;
        assert!(!summary.is_empty());
        assert!(summary.starts_with("Austin lease shows"));
    }

    struct EmptySummarizer;

    #[async_trait]
    impl Summarizer for EmptySummarizer {
        async fn summarize(&self, _: &str, _: &str, _: &DocumentMetrics) -> Result<String> {
            Ok("  ".to_string())
        }
    }

    #[tokio::test]
    async fn empty_delegate_output_falls_back_to_template() {
        let service = SummaryService::with_delegate(Box::new(EmptySummarizer));
        let summary = service.summarize("full text", "Austin.pdf", &metrics()).await;
        assert!(summary.starts_with("Austin lease shows"));
    }

    #[tokio::test]
    async fn template_only_service_summarizes() {
        let service = SummaryService::template_only();
        assert!(!service.has_delegate());
        let summary = service.summarize("text", "Plano.pdf", &metrics()).await;
        assert!(summary.contains("Plano"));
    }
}
