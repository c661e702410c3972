//! PDF-to-text decoding.
//!
//! Decoding is CPU-bound, so it runs on the blocking pool. Failures surface
//! as `ApiError::Extraction` with the underlying cause embedded, which is
//! part of the document endpoint's error contract.

use crate::error::ApiError;
use tracing::debug;

/// Text and page count extracted from one uploaded PDF.
#[derive(Debug, Clone)]
pub struct PdfText {
    pub text: String,
    pub num_pages: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract(&self, bytes: Vec<u8>) -> Result<PdfText, ApiError> {
        let size = bytes.len();

        let result = tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "PDF decode task panicked");
                ApiError::DocumentProcessing(anyhow::anyhow!("PDF decode task failed: {e}"))
            })?;

        match result {
            Ok(parsed) => {
                debug!(
                    num_pages = parsed.num_pages,
                    text_len = parsed.text.len(),
                    size,
                    "PDF parsed"
                );
                Ok(parsed)
            }
            Err(cause) => Err(ApiError::Extraction(format!(
                "Failed to extract text from PDF: {cause}"
            ))),
        }
    }
}

fn decode(bytes: &[u8]) -> Result<PdfText, String> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
    let num_pages = document.get_pages().len();

    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())?;

    Ok(PdfText { text, num_pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_bytes_fail_with_wrapped_cause() {
        let extractor = PdfTextExtractor::new();
        let err = extractor
            .extract(b"this is not a pdf".to_vec())
            .await
            .expect_err("garbage input must fail");

        match err {
            ApiError::Extraction(msg) => {
                assert!(msg.starts_with("Failed to extract text from PDF:"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
