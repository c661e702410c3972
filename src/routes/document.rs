//! Document endpoint: accept a PDF upload, extract text, derive metrics and
//! a summary.

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::path::Path;
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::DocumentAnalysisResponse;
use crate::error::{ApiError, ApiResult};

/// POST /api/document
///
/// Multipart form with a `file` field holding a PDF (validated by MIME type
/// or `.pdf` extension).
pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<DocumentAnalysisResponse>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, content_type, bytes));
            break;
        }
    }

    let Some((file_name, content_type, bytes)) = upload else {
        return Err(ApiError::BadRequest("No file uploaded.".to_string()));
    };

    let is_pdf_mime = content_type.as_deref() == Some("application/pdf");
    let is_pdf_ext = Path::new(&file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if !is_pdf_mime && !is_pdf_ext {
        return Err(ApiError::BadRequest(
            "Invalid file type. Only PDF files are supported.".to_string(),
        ));
    }

    tracing::info!(file_name = %file_name, size = bytes.len(), "Received document upload");

    let pdf = state.pdf.extract(bytes.to_vec()).await?;
    let metrics = state.analyzer.analyze(&pdf.text);
    let ai_summary = state.summary.summarize(&pdf.text, &file_name, &metrics).await;

    tracing::info!(
        file_name = %file_name,
        num_pages = pdf.num_pages,
        total_clauses = metrics.total_clauses,
        compliance_score = metrics.compliance_score,
        "Document analyzed"
    );

    Ok(Json(DocumentAnalysisResponse {
        success: true,
        file_name,
        num_pages: pdf.num_pages,
        metrics,
        ai_summary,
    }))
}
