//! Document analysis result types.

use serde::Serialize;

/// Heuristic metrics derived from one document's extracted text.
///
/// Computed once per upload and never mutated. The compliance score is a
/// synthetic 50-100 health metric derived from keyword polarity, not a
/// regulatory assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetrics {
    pub total_clauses: u32,
    pub rent_amount: String,
    pub expiring_soon: bool,
    pub compliance_score: u32,
}

/// Terminal record returned by the document endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysisResponse {
    pub success: bool,
    pub file_name: String,
    pub num_pages: usize,
    pub metrics: DocumentMetrics,
    pub ai_summary: String,
}
