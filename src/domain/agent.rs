//! Agent response envelope and per-intent payload types.
//!
//! Each intent carries its own payload shape; the envelope's `data` field is
//! a tagged union matched exhaustively at the assembler boundary, and is
//! `null` only for the conversational (smart search) intent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The discrete category a free-text query is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PropertyDiscovery,
    PredictiveAnalytics,
    DocumentIntelligence,
    InsightSummarizer,
    SmartSearch,
}

impl Intent {
    /// Fixed human-readable label shown as the response title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PropertyDiscovery => "Property Discovery",
            Self::PredictiveAnalytics => "Predictive Analytics",
            Self::DocumentIntelligence => "Document Intelligence",
            Self::InsightSummarizer => "Insight Summary Dashboard",
            Self::SmartSearch => "Smart Search",
        }
    }
}

/// Normalized response returned for any classified query.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "type")]
    pub intent: Intent,
    pub title: String,
    pub content: String,
    pub data: Option<EnvelopeData>,
}

/// Intent-specific structured payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    Properties(PropertyDiscoveryData),
    Analytics(AnalyticsData),
    Documents(DocumentIntelligenceData),
    Insights(InsightSummaryData),
}

// =============================================================================
// Property discovery
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDiscoveryData {
    pub properties: Vec<PropertyListing>,
    pub filters: SearchFilters,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub address: String,
    pub price: String,
    pub rating: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: String,
    pub year: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub locations: Vec<String>,
    pub price_range: PriceRange,
    pub property_types: Vec<String>,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

// =============================================================================
// Predictive analytics
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub metrics: Vec<KpiMetric>,
    pub chart_data: Vec<ChartPoint>,
    pub chart_type: String,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiMetric {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: String,
}

/// One point of a time series; historical points carry `value`, projected
/// points carry `forecast`. The unused side is serialized as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: Option<u32>,
    pub forecast: Option<u32>,
}

// =============================================================================
// Document intelligence
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIntelligenceData {
    pub documents: Vec<DocumentCard>,
    pub summary: DocumentPortfolioSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentCard {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extracted: BTreeMap<String, String>,
    pub clauses: Vec<String>,
    pub risks: Vec<String>,
    pub compliance: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPortfolioSummary {
    pub total_documents: u32,
    pub total_clauses: u32,
    pub expiring_soon: u32,
    pub average_compliance: f64,
    pub total_monthly_rent: String,
}

// =============================================================================
// Insight summarizer
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummaryData {
    pub kpis: Vec<Kpi>,
    pub top_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub change: String,
}
