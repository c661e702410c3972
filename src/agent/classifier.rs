//! Keyword-driven intent classification.
//!
//! Ordered, mutually exclusive keyword families are checked over the
//! lower-cased query; the first family with any matching substring wins.
//! Matching is unanchored, so singular forms also cover their plurals.

use crate::domain::Intent;

const PROPERTY_DISCOVERY: &[&str] = &[
    "house",
    "property",
    "properties",
    "buy",
    "purchase",
    "listing",
    "home",
    "real estate",
    "search property",
    "find property",
    "show me property",
    "zillow",
    "airbnb",
];

const PREDICTIVE_ANALYTICS: &[&str] = &[
    "forecast",
    "predict",
    "trend",
    "growth",
    "performance",
    "analytics",
    "analyze",
    "chart",
    "graph",
    "visualize",
    "metric",
    "kpi",
];

const DOCUMENT_INTELLIGENCE: &[&str] = &[
    "document",
    "contract",
    "lease",
    "agreement",
    "clause",
    "extract",
    "upload",
    "report",
    "pdf",
];

const INSIGHT_SUMMARIZER: &[&str] = &[
    "insight",
    "summarize",
    "summary",
    "overview",
    "dashboard",
    "combine",
    "consolidate",
    "all data",
];

/// Keyword families in priority order. Property discovery is checked first,
/// so a query containing both "house" and "predict" is a property query.
const FAMILIES: &[(Intent, &[&str])] = &[
    (Intent::PropertyDiscovery, PROPERTY_DISCOVERY),
    (Intent::PredictiveAnalytics, PREDICTIVE_ANALYTICS),
    (Intent::DocumentIntelligence, DOCUMENT_INTELLIGENCE),
    (Intent::InsightSummarizer, INSIGHT_SUMMARIZER),
];

/// Classify a query into an intent. Deterministic and total: every input
/// maps to exactly one intent, defaulting to the conversational intent.
pub fn classify(query: &str) -> Intent {
    let lower = query.to_lowercase();

    for (intent, keywords) in FAMILIES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *intent;
        }
    }

    Intent::SmartSearch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_keywords_route_to_property_discovery() {
        assert_eq!(classify("show me houses in Dallas"), Intent::PropertyDiscovery);
        assert_eq!(classify("any new listings on zillow?"), Intent::PropertyDiscovery);
        assert_eq!(classify("I want to buy real estate"), Intent::PropertyDiscovery);
    }

    #[test]
    fn property_discovery_wins_over_analytics() {
        // Both families match; priority order decides
        assert_eq!(
            classify("predict the value of this house"),
            Intent::PropertyDiscovery
        );
        assert_eq!(
            classify("forecast trends for homes in Austin"),
            Intent::PropertyDiscovery
        );
    }

    #[test]
    fn analytics_keywords_route_to_predictive_analytics() {
        assert_eq!(classify("forecast next quarter"), Intent::PredictiveAnalytics);
        assert_eq!(classify("show me a chart of kpi growth"), Intent::PredictiveAnalytics);
    }

    #[test]
    fn document_keywords_route_to_document_intelligence() {
        assert_eq!(classify("extract the contract terms"), Intent::DocumentIntelligence);
        assert_eq!(classify("review my lease agreement"), Intent::DocumentIntelligence);
    }

    #[test]
    fn insight_keywords_route_to_insight_summarizer() {
        assert_eq!(classify("give me an overview dashboard"), Intent::InsightSummarizer);
        assert_eq!(classify("consolidate all data"), Intent::InsightSummarizer);
    }

    #[test]
    fn unmatched_queries_default_to_smart_search() {
        assert_eq!(classify("what can you do"), Intent::SmartSearch);
        assert_eq!(classify("hello there"), Intent::SmartSearch);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("SHOW ME A HOUSE"), classify("show me a house"));
        assert_eq!(classify("FORECAST GROWTH"), Intent::PredictiveAnalytics);
    }

    #[test]
    fn substring_matching_covers_plurals() {
        assert_eq!(classify("clauses in this doc"), Intent::DocumentIntelligence);
        assert_eq!(classify("market predictions"), Intent::PredictiveAnalytics);
        assert_eq!(classify("top insights"), Intent::InsightSummarizer);
    }
}
