//! Canned payload data for the four structured intents.
//!
//! These are illustrative payloads representative of what a real listings /
//! analytics backend would return. They are immutable configuration injected
//! into the assembler, so tests can substitute their own set.

use crate::domain::{
    AnalyticsData, ChartPoint, DocumentCard, DocumentIntelligenceData, DocumentPortfolioSummary,
    InsightSummaryData, Kpi, KpiMetric, PriceRange, PropertyDiscoveryData, PropertyListing,
    SearchFilters,
};
use std::collections::BTreeMap;

/// Immutable payload set backing the response assembler.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub properties: PropertyDiscoveryData,
    pub analytics: AnalyticsData,
    pub documents: DocumentIntelligenceData,
    pub insights: InsightSummaryData,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            properties: property_discovery(),
            analytics: predictive_analytics(),
            documents: document_intelligence(),
            insights: insight_summary(),
        }
    }
}

fn listing(
    id: u32,
    image: &str,
    title: &str,
    address: &str,
    price: &str,
    rating: f64,
    kind: &str,
    beds: u32,
    baths: u32,
    sqft: &str,
    year: u32,
    tags: &[&str],
) -> PropertyListing {
    PropertyListing {
        id,
        image: image.to_string(),
        title: title.to_string(),
        address: address.to_string(),
        price: price.to_string(),
        rating,
        kind: kind.to_string(),
        beds,
        baths,
        sqft: sqft.to_string(),
        year,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn property_discovery() -> PropertyDiscoveryData {
    PropertyDiscoveryData {
        properties: vec![
            listing(
                1,
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=600&h=400&fit=crop",
                "Dream House Reality",
                "Evergreen 14 Jakarta, Indonesia",
                "$367.00/month",
                4.9,
                "Home",
                4,
                3,
                "3,200",
                2020,
                &["Garden", "Garage"],
            ),
            listing(
                2,
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=600&h=400&fit=crop",
                "Atap Langit Homes",
                "Business Park Jakarta, Indonesia",
                "$278.00/month",
                4.7,
                "Apartment",
                2,
                2,
                "1,800",
                2021,
                &["Gym", "Pool"],
            ),
            listing(
                3,
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=600&h=400&fit=crop",
                "Midnight Ridge Villa",
                "440 Thamrin Jakarta, Indonesia",
                "$452.00/month",
                4.8,
                "Villa",
                6,
                4,
                "4,500",
                2022,
                &["Garden", "Garage", "Pool"],
            ),
            listing(
                4,
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=600&h=400&fit=crop",
                "Unity Urban Homes",
                "Commerce Drive Jakarta, Indonesia",
                "$325.00/month",
                4.6,
                "Home",
                3,
                2,
                "2,600",
                2019,
                &["Garden"],
            ),
            listing(
                5,
                "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=600&h=400&fit=crop",
                "Lalaland Thick Villa",
                "Innovation Blvd Jakarta, Indonesia",
                "$512.00/month",
                4.9,
                "Villa",
                5,
                4,
                "4,200",
                2023,
                &["Garden", "Garage", "Gym"],
            ),
            listing(
                6,
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=600&h=400&fit=crop",
                "Modern Skyline Condo",
                "Financial District Jakarta, Indonesia",
                "$289.00/month",
                4.5,
                "Condo",
                2,
                1,
                "1,500",
                2021,
                &["Gym", "Pool"],
            ),
        ],
        filters: SearchFilters {
            locations: vec![
                "Jakarta, Indonesia".to_string(),
                "Semarang, Indonesia".to_string(),
            ],
            price_range: PriceRange { min: 0, max: 5000 },
            property_types: vec![
                "Home".to_string(),
                "Apartment".to_string(),
                "Villa".to_string(),
                "Condo".to_string(),
            ],
            amenities: vec![
                "Garden".to_string(),
                "Gym".to_string(),
                "Garage".to_string(),
                "Pool".to_string(),
            ],
        },
    }
}

fn metric(label: &str, value: &str, change: &str, trend: &str) -> KpiMetric {
    KpiMetric {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend: trend.to_string(),
    }
}

fn actual(name: &str, value: u32) -> ChartPoint {
    ChartPoint {
        name: name.to_string(),
        value: Some(value),
        forecast: None,
    }
}

fn projected(name: &str, forecast: u32) -> ChartPoint {
    ChartPoint {
        name: name.to_string(),
        value: None,
        forecast: Some(forecast),
    }
}

fn predictive_analytics() -> AnalyticsData {
    AnalyticsData {
        metrics: vec![
            metric("Total Value", "$2.4B", "+12.5%", "up"),
            metric("Occupancy Rate", "94.2%", "+2.1%", "up"),
            metric("Expenses", "$48.2M", "-3.2%", "down"),
            metric("ROI", "18.5%", "+4.2%", "up"),
            metric("Revenue Growth", "15.3%", "+5.1%", "up"),
        ],
        chart_data: vec![
            actual("Jan", 2400),
            actual("Feb", 2800),
            actual("Mar", 3200),
            actual("Apr", 3500),
            actual("May", 3800),
            projected("Jun", 4100),
            projected("Jul", 4400),
            projected("Aug", 4700),
            projected("Sep", 5000),
        ],
        chart_type: "line".to_string(),
        insights: vec![
            "Strong upward trend projected for next quarter".to_string(),
            "Occupancy rates expected to exceed 95%".to_string(),
            "Cost efficiency improvements continuing".to_string(),
        ],
    }
}

fn extracted(fields: &[(&str, &str)]) -> BTreeMap<String, String> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn document_intelligence() -> DocumentIntelligenceData {
    DocumentIntelligenceData {
        documents: vec![
            DocumentCard {
                name: "Plano HQ Lease Agreement".to_string(),
                kind: "Commercial Lease".to_string(),
                extracted: extracted(&[
                    ("Lease Term", "5 years"),
                    ("Monthly Rent", "$45,000"),
                    ("Expiration Date", "2026-03-15"),
                    ("Renewal Option", "Yes"),
                    ("Energy Clause", "Tenant responsible for utilities"),
                    ("Maintenance", "Shared responsibility"),
                ]),
                clauses: vec![
                    "Early termination penalty: 3 months rent".to_string(),
                    "Maintenance responsibilities: Shared between landlord and tenant".to_string(),
                    "Expansion rights: Available with 90-day notice".to_string(),
                    "Sublease permitted with written approval".to_string(),
                ],
                risks: vec![
                    "Expiration in 14 months - renewal negotiations should begin".to_string(),
                    "Energy costs not capped - potential for increases".to_string(),
                ],
                compliance: 95,
            },
            DocumentCard {
                name: "Dallas Tower Lease Agreement".to_string(),
                kind: "Office Lease".to_string(),
                extracted: extracted(&[
                    ("Lease Term", "3 years"),
                    ("Monthly Rent", "$38,000"),
                    ("Expiration Date", "2025-06-30"),
                    ("Renewal Option", "Yes"),
                    ("Energy Clause", "Landlord covers HVAC"),
                    ("Maintenance", "Landlord responsible"),
                ]),
                clauses: vec![
                    "Sublease permitted with approval".to_string(),
                    "Parking included: 10 spaces".to_string(),
                    "Common area maintenance: Pro-rated".to_string(),
                    "No early termination clause".to_string(),
                ],
                risks: vec![
                    "Expiring in 7 months - urgent action required".to_string(),
                    "No early termination option - locked in until expiration".to_string(),
                ],
                compliance: 88,
            },
        ],
        summary: DocumentPortfolioSummary {
            total_documents: 2,
            total_clauses: 8,
            expiring_soon: 1,
            average_compliance: 91.5,
            total_monthly_rent: "$83,000".to_string(),
        },
    }
}

fn kpi(label: &str, value: &str, change: &str) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    }
}

fn insight_summary() -> InsightSummaryData {
    InsightSummaryData {
        kpis: vec![
            kpi("Portfolio Value", "$7.4B", "+12.5%"),
            kpi("Occupancy", "94.2%", "+2.1%"),
            kpi("Revenue", "$48.2M", "+8.3%"),
            kpi("Expenses", "$32.1M", "-3.2%"),
            kpi("Net Income", "$16.1M", "+15.2%"),
        ],
        top_insights: vec![
            "Austin Complex shows exceptional 15% growth - consider expansion".to_string(),
            "Energy efficiency improvements reducing costs by 6% across portfolio".to_string(),
            "3 leases expiring in Q2 require proactive management".to_string(),
            "Market conditions favorable for strategic acquisitions".to_string(),
            "Occupancy rates consistently above industry average of 89%".to_string(),
        ],
        recommendations: vec![
            "Renew Dallas Tower lease before Q2 expiration - negotiate favorable terms".to_string(),
            "Consider expansion in Austin market given strong performance".to_string(),
            "Implement energy efficiency program across all properties".to_string(),
            "Review Plano HQ lease terms 6 months before expiration".to_string(),
        ],
        chart_data: vec![
            actual("Q1", 2400),
            actual("Q2", 2800),
            actual("Q3", 3200),
            actual("Q4", 3500),
            projected("Q1 2025", 4100),
            projected("Q2 2025", 4700),
        ],
    }
}
