//! Heuristic metric extraction from document text.
//!
//! All scans are independent keyword/regex passes over already-extracted
//! plain text. The extractor never fails on well-formed input; an empty or
//! keyword-free document degenerates to the baseline metrics.

use crate::domain::DocumentMetrics;
use chrono::{Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Legal/real-estate terms whose word-boundary occurrences approximate the
/// number of clauses in a lease.
const CLAUSE_TERMS: &[&str] = &[
    "clause",
    "section",
    "article",
    "paragraph",
    "term",
    "condition",
    "renewal",
    "termination",
    "maintenance",
    "insurance",
    "indemnification",
    "sublease",
    "assignment",
    "force majeure",
    "default",
    "penalty",
    "energy",
    "utility",
    "hvac",
    "compliance",
    "warranty",
    "liability",
];

const RISK_TERMS: &[&str] = &["risk", "warning", "violation", "non-compliance", "breach", "default"];

const POSITIVE_TERMS: &[&str] = &["compliance", "compliant", "certified", "approved", "validated"];

const EXPIRATION_KEYWORDS: &[&str] =
    &["expire", "expiration", "expiry", "terminate", "end date", "lease end"];

/// Half-width of the text window searched for dates around an expiration keyword.
const EXPIRY_CONTEXT_BYTES: usize = 200;

/// A fixed vocabulary compiled to word-boundary, case-insensitive patterns.
/// One scanner serves clause counting and both compliance keyword lists so
/// the matching convention cannot drift between them.
struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    fn new(words: &[&str]) -> Self {
        let patterns = words
            .iter()
            .map(|w| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w)))
                    .expect("keyword pattern is valid")
            })
            .collect();
        Self { patterns }
    }

    /// Total occurrences of any vocabulary word in `text`.
    fn total_hits(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }
}

static CLAUSE_SET: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(CLAUSE_TERMS));
static RISK_SET: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(RISK_TERMS));
static POSITIVE_SET: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(POSITIVE_TERMS));

static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+(?:\.\d{2})?").expect("currency pattern is valid"));

/// Ordered rent patterns; the first pattern with a match wins, not the most
/// specific one.
static RENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\$[\d,]+(?:\.\d{2})?",
        r"(?i)(?:rent|monthly rent|base rent)[\s\S]{0,100}?\$[\d,]+(?:\.\d{2})?",
        r"(?i)(?:rental|lease amount)[\s\S]{0,100}?\$[\d,]+(?:\.\d{2})?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("rent pattern is valid"))
    .collect()
});

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{1,2}/\d{1,2}/\d{4}",
        r"\d{4}-\d{2}-\d{2}",
        r"(?i)(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date pattern is valid"))
    .collect()
});

/// Tunable scoring constants. The defaults reproduce the behavior the
/// frontend was built against.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Raw clause-term hits overcount because one clause is referenced by
    /// several synonyms; dividing approximates de-duplication.
    pub clause_divisor: u32,
    pub expiry_window_days: i64,
    pub base_score: i64,
    pub risk_penalty: i64,
    pub positive_bonus: i64,
    pub min_score: i64,
    pub max_score: i64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            clause_divisor: 3,
            expiry_window_days: 180,
            base_score: 95,
            risk_penalty: 2,
            positive_bonus: 1,
            min_score: 50,
            max_score: 100,
        }
    }
}

/// Derives `DocumentMetrics` from extracted document text.
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalyzer {
    config: AnalyzerConfig,
}

impl DocumentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, text: &str) -> DocumentMetrics {
        DocumentMetrics {
            total_clauses: self.clause_count(text),
            rent_amount: rent_amount(text),
            expiring_soon: self.expiring_soon(text, Utc::now().date_naive()),
            compliance_score: self.compliance_score(text),
        }
    }

    fn clause_count(&self, text: &str) -> u32 {
        let hits = CLAUSE_SET.total_hits(text) as u32;
        (hits / self.config.clause_divisor).max(1)
    }

    fn compliance_score(&self, text: &str) -> u32 {
        let mut score = self.config.base_score;
        score -= self.config.risk_penalty * RISK_SET.total_hits(text) as i64;
        score += self.config.positive_bonus * POSITIVE_SET.total_hits(text) as i64;
        score.clamp(self.config.min_score, self.config.max_score) as u32
    }

    /// True if any expiration keyword has a parseable date within ±200 chars
    /// that falls between `today` and `today + expiry_window_days` inclusive.
    fn expiring_soon(&self, text: &str, today: NaiveDate) -> bool {
        let lower = text.to_lowercase();
        let horizon = today + Duration::days(self.config.expiry_window_days);

        for keyword in EXPIRATION_KEYWORDS {
            let Some(idx) = lower.find(keyword) else {
                continue;
            };

            let start = floor_char_boundary(&lower, idx.saturating_sub(EXPIRY_CONTEXT_BYTES));
            let end = ceil_char_boundary(&lower, idx + EXPIRY_CONTEXT_BYTES);
            let window = &lower[start..end];

            for pattern in DATE_PATTERNS.iter() {
                for candidate in pattern.find_iter(window) {
                    // Unparseable date strings are silently skipped
                    if let Some(date) = parse_candidate_date(candidate.as_str()) {
                        if date >= today && date <= horizon {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }
}

/// First dollar-formatted substring found by the ordered rent patterns.
fn rent_amount(text: &str) -> String {
    for pattern in RENT_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            if let Some(dollar) = DOLLAR_AMOUNT.find(m.as_str()) {
                return dollar.as_str().to_string();
            }
        }
    }
    "N/A".to_string()
}

fn parse_candidate_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // "June 30, 2025" with or without the comma
    let cleaned = raw.replace(',', "");
    NaiveDate::parse_from_str(&cleaned, "%B %d %Y").ok()
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(s: &str, mut i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> DocumentAnalyzer {
        DocumentAnalyzer::default()
    }

    #[test]
    fn empty_text_degenerates_to_baseline_metrics() {
        let metrics = analyzer().analyze("");
        assert_eq!(metrics.total_clauses, 1);
        assert_eq!(metrics.rent_amount, "N/A");
        assert!(!metrics.expiring_soon);
        assert_eq!(metrics.compliance_score, 95);
    }

    #[test]
    fn clause_count_divides_hits_by_three() {
        let metrics = analyzer().analyze("clause section article paragraph term condition");
        assert_eq!(metrics.total_clauses, 2);
    }

    #[test]
    fn clause_count_floors_at_one() {
        // One hit / 3 floors to 0, reported as 1
        let metrics = analyzer().analyze("the renewal happens yearly");
        assert_eq!(metrics.total_clauses, 1);
    }

    #[test]
    fn clause_terms_are_word_bounded() {
        // "sectional" and "terminal" must not count as "section" / "term"
        let metrics = analyzer().analyze("sectional sofas near the terminal");
        assert_eq!(metrics.total_clauses, 1);
    }

    #[test]
    fn rent_amount_is_extracted() {
        let metrics = analyzer().analyze("Rent: $1,200.00 due monthly");
        assert_eq!(metrics.rent_amount, "$1,200.00");
    }

    #[test]
    fn first_dollar_amount_wins() {
        let metrics = analyzer().analyze("Deposit of $500 and rent of $1,200.00");
        assert_eq!(metrics.rent_amount, "$500");
    }

    #[test]
    fn missing_rent_reports_sentinel() {
        let metrics = analyzer().analyze("no currency amounts here");
        assert_eq!(metrics.rent_amount, "N/A");
    }

    #[test]
    fn risk_keywords_subtract_two_each() {
        let metrics = analyzer().analyze("breach of covenant, breach again, and one more breach");
        assert_eq!(metrics.compliance_score, 89);
    }

    #[test]
    fn positive_keywords_add_one_each() {
        let metrics = analyzer().analyze("certified and approved and validated");
        assert_eq!(metrics.compliance_score, 98);
    }

    #[test]
    fn score_clamps_at_lower_bound() {
        let text = "risk ".repeat(30);
        let metrics = analyzer().analyze(&text);
        assert_eq!(metrics.compliance_score, 50);
    }

    #[test]
    fn score_clamps_at_upper_bound() {
        let text = "approved ".repeat(40);
        let metrics = analyzer().analyze(&text);
        assert_eq!(metrics.compliance_score, 100);
    }

    #[test]
    fn score_keywords_are_word_bounded() {
        let metrics = analyzer().analyze("risky business with approval pending");
        assert_eq!(metrics.compliance_score, 95);
    }

    #[test]
    fn non_compliance_hits_both_lists() {
        // "non-compliance" counts as a risk term (-2) and its "compliance"
        // suffix crosses a word boundary into the positive list (+1); the
        // two lists are scanned independently by design.
        let metrics = analyzer().analyze("non-compliance");
        assert_eq!(metrics.compliance_score, 94);
    }

    #[test]
    fn near_expiry_date_sets_flag() {
        let today = Utc::now().date_naive();
        let soon = (today + Duration::days(90)).format("%m/%d/%Y");
        let text = format!("This lease will expire on {soon} unless renewed.");
        assert!(analyzer().expiring_soon(&text, today));
    }

    #[test]
    fn far_expiry_date_leaves_flag_unset() {
        let today = Utc::now().date_naive();
        let far = (today + Duration::days(200)).format("%m/%d/%Y");
        let text = format!("This lease will expire on {far} unless renewed.");
        assert!(!analyzer().expiring_soon(&text, today));
    }

    #[test]
    fn past_dates_do_not_count_as_expiring() {
        let today = Utc::now().date_naive();
        let past = (today - Duration::days(30)).format("%Y-%m-%d");
        let text = format!("expiration date was {past}");
        assert!(!analyzer().expiring_soon(&text, today));
    }

    #[test]
    fn month_name_dates_are_parsed() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let text = "The agreement will terminate on June 30, 2025.";
        assert!(analyzer().expiring_soon(text, today));
    }

    #[test]
    fn dates_outside_the_keyword_window_are_ignored() {
        let today = Utc::now().date_naive();
        let soon = (today + Duration::days(90)).format("%m/%d/%Y");
        let padding = "x".repeat(400);
        let text = format!("expire {padding} {soon}");
        assert!(!analyzer().expiring_soon(&text, today));
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let today = Utc::now().date_naive();
        let text = "expiration set for 99/99/9999";
        assert!(!analyzer().expiring_soon(text, today));
    }

    #[test]
    fn custom_config_changes_the_arithmetic() {
        let analyzer = DocumentAnalyzer::new(AnalyzerConfig {
            risk_penalty: 10,
            ..AnalyzerConfig::default()
        });
        let metrics = analyzer.analyze("a breach occurred");
        assert_eq!(metrics.compliance_score, 85);
    }
}
