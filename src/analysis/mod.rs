//! Document analysis: heuristic metric extraction and summary generation.

pub mod metrics;
pub mod summary;

pub use metrics::{AnalyzerConfig, DocumentAnalyzer};
pub use summary::{DelegatedSummarizer, SummaryService, Summarizer, TemplateSummarizer};
