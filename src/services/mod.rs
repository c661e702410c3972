//! Service layer modules for external integrations.
//!
//! Contains the chat-completions client used for delegated summaries and the
//! PDF text decoder.

pub mod llm_client;
pub mod pdf;

pub use llm_client::LlmClient;
pub use pdf::{PdfText, PdfTextExtractor};
