use anyhow::Result;

use cura_backend::agent::{Fixtures, ResponseAssembler};
use cura_backend::analysis::{DelegatedSummarizer, DocumentAnalyzer, SummaryService};
use cura_backend::services::{LlmClient, PdfTextExtractor};
use cura_backend::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting CURA agent backend"
    );

    // Delegated summaries need an API key; without one the document endpoint
    // uses the rule-based template summarizer only.
    let summary = match &settings.openai_api_key {
        Some(api_key) => {
            let client = LlmClient::new(
                &settings.openai_api_url,
                api_key,
                &settings.openai_model,
                settings.openai_timeout_seconds,
            )?;
            tracing::info!(model = %settings.openai_model, "Delegated summarizer enabled");
            SummaryService::with_delegate(Box::new(DelegatedSummarizer::new(client)))
        }
        None => {
            tracing::info!("OPENAI_API_KEY not set - using template summaries only");
            SummaryService::template_only()
        }
    };

    // Create application state
    let state = app::AppState::new(
        settings.clone(),
        ResponseAssembler::new(Fixtures::default()),
        DocumentAnalyzer::default(),
        summary,
        PdfTextExtractor::new(),
    );

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
