use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use sentilyze::application::services::AnalysisService;
use sentilyze::infrastructure::observability::{TracingConfig, init_tracing};
use sentilyze::infrastructure::sentiment::LexiconSentimentScorer;
use sentilyze::infrastructure::text_processing::ExtractorFactory;
use sentilyze::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    let file_loader = Arc::new(ExtractorFactory::create(&settings.extraction));
    let scorer = Arc::new(LexiconSentimentScorer::new());

    let analysis_service = Arc::new(AnalysisService::new(
        file_loader,
        scorer,
        Duration::from_secs(settings.extraction.timeout_secs),
        settings.analysis.preview_chars,
    ));

    let state = AppState {
        analysis_service,
        max_upload_bytes: settings.upload.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        max_upload_mb = settings.upload.max_file_size_mb,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
