use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use voicedesk::application::ports::{CredentialProvider, GenerativeModel};
use voicedesk::application::services::{ExtractionOptions, RequestService, TaskExtractionService};
use voicedesk::infrastructure::credentials::{EnvCredentialProvider, StaticCredentialProvider};
use voicedesk::infrastructure::llm::{GeminiClient, MockGenerativeModel};
use voicedesk::infrastructure::observability::{TracingConfig, init_tracing};
use voicedesk::infrastructure::persistence::InMemoryRequestRepository;
use voicedesk::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        &settings.logging,
        environment.as_str(),
    ));

    let (model, credentials) = build_model(&settings)?;

    if credentials.api_key().is_none() {
        tracing::warn!(
            variable = %credentials.name(),
            "Model API key not set; transcription requests will fail until it is"
        );
    }

    let extraction_service = Arc::new(TaskExtractionService::new(
        model,
        credentials,
        ExtractionOptions {
            model: settings.gemini.model.clone(),
            temperature: settings.gemini.temperature,
        },
    ));

    let request_service = Arc::new(RequestService::new(Arc::new(
        InMemoryRequestRepository::seeded(),
    )));

    let state = AppState {
        extraction_service,
        request_service,
        max_upload_size_bytes: settings.server.max_upload_size_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, model = %settings.gemini.model, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_model(
    settings: &Settings,
) -> anyhow::Result<(Arc<dyn GenerativeModel>, Arc<dyn CredentialProvider>)> {
    if settings.scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: using canned model responses");
        let model: Arc<dyn GenerativeModel> = Arc::new(
            MockGenerativeModel::scaffold().with_delay(Duration::from_millis(
                settings.scaffold.mock_response_delay_ms,
            )),
        );
        let credentials: Arc<dyn CredentialProvider> =
            Arc::new(StaticCredentialProvider::configured("scaffold"));
        return Ok((model, credentials));
    }

    let model: Arc<dyn GenerativeModel> = Arc::new(
        GeminiClient::from_settings(&settings.gemini).context("Failed to build Gemini client")?,
    );
    let credentials: Arc<dyn CredentialProvider> =
        Arc::new(EnvCredentialProvider::new(&settings.gemini.api_key_env));
    Ok((model, credentials))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
