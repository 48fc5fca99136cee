use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use rapidcare_gateway::application::services::GatewayService;
use rapidcare_gateway::infrastructure::observability::{TracingConfig, init_tracing};
use rapidcare_gateway::infrastructure::storage::TempFileStagingStore;
use rapidcare_gateway::infrastructure::upstream::RelayFactory;
use rapidcare_gateway::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))?;

    let staging_store = Arc::new(TempFileStagingStore::new(
        settings.staging.directory.as_ref().map(PathBuf::from),
    )?);
    tracing::info!(path = %staging_store.base_path().display(), "Staging directory ready");

    let relays = RelayFactory::create(&settings.services, settings.classification.mode)?;
    tracing::info!(
        provider = ?settings.services.provider,
        speech_to_text_url = %settings.services.speech_to_text_url,
        classification_url = %settings.services.classification_url,
        classification_mode = ?settings.classification.mode,
        timeout_secs = settings.services.timeout_secs,
        "Relays configured"
    );

    let gateway_service = Arc::new(GatewayService::new(
        staging_store,
        relays.speech,
        relays.classification,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        gateway_service,
        settings,
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
