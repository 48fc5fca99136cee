use std::sync::Arc;

use axum::Router;

use rapidcare_gateway::application::ports::{ClassificationRelay, SpeechRelay, StagingStore};
use rapidcare_gateway::application::services::GatewayService;
use rapidcare_gateway::presentation::{AppState, Settings, create_router};

pub fn create_test_app(
    staging_store: Arc<dyn StagingStore>,
    speech_relay: Arc<dyn SpeechRelay>,
    classification_relay: Arc<dyn ClassificationRelay>,
    settings: Settings,
) -> Router {
    let gateway_service = Arc::new(GatewayService::new(
        staging_store,
        speech_relay,
        classification_relay,
    ));

    create_router(AppState {
        gateway_service,
        settings,
    })
}
