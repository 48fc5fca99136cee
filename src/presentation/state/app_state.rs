use std::sync::Arc;

use crate::application::services::GatewayService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub gateway_service: Arc<GatewayService>,
    pub settings: Settings,
}
