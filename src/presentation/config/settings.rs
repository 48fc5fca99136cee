use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::upstream::ClassificationMode;

pub const DEFAULT_RESPONSE_PREFIX: &str = "Classification process not yet implemented.";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub services: ServicesSettings,
    pub classification: ClassificationSettings,
    #[serde(default)]
    pub staging: StagingSettings,
    pub gateway: GatewaySettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicesSettings {
    pub provider: RelayProvider,
    pub speech_to_text_url: String,
    pub classification_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayProvider {
    Http,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationSettings {
    pub mode: ClassificationMode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StagingSettings {
    /// Falls back to the OS temp directory when unset.
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub response_prefix: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{environment}` if present, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("services.provider", "http")?
            .set_default(
                "services.speech_to_text_url",
                "http://127.0.0.1:5000/voice_to_text",
            )?
            .set_default("services.classification_url", "http://127.0.0.1:5001/classify")?
            .set_default("services.timeout_secs", 30_i64)?
            .set_default("classification.mode", "pass_through")?
            .set_default("gateway.response_prefix", DEFAULT_RESPONSE_PREFIX)?
            .set_default("gateway.max_upload_bytes", 25_i64 * 1024 * 1024)?
            .set_default("cors.allowed_origin", "http://localhost:3000")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
