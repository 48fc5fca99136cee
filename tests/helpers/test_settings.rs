use rapidcare_gateway::infrastructure::upstream::ClassificationMode;
use rapidcare_gateway::presentation::config::{
    ClassificationSettings, CorsSettings, DEFAULT_RESPONSE_PREFIX, GatewaySettings,
    LoggingSettings, RelayProvider, ServerSettings, ServicesSettings, Settings, StagingSettings,
};

pub const TEST_ORIGIN: &str = "http://localhost:3000";
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        services: ServicesSettings {
            provider: RelayProvider::Mock,
            speech_to_text_url: "http://127.0.0.1:5000/voice_to_text".to_string(),
            classification_url: "http://127.0.0.1:5001/classify".to_string(),
            timeout_secs: 5,
        },
        classification: ClassificationSettings {
            mode: ClassificationMode::PassThrough,
        },
        staging: StagingSettings { directory: None },
        gateway: GatewaySettings {
            response_prefix: DEFAULT_RESPONSE_PREFIX.to_string(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        },
        cors: CorsSettings {
            allowed_origin: TEST_ORIGIN.to_string(),
        },
        logging: LoggingSettings {
            level: "info".to_string(),
            enable_json: false,
        },
    }
}
