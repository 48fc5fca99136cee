mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ClassificationSettings, CorsSettings, DEFAULT_RESPONSE_PREFIX, GatewaySettings,
    LoggingSettings, RelayProvider, ServerSettings, ServicesSettings, Settings, StagingSettings,
};
