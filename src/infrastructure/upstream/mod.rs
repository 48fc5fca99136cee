mod mock_relays;
mod relay_factory;
mod speech_to_text_relay;
mod text_classification_relay;
mod upstream_client;

pub use mock_relays::{MOCK_LABEL, MockClassificationRelay, MockSpeechRelay};
pub use relay_factory::{RelayFactory, Relays};
pub use speech_to_text_relay::HttpSpeechRelay;
pub use text_classification_relay::{
    ClassificationMode, HttpClassificationRelay, PLACEHOLDER_LABEL,
};
pub use upstream_client::UpstreamClient;
