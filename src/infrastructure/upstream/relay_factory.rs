use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ClassificationRelay, RelayError, SpeechRelay};
use crate::presentation::config::{RelayProvider, ServicesSettings};

use super::mock_relays::{MockClassificationRelay, MockSpeechRelay};
use super::speech_to_text_relay::HttpSpeechRelay;
use super::text_classification_relay::{ClassificationMode, HttpClassificationRelay};
use super::upstream_client::UpstreamClient;

pub struct Relays {
    pub speech: Arc<dyn SpeechRelay>,
    pub classification: Arc<dyn ClassificationRelay>,
}

pub struct RelayFactory;

impl RelayFactory {
    pub fn create(
        settings: &ServicesSettings,
        mode: ClassificationMode,
    ) -> Result<Relays, RelayError> {
        match settings.provider {
            RelayProvider::Http => {
                let client = UpstreamClient::new(Duration::from_secs(settings.timeout_secs))?;
                Ok(Relays {
                    speech: Arc::new(HttpSpeechRelay::new(
                        client.clone(),
                        &settings.speech_to_text_url,
                    )),
                    classification: Arc::new(HttpClassificationRelay::new(
                        client,
                        &settings.classification_url,
                        mode,
                    )),
                })
            }
            RelayProvider::Mock => Ok(Relays {
                speech: Arc::new(MockSpeechRelay),
                classification: Arc::new(MockClassificationRelay),
            }),
        }
    }
}
