mod classification_relay;
mod relay_error;
mod speech_relay;
mod staging_store;

pub use classification_relay::ClassificationRelay;
pub use relay_error::RelayError;
pub use speech_relay::SpeechRelay;
pub use staging_store::{StagedAudio, StagingError, StagingStore};
