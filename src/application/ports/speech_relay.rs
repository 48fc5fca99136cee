use async_trait::async_trait;

use super::{RelayError, StagedAudio};
use crate::domain::Transcript;

#[async_trait]
pub trait SpeechRelay: Send + Sync {
    async fn transcribe(&self, audio: &StagedAudio) -> Result<Transcript, RelayError>;
}
