use crate::application::ports::{ClassificationRelay, RelayError, SpeechRelay, StagedAudio};
use crate::domain::{SentenceBatch, Transcript};

pub const MOCK_LABEL: &str = "unclassified";

pub struct MockSpeechRelay;

#[async_trait::async_trait]
impl SpeechRelay for MockSpeechRelay {
    async fn transcribe(&self, audio: &StagedAudio) -> Result<Transcript, RelayError> {
        let metadata = tokio::fs::metadata(audio.path()).await?;
        Ok(Transcript::new(format!(
            "Mock transcript of {} bytes.",
            metadata.len()
        )))
    }
}

pub struct MockClassificationRelay;

#[async_trait::async_trait]
impl ClassificationRelay for MockClassificationRelay {
    async fn classify(&self, batch: &SentenceBatch) -> Result<Vec<String>, RelayError> {
        Ok(vec![MOCK_LABEL.to_string(); batch.len()])
    }
}
