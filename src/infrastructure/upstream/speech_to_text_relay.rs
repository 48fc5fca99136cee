use async_trait::async_trait;
use reqwest::multipart;

use super::UpstreamClient;
use crate::application::ports::{RelayError, SpeechRelay, StagedAudio};
use crate::domain::Transcript;

/// Posts staged audio as a `file` multipart part and returns the body untouched.
pub struct HttpSpeechRelay {
    client: UpstreamClient,
    endpoint: String,
}

impl HttpSpeechRelay {
    pub fn new(client: UpstreamClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SpeechRelay for HttpSpeechRelay {
    #[tracing::instrument(skip(self, audio), fields(endpoint = %self.endpoint))]
    async fn transcribe(&self, audio: &StagedAudio) -> Result<Transcript, RelayError> {
        let audio_data = tokio::fs::read(audio.path()).await?;
        let bytes = audio_data.len();

        let file_part = multipart::Part::bytes(audio_data)
            .file_name(audio.file_name())
            .mime_str(audio.content_type())
            .map_err(|e| RelayError::RequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new().part("file", file_part);

        tracing::debug!(bytes, "Sending audio to speech-to-text service");

        let body = self.client.post_multipart(&self.endpoint, form).await?;

        tracing::debug!(chars = body.len(), "Speech-to-text response received");

        Ok(Transcript::new(body))
    }
}
