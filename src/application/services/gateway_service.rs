use std::sync::Arc;

use crate::application::ports::{
    ClassificationRelay, RelayError, SpeechRelay, StagingError, StagingStore,
};
use crate::domain::{
    AudioUpload, ClassifiedSentence, ClassifiedTranscript, SentenceBatch, Transcript, UploadId,
};
use crate::infrastructure::observability::redact_transcript;

pub struct GatewayService {
    staging_store: Arc<dyn StagingStore>,
    speech_relay: Arc<dyn SpeechRelay>,
    classification_relay: Arc<dyn ClassificationRelay>,
}

impl GatewayService {
    pub fn new(
        staging_store: Arc<dyn StagingStore>,
        speech_relay: Arc<dyn SpeechRelay>,
        classification_relay: Arc<dyn ClassificationRelay>,
    ) -> Self {
        Self {
            staging_store,
            speech_relay,
            classification_relay,
        }
    }

    /// Stages the upload under a fresh id and relays it to the speech service.
    /// The staged file is removed before this returns, whatever the outcome.
    pub async fn transcribe_upload(&self, upload: AudioUpload) -> Result<Transcript, GatewayError> {
        let upload_id = UploadId::new();

        let staged = self
            .staging_store
            .stage(upload_id, &upload)
            .await
            .map_err(GatewayError::Staging)?;

        tracing::debug!(
            upload_id = %upload_id,
            bytes = upload.len(),
            path = %staged.path().display(),
            "Upload staged"
        );

        let transcript = self
            .speech_relay
            .transcribe(&staged)
            .await
            .map_err(GatewayError::Upstream)?;

        tracing::info!(
            upload_id = %upload_id,
            chars = transcript.as_str().len(),
            preview = %redact_transcript(transcript.as_str()),
            "Upload transcribed"
        );

        Ok(transcript)
    }

    pub async fn classify_sentences(
        &self,
        batch: &SentenceBatch,
    ) -> Result<Vec<String>, GatewayError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let labels = self
            .classification_relay
            .classify(batch)
            .await
            .map_err(GatewayError::Upstream)?;

        tracing::info!(
            sentences = batch.len(),
            labels = labels.len(),
            "Sentence batch classified"
        );

        Ok(labels)
    }

    /// Transcribes the upload, splits the transcript into sentences and labels each one.
    pub async fn classify_upload(
        &self,
        upload: AudioUpload,
    ) -> Result<ClassifiedTranscript, GatewayError> {
        let transcript = self.transcribe_upload(upload).await?;
        let batch = SentenceBatch::from_transcript(&transcript);
        let labels = self.classify_sentences(&batch).await?;

        if labels.len() != batch.len() {
            return Err(GatewayError::Upstream(RelayError::InvalidResponse(format!(
                "expected {} labels, got {}",
                batch.len(),
                labels.len()
            ))));
        }

        let classified = batch
            .into_inner()
            .into_iter()
            .zip(labels)
            .map(|(sentence, label)| ClassifiedSentence { sentence, label })
            .collect();

        Ok(ClassifiedTranscript {
            transcript,
            classified,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("staging: {0}")]
    Staging(StagingError),
    #[error("upstream: {0}")]
    Upstream(RelayError),
}
