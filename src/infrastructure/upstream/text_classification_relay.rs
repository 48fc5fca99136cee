use async_trait::async_trait;
use serde::Deserialize;

use super::UpstreamClient;
use crate::application::ports::{ClassificationRelay, RelayError};
use crate::domain::SentenceBatch;

pub const PLACEHOLDER_LABEL: &str = "Classified Text";

/// How the classification response body is turned into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Parse the body as a JSON array of labels.
    #[default]
    PassThrough,
    /// Issue the request but answer with a single fixed label.
    Placeholder,
}

pub struct HttpClassificationRelay {
    client: UpstreamClient,
    endpoint: String,
    mode: ClassificationMode,
}

impl HttpClassificationRelay {
    pub fn new(
        client: UpstreamClient,
        endpoint: impl Into<String>,
        mode: ClassificationMode,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            mode,
        }
    }
}

#[async_trait]
impl ClassificationRelay for HttpClassificationRelay {
    #[tracing::instrument(
        skip(self, batch),
        fields(endpoint = %self.endpoint, sentences = batch.len())
    )]
    async fn classify(&self, batch: &SentenceBatch) -> Result<Vec<String>, RelayError> {
        let body = self.client.post_json(&self.endpoint, batch.as_slice()).await?;

        match self.mode {
            ClassificationMode::PassThrough => {
                let labels: Vec<String> = serde_json::from_str(&body)
                    .map_err(|e| RelayError::InvalidResponse(format!("labels: {}", e)))?;
                Ok(labels)
            }
            ClassificationMode::Placeholder => {
                tracing::debug!(
                    discarded_bytes = body.len(),
                    "Placeholder mode, ignoring classification response"
                );
                Ok(vec![PLACEHOLDER_LABEL.to_string()])
            }
        }
    }
}
