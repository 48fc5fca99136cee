use async_trait::async_trait;

use super::RelayError;
use crate::domain::SentenceBatch;

#[async_trait]
pub trait ClassificationRelay: Send + Sync {
    /// Returns one label per sentence, in batch order.
    async fn classify(&self, batch: &SentenceBatch) -> Result<Vec<String>, RelayError>;
}
