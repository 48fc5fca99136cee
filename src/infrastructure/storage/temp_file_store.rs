use std::path::{Path, PathBuf};

use crate::application::ports::{StagedAudio, StagingError, StagingStore};
use crate::domain::{AudioUpload, UploadId};

const DEFAULT_EXTENSION: &str = "wav";

/// Stages each upload in its own temp file under `base_path`.
pub struct TempFileStagingStore {
    base_path: PathBuf,
}

impl TempFileStagingStore {
    pub fn new(base_path: Option<PathBuf>) -> Result<Self, StagingError> {
        let base_path = base_path.unwrap_or_else(std::env::temp_dir);
        std::fs::create_dir_all(&base_path).map_err(|e| {
            StagingError::DirectoryUnavailable(format!("{}: {}", base_path.display(), e))
        })?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl StagingStore for TempFileStagingStore {
    async fn stage(
        &self,
        upload_id: UploadId,
        upload: &AudioUpload,
    ) -> Result<StagedAudio, StagingError> {
        let prefix = format!("upload-{}-", upload_id);
        let suffix = format!(".{}", upload.extension().unwrap_or(DEFAULT_EXTENSION));

        let temp_path = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(&self.base_path)?
            .into_temp_path();

        // On failure `temp_path` drops here and removes the partial file.
        tokio::fs::write(&temp_path, upload.data()).await?;

        Ok(StagedAudio::temporary(temp_path, upload.content_type()))
    }
}
