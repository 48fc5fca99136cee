use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::domain::{AudioUpload, UploadId};

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Writes the upload to a location unique to `upload_id`.
    async fn stage(
        &self,
        upload_id: UploadId,
        upload: &AudioUpload,
    ) -> Result<StagedAudio, StagingError>;
}

/// A staged upload on local disk. Owned temp files are removed when this is dropped.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
    content_type: String,
    _temp: Option<TempPath>,
}

impl StagedAudio {
    pub fn temporary(temp: TempPath, content_type: impl Into<String>) -> Self {
        Self {
            path: temp.to_path_buf(),
            content_type: content_type.into(),
            _temp: Some(temp),
        }
    }

    /// Refers to a file the caller keeps ownership of.
    pub fn borrowed(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
            _temp: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string())
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("staging directory unavailable: {0}")]
    DirectoryUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
